//! Image asset loading.
//!
//! The scene needs exactly two images: the base card and the glitter layer.
//! They are loaded sequentially (the glitter plane reuses the base plane's
//! aspect ratio and alpha mask, so the base must decode first) and either
//! failure is reported as a single consolidated [`AssetLoadError`] telling
//! the caller which of the two loads went wrong.

use std::fmt;
use std::path::Path;

/// Which of the two scene images a load error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// The base card image (color + alpha mask for the glitter layer).
    Base,
    /// The glitter overlay image.
    Glitter,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base image"),
            Self::Glitter => write!(f, "glitter image"),
        }
    }
}

/// A failed image load, tagged with which image it was.
#[derive(Debug)]
pub struct AssetLoadError {
    /// Which image failed to load.
    pub which: AssetKind,
    cause: image::ImageError,
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {}: {}", self.which, self.cause)
    }
}

impl std::error::Error for AssetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// A decoded RGBA8 image, ready for GPU upload.
#[derive(Debug)]
pub struct DecodedImage {
    /// Tightly packed RGBA8 pixels, row-major.
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Decode an image file into RGBA8.
///
/// # Errors
///
/// Returns [`AssetLoadError`] tagged with `which` if the file cannot be
/// read or decoded.
pub fn decode_image(
    path: &Path,
    which: AssetKind,
) -> Result<DecodedImage, AssetLoadError> {
    let rgba = image::open(path)
        .map_err(|cause| AssetLoadError { which, cause })?
        .into_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("decoded {which} {}: {width}x{height}", path.display());
    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_image_reports_base_kind() {
        let err = decode_image(
            Path::new("definitely/not/here.png"),
            AssetKind::Base,
        )
        .unwrap_err();
        assert_eq!(err.which, AssetKind::Base);
    }

    #[test]
    fn missing_glitter_image_reports_glitter_kind() {
        let err = decode_image(
            Path::new("definitely/not/here.png"),
            AssetKind::Glitter,
        )
        .unwrap_err();
        assert_eq!(err.which, AssetKind::Glitter);
        assert!(err.to_string().contains("glitter image"));
    }
}
