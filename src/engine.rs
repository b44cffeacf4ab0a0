//! The glitter-card engine: owns every GPU resource and drives the frame.
//!
//! [`ShimmerEngine`] is the crate's factory-made handle. It owns the device,
//! surface, textures, geometry, and pass chain; dropping it releases all of
//! them deterministically. One `update` + `render` call pair per frame is
//! the whole scheduler: plane sway and the sparkle clock both advance from
//! that single tick, however many planes are animated.

use web_time::Instant;

use crate::assets::{decode_image, AssetKind};
use crate::camera::{Camera, CameraBinding};
use crate::error::ShimmerError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::ImageTexture;
use crate::lighting::Lighting;
use crate::options::Options;
use crate::renderer::plane::PlaneRenderer;
use crate::renderer::postprocess::composer::Composer;
use crate::scene::Scene;

/// The engine handle. Construct with [`ShimmerEngine::new`], feed it the two
/// card images with [`load_assets`](Self::load_assets), then call
/// [`update`](Self::update) and [`render`](Self::render) once per frame.
pub struct ShimmerEngine {
    /// Core wgpu resources.
    pub context: RenderContext,
    /// The CPU-side scene (meshes + lights).
    pub scene: Scene,
    camera: Camera,
    camera_binding: CameraBinding,
    lighting: Lighting,
    planes: PlaneRenderer,
    composer: Composer,
    options: Options,
    oscillator: crate::animation::Oscillator,
    /// Wall-clock start of the animation.
    started: Instant,
    /// Base texture, kept as the glitter plane's alpha mask.
    base_texture: Option<ImageTexture>,
}

impl ShimmerEngine {
    /// Create an engine rendering into the given surface target.
    ///
    /// # Errors
    ///
    /// Returns [`ShimmerError::Gpu`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, ShimmerError> {
        let context = RenderContext::new(window, size).await?;

        let camera = Camera::new(size.0, size.1, &options.camera);
        let camera_binding = CameraBinding::new(&context, &camera);

        let scene = Scene::new(&options.lighting);
        let lighting =
            Lighting::new(&context, scene.lights(), &options.lighting);

        let planes = PlaneRenderer::new(
            &context,
            &camera_binding.layout,
            &lighting.layout,
        );
        let composer = Composer::new(&context, &options.effects);

        let oscillator = crate::animation::Oscillator::new(
            options.sway_radians(),
            options.motion.axis,
        );

        Ok(Self {
            context,
            scene,
            camera,
            camera_binding,
            lighting,
            planes,
            composer,
            options,
            oscillator,
            started: Instant::now(),
            base_texture: None,
        })
    }

    /// Load the base and glitter images, in that order, building the scene
    /// planes and appending the sparkle pass.
    ///
    /// The loads are sequential because the glitter plane reuses the base
    /// plane's aspect ratio and the base texture as its alpha mask. A base
    /// failure leaves the scene empty; a glitter failure leaves the base
    /// plane in place with the two-pass chain. Either way the error is
    /// returned rather than swallowed.
    ///
    /// # Errors
    ///
    /// Returns [`ShimmerError::Asset`] tagged with which image failed.
    pub fn load_assets(
        &mut self,
        base_path: &std::path::Path,
        glitter_path: &std::path::Path,
    ) -> Result<(), ShimmerError> {
        let base_image = decode_image(base_path, AssetKind::Base)?;
        let base_texture =
            ImageTexture::upload(&self.context, &base_image, "Base Texture");
        let base_index = self
            .scene
            .add_base_plane(base_image.width, base_image.height);
        self.planes.add_plane(
            &self.context,
            &self.scene.meshes()[base_index],
            &base_texture,
            &base_texture,
        );
        self.base_texture = Some(base_texture);
        log::info!(
            "base plane ready ({}x{})",
            base_image.width,
            base_image.height
        );

        let glitter_image = decode_image(glitter_path, AssetKind::Glitter)?;
        let glitter_texture = ImageTexture::upload(
            &self.context,
            &glitter_image,
            "Glitter Texture",
        );
        if let (Some(glitter_index), Some(mask)) =
            (self.scene.add_glitter_plane(), self.base_texture.as_ref())
        {
            self.planes.add_plane(
                &self.context,
                &self.scene.meshes()[glitter_index],
                &glitter_texture,
                mask,
            );
            self.composer.enable_sparkle(&self.context);
            log::info!("glitter overlay ready, sparkle pass appended");
        }
        Ok(())
    }

    /// Advance the single animation tick: sway every plane and move the
    /// sparkle clock, all from one wall-clock reading.
    pub fn update(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        let rotation = self.oscillator.rotation(t);
        for (index, mesh) in self.scene.meshes().iter().enumerate() {
            self.planes
                .update_model(&self.context.queue, index, mesh, rotation);
        }
        self.composer.set_time(&self.context.queue, t);
    }

    /// Execute one frame: scene pass into the composer's input, then the
    /// post-processing chain onto the swapchain, then present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.encode_scene_pass(&mut encoder);
        self.composer.render(&mut encoder, &view);
        self.context.submit(encoder);

        frame.present();
        Ok(())
    }

    /// Resize the surface, camera, and composer targets. Zero-sized
    /// dimensions are ignored entirely.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.camera.set_aspect(width, height);
        self.camera_binding
            .update_gpu(&self.context.queue, &self.camera);
        self.composer.resize(&self.context);
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of stages in the post-processing chain (including the scene
    /// render stage).
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.composer.pass_count()
    }

    /// Change the saturation factor at runtime.
    pub fn set_saturation(&mut self, saturation: f32) {
        self.options.effects.saturation = saturation;
        self.composer
            .set_saturation(&self.context.queue, saturation);
    }

    fn encode_scene_pass(&self, encoder: &mut wgpu::CommandEncoder) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.composer.scene_color_view(),
                resolve_target: None,
                ops: wgpu::Operations {
                    // Transparent background: the card floats over whatever
                    // is behind the surface.
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: self.composer.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });
        self.planes.draw(
            &mut pass,
            &self.camera_binding.bind_group,
            &self.lighting.bind_group,
        );
    }
}
