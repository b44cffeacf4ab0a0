//! Standalone card window backed by winit.
//!
//! ```no_run
//! # use shimmer::Viewer;
//! Viewer::builder()
//!     .with_base_path("assets/cards/front.png")
//!     .with_glitter_path("assets/cards/glitter.png")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{path::PathBuf, sync::Arc};

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{error::ShimmerError, options::Options, ShimmerEngine};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    base_path: Option<PathBuf>,
    glitter_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Shimmer", no image paths,
    /// default options).
    fn new() -> Self {
        Self {
            base_path: None,
            glitter_path: None,
            options: None,
            title: "Shimmer".into(),
        }
    }

    /// Set the base card image path.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Set the glitter overlay image path.
    #[must_use]
    pub fn with_glitter_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.glitter_path = Some(path.into());
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            base_path: self.base_path,
            glitter_path: self.glitter_path,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the animated glitter card.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to enter
/// the event loop.
pub struct Viewer {
    base_path: Option<PathBuf>,
    glitter_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`ShimmerError::Viewer`] if the event loop cannot be created
    /// or fails while running.
    pub fn run(self) -> Result<(), ShimmerError> {
        let event_loop = EventLoop::new()
            .map_err(|e| ShimmerError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            base_path: self.base_path,
            glitter_path: self.glitter_path,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ShimmerError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<ShimmerEngine>,
    base_path: Option<PathBuf>,
    glitter_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

/// Clamp the wgpu surface size to at least one pixel per axis.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_transparent(true)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes()
                .with_title(&self.title)
                .with_transparent(true)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();

        let mut engine = match pollster::block_on(ShimmerEngine::new(
            window.clone(),
            (vp_w, vp_h),
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        if let (Some(base), Some(glitter)) =
            (self.base_path.as_deref(), self.glitter_path.as_deref())
        {
            // Keep the window open even if an image fails; whatever loaded
            // so far still renders.
            if let Err(e) = engine.load_assets(base, glitter) {
                log::error!("Failed to load card images: {e}");
            }
        }

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    engine.update();
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let (vp_w, vp_h) =
                                    viewport_size(w.inner_size());
                                engine.resize(vp_w, vp_h);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => (),
        }
    }
}
