//! Core engine implementation
//!
//! The engine owns the scene, the render queue, input state, and frame
//! timing, and drives one update pass followed by one draw pass per tick.
//! The graphics backend is injected by whoever owns the window and GL/GPU
//! context; the engine itself never creates one.

use crate::application::Application;
use crate::foundation::time::Timer;
use crate::input::InputManager;
use crate::render::backend::{ClearFlags, GraphicsBackend};
use crate::render::queue::{CameraData, RenderQueue};
use crate::render::Color;
use crate::scene::components::CameraComponent;
use crate::scene::Scene;
use thiserror::Error;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window title (forwarded to the windowing collaborator)
    pub title: String,

    /// Framebuffer width in pixels, used for the projection aspect ratio
    pub width: u32,

    /// Framebuffer height in pixels, used for the projection aspect ratio
    pub height: u32,

    /// Clear color applied at the start of every frame
    pub clear_color: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Lumen Engine Application".to_string(),
            width: 1280,
            height: 720,
            clear_color: Color::Black,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

/// Main engine struct
///
/// Coordinates the per-frame pipeline: input is polled by the windowing
/// collaborator into [`InputManager`], `Scene::update` fills the
/// [`RenderQueue`], and the queue is drained against the injected backend.
/// The update pass always fully completes before the draw pass begins.
pub struct Engine {
    scene: Scene,
    render_queue: RenderQueue,
    input: InputManager,
    timer: Timer,
    config: EngineConfig,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Self {
        log::info!("Initializing engine: {}", config.title);
        Self {
            scene: Scene::new(),
            render_queue: RenderQueue::new(),
            input: InputManager::new(),
            timer: Timer::new(),
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given application
    ///
    /// `cleanup` is invoked on every exit path, including when
    /// `initialize` or `update` fails.
    pub fn run<A: Application>(
        config: EngineConfig,
        backend: &mut dyn GraphicsBackend,
        app: &mut A,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config);

        let mut result = match app.initialize(&mut engine, backend) {
            Ok(()) => Ok(()),
            Err(e) => Err(EngineError::ApplicationError(format!(
                "App initialization: {e}"
            ))),
        };

        if result.is_ok() {
            log::info!("Starting main loop...");

            while engine.running {
                engine.timer.update();
                let delta_time = engine.timer.delta_time();

                if let Err(e) = app.update(&mut engine, delta_time) {
                    result = Err(EngineError::ApplicationError(format!("App update: {e}")));
                    break;
                }

                engine.tick(backend, delta_time);
            }
        }

        app.cleanup(&mut engine);

        log::info!("Engine shutdown complete");
        result
    }

    /// Advance one frame: update the scene, then drain the render queue
    ///
    /// Update and draw are strictly sequential; every command submitted
    /// during the update pass is consumed by this tick's draw pass.
    pub fn tick(&mut self, backend: &mut dyn GraphicsBackend, delta_time: f32) {
        self.scene
            .update(delta_time, &self.input, &mut self.render_queue);

        backend.set_clear_color(self.config.clear_color, 1.0);
        backend.clear_buffers(ClearFlags::COLOR | ClearFlags::DEPTH);

        let aspect = self.config.width as f32 / self.config.height as f32;
        let camera_data = self.camera_data(aspect);
        self.render_queue.draw(backend, &camera_data);
    }

    /// Derive view/projection data from the registered main camera
    ///
    /// Falls back to identity matrices when no camera is registered, the
    /// handle has gone stale, or the object carries no camera component.
    pub fn camera_data(&self, aspect: f32) -> CameraData {
        let Some(camera_id) = self.scene.main_camera() else {
            return CameraData::identity();
        };
        let Some(camera) = self.scene.component::<CameraComponent>(camera_id) else {
            return CameraData::identity();
        };
        let world = self.scene.world_transform(camera_id);
        CameraData {
            view: camera.view_matrix(&world),
            projection: camera.projection_matrix(aspect),
        }
    }

    /// Request engine shutdown at the end of the current frame
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Check whether the main loop will keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get mutable access to the scene
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Get mutable access to the input manager (fed by the window layer)
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    /// Get the render queue
    pub fn render_queue(&self) -> &RenderQueue {
        &self.render_queue
    }

    /// Get mutable access to the render queue
    pub fn render_queue_mut(&mut self) -> &mut RenderQueue {
        &mut self.render_queue
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the total number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }
}
