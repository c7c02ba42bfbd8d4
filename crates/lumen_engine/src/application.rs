//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::render::backend::GraphicsBackend;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game or application using the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the main loop starts. Use this to build your
    /// initial scene and create GPU resources through the backend.
    fn initialize(
        &mut self,
        engine: &mut Engine,
        backend: &mut dyn GraphicsBackend,
    ) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame, before the scene update pass runs. Implement
    /// your game logic here.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called once after the main loop exits. Use this to save state,
    /// release resources, etc.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
