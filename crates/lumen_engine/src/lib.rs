//! # Lumen Engine
//!
//! A small 3D rendering engine built around a scene graph, a per-object
//! component system, and a deferred render queue.
//!
//! ## Features
//!
//! - **Scene Graph**: Hierarchical game objects with cascading transforms
//! - **Component System**: Polymorphic per-object behaviors updated each frame
//! - **Render Queue**: Decouples the update pass from draw-call submission
//! - **Backend Agnostic**: Rendering and input are injected capabilities
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lumen_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, engine: &mut Engine, backend: &mut dyn GraphicsBackend) -> Result<(), AppError> {
//!         // Build your scene here
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         // Game logic
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut backend = HeadlessBackend::new();
//!     let mut game = MyGame;
//!     Engine::run(EngineConfig::default(), &mut backend, &mut game)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;
pub mod render;
pub mod input;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineConfig, EngineError,
        foundation::{
            math::{Vec2, Vec3, Vec4, Mat4, Transform},
            time::Timer,
        },
        scene::{Scene, GameObject, GameObjectId, Component, UpdateContext},
        scene::components::{CameraComponent, MeshComponent},
        render::{
            Material, Mesh, VertexElement, VertexLayout,
            RenderCommand, RenderQueue, CameraData,
            Color, ColorRgb,
            backend::{ClearFlags, GraphicsBackend, GraphicsError, HeadlessBackend},
        },
        input::{InputManager, InputSource, Key, MouseButton},
    };
}
