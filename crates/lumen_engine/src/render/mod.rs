//! Rendering module
//!
//! Resource wrappers (mesh, material, shader program), the deferred render
//! queue, and the backend capability trait the engine core draws through.

pub mod backend;
pub mod color;
pub mod material;
pub mod mesh;
pub mod queue;

pub use backend::{GraphicsBackend, GraphicsError};
pub use color::{Color, ColorRgb};
pub use material::Material;
pub use mesh::{Mesh, VertexElement, VertexLayout};
pub use queue::{CameraData, RenderCommand, RenderQueue};
