//! Built-in component variants

pub mod camera;
pub mod mesh;

pub use camera::CameraComponent;
pub use mesh::MeshComponent;
