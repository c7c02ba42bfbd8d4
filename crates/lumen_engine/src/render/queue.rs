//! Render queue decoupling the update pass from draw-call submission
//!
//! Components submit commands while the scene updates; the engine drains
//! the queue afterwards. A command snapshots everything it needs at
//! submission time, so later scene mutation cannot affect a queued draw.

use crate::foundation::math::Mat4;
use crate::render::backend::GraphicsBackend;
use crate::render::material::Material;
use crate::render::mesh::Mesh;
use std::sync::Arc;

/// View and projection matrices for the frame being drawn
#[derive(Debug, Clone, PartialEq)]
pub struct CameraData {
    /// World-to-view matrix
    pub view: Mat4,

    /// View-to-clip projection matrix
    pub projection: Mat4,
}

impl CameraData {
    /// Camera data with identity matrices, used when no camera is registered
    pub fn identity() -> Self {
        Self {
            view: Mat4::identity(),
            projection: Mat4::identity(),
        }
    }
}

impl Default for CameraData {
    fn default() -> Self {
        Self::identity()
    }
}

/// One draw instruction: what to draw, with what material, at what transform
///
/// Mesh and material are shared references kept alive by whoever submitted
/// the command; the model matrix is a value captured at submission time.
#[derive(Debug, Clone)]
pub struct RenderCommand {
    /// Mesh to draw
    pub mesh: Arc<Mesh>,

    /// Material to bind before drawing
    pub material: Arc<Material>,

    /// World-space model matrix snapshot
    pub model_matrix: Mat4,
}

impl RenderCommand {
    /// Create a command from shared resources and a matrix snapshot
    pub fn new(mesh: Arc<Mesh>, material: Arc<Material>, model_matrix: Mat4) -> Self {
        Self {
            mesh,
            material,
            model_matrix,
        }
    }
}

/// Ordered buffer of render commands for one frame
///
/// Append-only during the update pass, drained exactly once by the draw
/// pass. Submission order is draw order; there is no sorting, deduplication,
/// or capacity limit.
#[derive(Debug, Default)]
pub struct RenderQueue {
    commands: Vec<RenderCommand>,
}

impl RenderQueue {
    /// Create an empty render queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the queue
    pub fn submit(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Get the number of queued commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Draw every queued command in submission order, then clear the queue
    ///
    /// Per command: bind the material (re-applying its stored parameters),
    /// upload the camera and model matrices, bind the mesh, and issue the
    /// draw call. Commands whose material has no shader are skipped — the
    /// degrade-to-invisible policy for failed shader creation. The queue is
    /// cleared unconditionally; an undrawn command is never retried.
    pub fn draw(&mut self, backend: &mut dyn GraphicsBackend, camera: &CameraData) {
        for command in self.commands.drain(..) {
            let Some(_shader) = command.material.shader() else {
                continue;
            };

            command.material.bind(backend);
            backend.set_uniform_mat4("uView", &camera.view);
            backend.set_uniform_mat4("uProjection", &camera.projection);
            backend.set_uniform_mat4("uModel", &command.model_matrix);
            backend.bind_mesh(&command.mesh);
            backend.draw_mesh(&command.mesh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::backend::{BackendCall, HeadlessBackend};
    use crate::render::mesh::VertexLayout;

    fn test_mesh(backend: &mut HeadlessBackend) -> Arc<Mesh> {
        let mut layout = VertexLayout::with_stride(12);
        layout.push(crate::render::mesh::VertexElement {
            location: 0,
            components: 3,
            offset: 0,
        });
        Arc::new(Mesh::from_vertices(backend, layout, &[0.0; 9]))
    }

    fn test_material(backend: &mut HeadlessBackend) -> Arc<Material> {
        Arc::new(Material::from_sources(backend, "vs", "fs"))
    }

    #[test]
    fn test_draw_preserves_submission_order_and_clears() {
        let mut backend = HeadlessBackend::new();
        let material = test_material(&mut backend);
        let meshes: Vec<Arc<Mesh>> = (0..3).map(|_| test_mesh(&mut backend)).collect();

        let mut queue = RenderQueue::new();
        for mesh in &meshes {
            queue.submit(RenderCommand::new(
                Arc::clone(mesh),
                Arc::clone(&material),
                Mat4::identity(),
            ));
        }
        assert_eq!(queue.len(), 3);

        backend.clear_calls();
        queue.draw(&mut backend, &CameraData::identity());
        assert!(queue.is_empty());

        let drawn: Vec<_> = backend
            .calls()
            .iter()
            .filter_map(|call| match call {
                BackendCall::DrawMesh(buffer) => Some(*buffer),
                _ => None,
            })
            .collect();
        let expected: Vec<_> = meshes.iter().map(|m| m.vertex_buffer()).collect();
        assert_eq!(drawn, expected);

        // Each draw is preceded by its bind.
        let mut last_bound = None;
        for call in backend.calls() {
            match call {
                BackendCall::BindMesh(buffer) => last_bound = Some(*buffer),
                BackendCall::DrawMesh(buffer) => assert_eq!(last_bound, Some(*buffer)),
                _ => {}
            }
        }
    }

    #[test]
    fn test_command_snapshots_model_matrix() {
        let mut backend = HeadlessBackend::new();
        let material = test_material(&mut backend);
        let mesh = test_mesh(&mut backend);

        let mut matrix = Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0));
        let mut queue = RenderQueue::new();
        queue.submit(RenderCommand::new(mesh, material, matrix));

        // Mutating the source matrix after submission must not affect the
        // queued command.
        matrix = Mat4::new_translation(&Vec3::new(9.0, 9.0, 9.0));
        let _ = matrix;

        backend.clear_calls();
        queue.draw(&mut backend, &CameraData::identity());

        let model = backend.calls().iter().find_map(|call| match call {
            BackendCall::SetUniformMat4(name, value) if name == "uModel" => Some(*value),
            _ => None,
        });
        assert_eq!(
            model,
            Some(Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0)))
        );
    }

    #[test]
    fn test_shaderless_commands_are_skipped() {
        let mut backend = HeadlessBackend::new();
        backend.fail_next_shader_program();
        let broken = Arc::new(Material::from_sources(&mut backend, "vs", "fs"));
        let good = test_material(&mut backend);
        let mesh = test_mesh(&mut backend);

        let mut queue = RenderQueue::new();
        queue.submit(RenderCommand::new(
            Arc::clone(&mesh),
            broken,
            Mat4::identity(),
        ));
        queue.submit(RenderCommand::new(mesh, good, Mat4::identity()));

        backend.clear_calls();
        queue.draw(&mut backend, &CameraData::identity());

        let draws = backend
            .calls()
            .iter()
            .filter(|call| matches!(call, BackendCall::DrawMesh(_)))
            .count();
        assert_eq!(draws, 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_commands_submitted_after_draw_wait_for_next_draw() {
        let mut backend = HeadlessBackend::new();
        let material = test_material(&mut backend);
        let mesh = test_mesh(&mut backend);

        let mut queue = RenderQueue::new();
        queue.submit(RenderCommand::new(
            Arc::clone(&mesh),
            Arc::clone(&material),
            Mat4::identity(),
        ));
        queue.draw(&mut backend, &CameraData::identity());
        assert!(queue.is_empty());

        queue.submit(RenderCommand::new(mesh, material, Mat4::identity()));
        assert_eq!(queue.len(), 1);

        backend.clear_calls();
        queue.draw(&mut backend, &CameraData::identity());
        let draws = backend
            .calls()
            .iter()
            .filter(|call| matches!(call, BackendCall::DrawMesh(_)))
            .count();
        assert_eq!(draws, 1);
        assert!(queue.is_empty());
    }
}
