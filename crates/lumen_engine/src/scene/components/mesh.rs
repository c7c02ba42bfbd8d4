//! Mesh component: makes its owner appear on screen

use crate::render::material::Material;
use crate::render::mesh::Mesh;
use crate::render::queue::RenderCommand;
use crate::scene::component::{Component, UpdateContext};
use std::sync::Arc;

/// Submits one render command per frame for its owner
///
/// Holds shared references to a mesh and a material; both must be present
/// for anything to be submitted. The command captures the owner's world
/// transform at submission time, so scene mutation later in the frame
/// cannot move an already-queued draw. There is no separate visibility or
/// culling pass: being alive in the scene graph is what puts an object on
/// screen.
pub struct MeshComponent {
    material: Option<Arc<Material>>,
    mesh: Option<Arc<Mesh>>,
}

impl MeshComponent {
    /// Create a mesh component from shared resources
    pub fn new(material: Arc<Material>, mesh: Arc<Mesh>) -> Self {
        Self {
            material: Some(material),
            mesh: Some(mesh),
        }
    }

    /// Create a mesh component with nothing to draw yet
    pub fn empty() -> Self {
        Self {
            material: None,
            mesh: None,
        }
    }

    /// Replace the material
    pub fn set_material(&mut self, material: Arc<Material>) {
        self.material = Some(material);
    }

    /// Replace the mesh
    pub fn set_mesh(&mut self, mesh: Arc<Mesh>) {
        self.mesh = Some(mesh);
    }

    /// Get the material, if set
    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    /// Get the mesh, if set
    pub fn mesh(&self) -> Option<&Arc<Mesh>> {
        self.mesh.as_ref()
    }
}

impl Component for MeshComponent {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let (Some(material), Some(mesh)) = (&self.material, &self.mesh) else {
            return;
        };
        let model_matrix = ctx.owner_world_transform();
        ctx.queue.submit(RenderCommand::new(
            Arc::clone(mesh),
            Arc::clone(material),
            model_matrix,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat4, Vec3};
    use crate::input::InputManager;
    use crate::render::backend::HeadlessBackend;
    use crate::render::mesh::{VertexElement, VertexLayout};
    use crate::render::queue::RenderQueue;
    use crate::scene::Scene;
    use approx::assert_relative_eq;

    fn quad_resources(backend: &mut HeadlessBackend) -> (Arc<Material>, Arc<Mesh>) {
        let material = Arc::new(Material::from_sources(backend, "vs", "fs"));
        let mut layout = VertexLayout::with_stride(12);
        layout.push(VertexElement { location: 0, components: 3, offset: 0 });
        let mesh = Arc::new(Mesh::new(
            backend,
            layout,
            &[0.0; 12],
            &[0, 1, 2, 0, 2, 3],
        ));
        (material, mesh)
    }

    #[test]
    fn test_submits_one_command_with_world_transform() {
        let mut backend = HeadlessBackend::new();
        let (material, mesh) = quad_resources(&mut backend);

        let mut scene = Scene::new();
        let parent = scene.create_object("parent", None);
        scene
            .get_mut(parent)
            .unwrap()
            .set_position(Vec3::new(0.0, 1.0, 0.0));
        let child = scene.create_object("child", Some(parent));
        scene
            .get_mut(child)
            .unwrap()
            .set_position(Vec3::new(1.0, 0.0, 0.0));
        scene
            .get_mut(child)
            .unwrap()
            .add_component(MeshComponent::new(material, mesh));

        let input = InputManager::new();
        let mut queue = RenderQueue::new();
        scene.update(0.016, &input, &mut queue);

        assert_eq!(queue.len(), 1);

        // Drain through a recording backend to inspect the snapshot.
        backend.clear_calls();
        queue.draw(&mut backend, &crate::render::queue::CameraData::identity());
        let model = backend
            .calls()
            .iter()
            .find_map(|call| match call {
                crate::render::backend::BackendCall::SetUniformMat4(name, value)
                    if name == "uModel" =>
                {
                    Some(*value)
                }
                _ => None,
            })
            .unwrap();
        assert_relative_eq!(
            model,
            Mat4::new_translation(&Vec3::new(1.0, 1.0, 0.0)),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_empty_component_submits_nothing() {
        let mut scene = Scene::new();
        let object = scene.create_object("ghost", None);
        scene
            .get_mut(object)
            .unwrap()
            .add_component(MeshComponent::empty());

        let input = InputManager::new();
        let mut queue = RenderQueue::new();
        scene.update(0.016, &input, &mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_one_command_per_update_not_per_frame_history() {
        let mut backend = HeadlessBackend::new();
        let (material, mesh) = quad_resources(&mut backend);

        let mut scene = Scene::new();
        let object = scene.create_object("drawn", None);
        scene
            .get_mut(object)
            .unwrap()
            .add_component(MeshComponent::new(material, mesh));

        let input = InputManager::new();
        let mut queue = RenderQueue::new();
        scene.update(0.016, &input, &mut queue);
        scene.update(0.016, &input, &mut queue);

        // Two updates without a draw accumulate exactly two commands.
        assert_eq!(queue.len(), 2);
    }
}
