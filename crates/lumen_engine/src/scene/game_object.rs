//! Game object: a scene node with a transform, components, and children

use crate::foundation::math::{Mat4, Transform, Vec3};
use crate::scene::component::Component;

slotmap::new_key_type! {
    /// Generation-checked handle to a game object in a scene's arena
    ///
    /// Handles stay cheap to copy and become detectably stale after the
    /// object is destroyed, instead of dangling.
    pub struct GameObjectId;
}

/// A node in the scene tree
///
/// Owns its attached components exclusively; child ownership lives in the
/// scene arena, with this node holding the ordered list of child handles.
/// Lifecycle is a two-state machine: alive until [`GameObject::mark_for_destroy`],
/// then reaped by the owner's next update pass.
pub struct GameObject {
    pub(crate) name: String,
    pub(crate) parent: Option<GameObjectId>,
    pub(crate) children: Vec<GameObjectId>,
    pub(crate) components: Vec<Box<dyn Component>>,
    pub(crate) transform: Transform,
    pub(crate) alive: bool,
}

impl GameObject {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            components: Vec::new(),
            transform: Transform::identity(),
            alive: true,
        }
    }

    /// Get the object's name (names are not required to be unique)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the object's name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the parent handle, `None` for root objects
    pub fn parent(&self) -> Option<GameObjectId> {
        self.parent
    }

    /// Get the ordered child handles
    pub fn children(&self) -> &[GameObjectId] {
        &self.children
    }

    /// Check whether this object is still alive
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark this object for destruction
    ///
    /// The object stays fully valid until the next update pass that visits
    /// its owner, which skips its update and removes its entire subtree.
    pub fn mark_for_destroy(&mut self) {
        self.alive = false;
    }

    /// Attach a component, taking ownership
    ///
    /// Components update in insertion order; a component depending on a
    /// sibling must be added after it. No duplicate-type check is made.
    pub fn add_component(&mut self, component: impl Component) {
        self.components.push(Box::new(component));
    }

    /// Get the first component of the given type
    pub fn component<T: Component>(&self) -> Option<&T> {
        // Deref past the Box so the downcast sees the component type, not
        // `Box<dyn Component>` (which is itself `'static`).
        self.components
            .iter()
            .find_map(|c| (**c).as_any().downcast_ref::<T>())
    }

    /// Get the first component of the given type, mutably
    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| (**c).as_any_mut().downcast_mut::<T>())
    }

    /// Check whether a component of the given type is attached
    pub fn has_component<T: Component>(&self) -> bool {
        self.component::<T>().is_some()
    }

    /// Get the number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Get the local transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Get the local transform, mutably
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Get the local position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Set the local position
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Get the local Euler rotation in radians
    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    /// Set the local Euler rotation in radians
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.rotation = rotation;
    }

    /// Get the local scale
    pub fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    /// Set the local scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    /// Compute the local transformation matrix (recomputed every call)
    pub fn local_transform(&self) -> Mat4 {
        self.transform.to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::component::UpdateContext;

    struct Tag(&'static str);
    impl Component for Tag {}

    struct Counter(u32);
    impl Component for Counter {
        fn update(&mut self, _ctx: &mut UpdateContext<'_>) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_component_type_lookup() {
        let mut object = GameObject::new("probe");
        assert!(!object.has_component::<Tag>());

        object.add_component(Tag("first"));
        object.add_component(Counter(0));

        assert!(object.has_component::<Tag>());
        assert!(object.has_component::<Counter>());
        assert_eq!(object.component::<Tag>().unwrap().0, "first");
    }

    #[test]
    fn test_duplicate_component_types_coexist() {
        let mut object = GameObject::new("probe");
        object.add_component(Tag("first"));
        object.add_component(Tag("second"));

        assert_eq!(object.component_count(), 2);
        // Lookup returns the first one in insertion order.
        assert_eq!(object.component::<Tag>().unwrap().0, "first");
    }

    #[test]
    fn test_mark_for_destroy_is_one_way() {
        let mut object = GameObject::new("doomed");
        assert!(object.is_alive());
        object.mark_for_destroy();
        assert!(!object.is_alive());
    }
}
