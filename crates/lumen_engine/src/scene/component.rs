//! Component trait and per-frame update context

use crate::foundation::math::Mat4;
use crate::input::InputSource;
use crate::render::queue::RenderQueue;
use crate::scene::{GameObjectId, Scene};
use std::any::Any;

/// Type-erased downcast support for components
///
/// Blanket-implemented for every `'static` type; gives each component
/// variant a stable run-time type token (its `TypeId`) used for capability
/// queries such as "does this object have a camera component".
pub trait AsAny {
    /// Upcast to `&dyn Any` for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Upcast to `&mut dyn Any` for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A behavior unit attached to exactly one game object for its lifetime
///
/// Components are owned by their game object and dropped with it. Owner
/// identity and every collaborator a component may touch (scene, input,
/// render queue) arrive through the [`UpdateContext`] each frame; there is
/// no global engine state to reach into.
pub trait Component: AsAny + 'static {
    /// Called once per frame during the scene update pass
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {}
}

/// Everything a component may touch during its update
///
/// `owner` is the component's back-reference to its game object: a
/// generation-checked handle, never a counted reference, since the
/// component's lifetime is strictly bounded by its owner's.
pub struct UpdateContext<'a> {
    /// Handle of the game object this component is attached to
    pub owner: GameObjectId,

    /// The scene owning every game object
    pub scene: &'a mut Scene,

    /// Current-frame input state
    pub input: &'a dyn InputSource,

    /// Render queue collecting this frame's draw commands
    pub queue: &'a mut RenderQueue,

    /// Time since the last frame in seconds
    pub dt: f32,
}

impl UpdateContext<'_> {
    /// World transform of the owning game object
    pub fn owner_world_transform(&self) -> Mat4 {
        self.scene.world_transform(self.owner)
    }
}
