//! Scene graph module
//!
//! A [`Scene`] owns a forest of [`GameObject`] trees in a slot-map arena
//! and drives the per-frame update pass. Objects are addressed by
//! generation-checked [`GameObjectId`] handles, so a reference to a
//! destroyed object reads back as "gone" rather than dangling.

pub mod component;
pub mod components;
pub mod game_object;

pub use component::{AsAny, Component, UpdateContext};
pub use game_object::{GameObject, GameObjectId};

use crate::foundation::math::Mat4;
use crate::input::InputSource;
use crate::render::queue::RenderQueue;
use slotmap::SlotMap;

/// Owner of every game object and driver of the update pass
///
/// The scene holds root-level objects in creation order; each root may own
/// an arbitrary subtree. One object handle may be registered as the main
/// camera; the registration is non-owning and checked for staleness on
/// every read.
#[derive(Default)]
pub struct Scene {
    objects: SlotMap<GameObjectId, GameObject>,
    roots: Vec<GameObjectId>,
    main_camera: Option<GameObjectId>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game object, parented under `parent` or as a root
    ///
    /// Returns a handle valid until the object is reaped or the scene is
    /// cleared. A stale parent handle is logged and treated as "no parent".
    pub fn create_object(
        &mut self,
        name: impl Into<String>,
        parent: Option<GameObjectId>,
    ) -> GameObjectId {
        let mut object = GameObject::new(name);

        let parent = match parent {
            Some(parent_id) if self.objects.contains_key(parent_id) => Some(parent_id),
            Some(_) => {
                log::warn!("create_object: stale parent handle, creating root object");
                None
            }
            None => None,
        };

        object.parent = parent;
        let id = self.objects.insert(object);
        match parent {
            Some(parent_id) => self.objects[parent_id].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Get an object by handle; `None` once the object has been destroyed
    pub fn get(&self, id: GameObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Get an object by handle, mutably
    pub fn get_mut(&mut self, id: GameObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// Check whether a handle refers to a live, unmarked object
    pub fn is_alive(&self, id: GameObjectId) -> bool {
        self.objects.get(id).is_some_and(GameObject::is_alive)
    }

    /// Get the first component of type `T` on the given object
    pub fn component<T: Component>(&self, id: GameObjectId) -> Option<&T> {
        self.get(id)?.component::<T>()
    }

    /// Get the first component of type `T` on the given object, mutably
    pub fn component_mut<T: Component>(&mut self, id: GameObjectId) -> Option<&mut T> {
        self.get_mut(id)?.component_mut::<T>()
    }

    /// Get the root-level object handles in creation order
    pub fn roots(&self) -> &[GameObjectId] {
        &self.roots
    }

    /// Get the total number of live objects in the arena
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Compose the world transform of an object up its parent chain
    ///
    /// World = parent world * local, recomputed on every call with no
    /// caching; cost is O(depth). A stale handle yields identity.
    pub fn world_transform(&self, id: GameObjectId) -> Mat4 {
        let Some(object) = self.objects.get(id) else {
            return Mat4::identity();
        };
        match object.parent {
            Some(parent_id) => self.world_transform(parent_id) * object.transform.to_matrix(),
            None => object.transform.to_matrix(),
        }
    }

    /// Register an object as the main camera
    ///
    /// Non-owning: destroying the object later simply makes
    /// [`Scene::main_camera`] read back `None`.
    pub fn set_main_camera(&mut self, id: GameObjectId) {
        self.main_camera = Some(id);
    }

    /// Get the main camera handle, `None` if unset or stale
    pub fn main_camera(&self) -> Option<GameObjectId> {
        self.main_camera
            .filter(|id| self.objects.contains_key(*id))
    }

    /// Reparent an object, or make it a root with `parent == None`
    ///
    /// Fails (returning `false`) on stale handles or when the new parent
    /// lies inside the object's own subtree.
    pub fn set_parent(&mut self, id: GameObjectId, parent: Option<GameObjectId>) -> bool {
        if !self.objects.contains_key(id) {
            log::warn!("set_parent: stale object handle");
            return false;
        }
        if let Some(parent_id) = parent {
            if !self.objects.contains_key(parent_id) {
                log::warn!("set_parent: stale parent handle");
                return false;
            }
            // Walking up from the new parent must not reach the object,
            // otherwise the tree would gain a cycle.
            let mut cursor = Some(parent_id);
            while let Some(current) = cursor {
                if current == id {
                    log::warn!("set_parent: rejected, new parent is inside the subtree");
                    return false;
                }
                cursor = self.objects[current].parent;
            }
        }

        self.detach(id);
        self.objects[id].parent = parent;
        match parent {
            Some(parent_id) => self.objects[parent_id].children.push(id),
            None => self.roots.push(id),
        }
        true
    }

    /// Destroy an object and its whole subtree immediately
    ///
    /// Prefer [`GameObject::mark_for_destroy`] during an update pass; this
    /// is the explicit out-of-band removal.
    pub fn destroy_object(&mut self, id: GameObjectId) {
        if !self.objects.contains_key(id) {
            return;
        }
        self.detach(id);
        self.despawn_subtree(id);
    }

    /// Destroy all objects and reset the main-camera registration
    pub fn clear(&mut self) {
        self.objects.clear();
        self.roots.clear();
        self.main_camera = None;
    }

    /// Run one update pass over the whole forest
    ///
    /// Every live object updates its components in insertion order, then
    /// recurses into live children. An object found dead at visit time is
    /// not updated; its entire subtree is removed from the arena during
    /// this same pass (single-pass mark-check-reap). Root objects follow
    /// the same contract.
    pub fn update(&mut self, dt: f32, input: &dyn InputSource, queue: &mut RenderQueue) {
        let roots = self.roots.clone();
        for root_id in roots {
            if self.is_alive(root_id) {
                self.update_object(root_id, dt, input, queue);
            } else {
                self.despawn_subtree(root_id);
                self.roots.retain(|r| *r != root_id);
            }
        }
    }

    fn update_object(
        &mut self,
        id: GameObjectId,
        dt: f32,
        input: &dyn InputSource,
        queue: &mut RenderQueue,
    ) {
        // Each component is swapped out of its slot only for the duration
        // of its own update, so it can freely reach back into the scene
        // (move its owner, mark things dead, read sibling components)
        // without aliasing its own storage. Components attached during the
        // loop land behind the initial ones and first update next frame.
        let initial = match self.objects.get(id) {
            Some(object) => object.components.len(),
            None => return,
        };
        for index in 0..initial {
            let Some(object) = self.objects.get_mut(id) else {
                // The owner was destroyed by one of its own components.
                return;
            };
            let mut component =
                std::mem::replace(&mut object.components[index], Box::new(Updating));
            {
                let mut ctx = UpdateContext {
                    owner: id,
                    scene: &mut *self,
                    input,
                    queue: &mut *queue,
                    dt,
                };
                component.update(&mut ctx);
            }
            if let Some(object) = self.objects.get_mut(id) {
                object.components[index] = component;
            }
        }

        let children = match self.objects.get(id) {
            Some(object) => object.children.clone(),
            None => return,
        };
        for child_id in children {
            if self.is_alive(child_id) {
                self.update_object(child_id, dt, input, queue);
            } else {
                self.despawn_subtree(child_id);
                if let Some(object) = self.objects.get_mut(id) {
                    object.children.retain(|c| *c != child_id);
                }
            }
        }
    }

    /// Remove an object from its parent's child list or the root list
    fn detach(&mut self, id: GameObjectId) {
        match self.objects[id].parent {
            Some(parent_id) => {
                if let Some(parent) = self.objects.get_mut(parent_id) {
                    parent.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
    }

    /// Remove an object and all of its descendants from the arena
    ///
    /// Destruction does not require the subtree's alive flags to cascade:
    /// children abandoned by a dead parent die with it here.
    fn despawn_subtree(&mut self, id: GameObjectId) {
        if let Some(object) = self.objects.remove(id) {
            for child_id in object.children {
                self.despawn_subtree(child_id);
            }
        }
    }
}

/// Placeholder occupying a component's slot while that component updates
///
/// Invisible to typed lookups: a downcast to any real component type fails.
struct Updating;

impl Component for Updating {}
