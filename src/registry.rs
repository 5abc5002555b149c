//! Ordered registry of path hooks.
//!
//! An explicit, injectable service rather than process-global state: hosts
//! (and tests) construct their own instance and hand it to the import walk.
//! Order is search order. The registry does no internal locking; callers
//! serialize registration changes against in-flight import activity.

use std::sync::Arc;

use crate::resolver::Resolver;

/// A resolver factory consulted for every search-path entry. Returns a
/// resolver bound to the entry, or `None` when the entry is not this hook's
/// kind (wrong scheme, not a directory, ...).
pub trait PathHook: Send + Sync {
    fn resolver_for(&self, root: &str) -> Option<Box<dyn Resolver>>;
}

/// Ordered collection of hooks. Identity is the `Arc` allocation, so the
/// same handle used at registration is what removes it again.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Arc<dyn PathHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a hook at the back, or inserts at the front when `priority`.
    ///
    /// An already-registered hook is first removed, so there are never
    /// duplicates and re-registering with a different priority moves it.
    pub fn register(&mut self, hook: Arc<dyn PathHook>, priority: bool) {
        self.unregister(&hook);
        if priority {
            self.hooks.insert(0, hook);
        } else {
            self.hooks.push(hook);
        }
    }

    /// Removes a hook if present. Returns whether anything was removed;
    /// calling it again for the same hook is a no-op.
    pub fn unregister(&mut self, hook: &Arc<dyn PathHook>) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|h| !Arc::ptr_eq(h, hook));
        self.hooks.len() != before
    }

    pub fn clear(&mut self) {
        self.hooks.clear();
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn PathHook>> {
        self.hooks.iter()
    }

    /// Registers a hook constructed explicitly at configuration time.
    /// Alias of `register`, kept for call sites that deal in a single
    /// default hook.
    pub fn enable(&mut self, hook: Arc<dyn PathHook>, priority: bool) {
        self.register(hook, priority);
    }

    /// Removes a previously enabled hook; idempotent.
    pub fn disable(&mut self, hook: &Arc<dyn PathHook>) {
        self.unregister(hook);
    }

    /// Consults hooks strictly in list order and returns the first resolver
    /// claiming `root`.
    pub fn resolver_for(&self, root: &str) -> Option<Box<dyn Resolver>> {
        self.hooks.iter().find_map(|hook| hook.resolver_for(root))
    }
}
