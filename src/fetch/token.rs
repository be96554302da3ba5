use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness token for an in-flight feed load.
///
/// A view mounts a load with a fresh token and revokes it when superseded
/// (new load started, view torn down). [`super::load_feed`] checks the token
/// after the response arrives and discards the result when it is no longer
/// live, so a stale load never overwrites newer state.
#[derive(Clone, Debug)]
pub struct LoadToken(Arc<AtomicBool>);

impl LoadToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Marks the load as superseded; clones observe this immediately.
    pub fn revoke(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for LoadToken {
    fn default() -> Self {
        Self::new()
    }
}
