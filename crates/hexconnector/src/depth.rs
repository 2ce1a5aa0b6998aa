//! Call depth bookkeeping for log indentation

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Nesting depth of dispatched calls
///
/// Shared with its [`DepthGuard`]s, which are held while the connector is lent
/// to an adapter. Atomic so that a `Connector` stays `Send` and can be moved to
/// another thread between calls.
#[derive(Debug, Clone, Default)]
pub struct CallDepth(Arc<AtomicUsize>);

impl CallDepth {
    /// Current depth
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    /// Enter one level; the level is left when the guard drops
    pub fn enter(&self) -> DepthGuard {
        self.0.fetch_add(1, Ordering::Relaxed);
        DepthGuard(Arc::clone(&self.0))
    }
}

/// Restores the call depth on drop, including on early return and unwinding
#[derive(Debug)]
pub struct DepthGuard(Arc<AtomicUsize>);

impl Drop for DepthGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}
