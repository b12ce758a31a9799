//! Cooperative cancellation of a running search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A stop signal polled by the search loop once per iteration.
///
/// Implemented for any `FnMut() -> bool` closure, for [`CancelToken`], and
/// for [`Never`].
pub trait CancelSignal {
    /// Whether the search should stop now.
    fn is_cancelled(&mut self) -> bool;
}

impl<F: FnMut() -> bool> CancelSignal for F {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        self()
    }
}

/// A signal that never fires.
#[derive(Copy, Clone, Debug, Default)]
pub struct Never;

impl CancelSignal for Never {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        false
    }
}

/// A shareable cancellation flag backed by an [`AtomicBool`].
///
/// Clones share the same flag, so one clone can be handed to the search and
/// another kept by whoever decides to stop it, possibly on another thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl CancelSignal for CancelToken {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        self.is_done()
    }
}
