use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// How many commands a renderer applies between cancel checks.
pub const CANCEL_CHECK_INTERVAL_COMMANDS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rendering cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Shared flag flipped by whoever owns the drawing surface, e.g. when its
/// window closes. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_cancel_always_returns_false() {
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn closure_token_reflects_atomic_state() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        assert!(!token.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let observer = flag.clone();

        assert!(!observer.is_cancelled());
        flag.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn cancel_flag_can_cross_threads() {
        let flag = CancelFlag::new();
        let worker_flag = flag.clone();

        std::thread::spawn(move || worker_flag.cancel()).join().unwrap();

        assert!(flag.is_cancelled());
    }
}
