//! Page-level scroll lock shared by the overlays.

use tracing::trace;

/// Suppresses background scrolling while an overlay is open.
///
/// A single flag shared by the palette and the navigation drawer. The last
/// writer wins: releasing clears the lock whoever set it.
#[derive(Debug, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock background scrolling.
    pub fn acquire(&mut self) {
        if !self.locked {
            trace!("Scroll lock acquired");
        }
        self.locked = true;
    }

    /// Unlock background scrolling, even if another overlay locked it.
    pub fn release(&mut self) {
        if self.locked {
            trace!("Scroll lock released");
        }
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unlocked() {
        assert!(!ScrollLock::new().is_locked());
    }

    #[test]
    fn test_acquire_release() {
        let mut lock = ScrollLock::new();
        lock.acquire();
        assert!(lock.is_locked());

        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_no_reference_counting() {
        let mut lock = ScrollLock::new();
        lock.acquire();
        lock.acquire();
        lock.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_release_unlocked_is_noop() {
        let mut lock = ScrollLock::new();
        lock.release();
        assert!(!lock.is_locked());
    }
}
