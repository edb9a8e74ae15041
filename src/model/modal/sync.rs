use super::ScrollLock;

/// Last scroll lock written to the page body.
///
/// Starts `Unlocked` since the page loads with its own overflow untouched, so
/// the body is only written once the lock actually changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollLockSync {
    applied: ScrollLock,
}

impl ScrollLockSync {
    /// Records `lock` and returns it if the body needs updating.
    pub fn update(&mut self, lock: ScrollLock) -> Option<ScrollLock> {
        if self.applied == lock {
            return None;
        }
        self.applied = lock;
        Some(lock)
    }
}

impl Default for ScrollLockSync {
    fn default() -> Self {
        Self {
            applied: ScrollLock::Unlocked,
        }
    }
}
