use dioxus::prelude::*;

use crate::model::modal::{ModalController, ScrollLock, ScrollLockSync};

/// Keeps the page body's scroll behavior in step with the modal.
///
/// Re-runs whenever the controller changes, so the body is locked exactly
/// while the modal is open. The body is left alone until the lock changes.
pub fn use_scroll_lock(controller: Signal<ModalController>) {
    let mut sync = use_hook(|| CopyValue::new(ScrollLockSync::default()));

    use_effect(move || {
        let lock = controller.read().scroll_lock();
        if let Some(lock) = sync.write().update(lock) {
            document::eval(&body_overflow_script(lock));
        }
    });
}

fn body_overflow_script(lock: ScrollLock) -> String {
    format!(
        "if (document.body) {{ document.body.style.overflow = '{}'; }}",
        lock.body_overflow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the generated body style script.
    ///
    /// Verifies that locking hides overflow and unlocking clears the inline
    /// property, both guarded against a missing body.
    ///
    /// Expected: "hidden" when locked, empty string when unlocked
    #[test]
    fn test_body_overflow_script() {
        assert_eq!(
            body_overflow_script(ScrollLock::Locked),
            "if (document.body) { document.body.style.overflow = 'hidden'; }"
        );
        assert_eq!(
            body_overflow_script(ScrollLock::Unlocked),
            "if (document.body) { document.body.style.overflow = ''; }"
        );
    }
}
