use super::*;

/// Tests closing an open modal.
///
/// Verifies that closing hides the modal and clears the scroll lock.
///
/// Expected: Closed with scroll unlocked
#[test]
fn closes_and_unlocks_scrolling() {
    let mut controller = open_controller();

    let transition = controller.close();

    assert_eq!(
        transition,
        Transition {
            from: ModalState::Open,
            to: ModalState::Closed,
        }
    );
    assert_eq!(controller.scroll_lock(), ScrollLock::Unlocked);
    assert_eq!(controller.scroll_lock().body_overflow(), "");
}

/// Tests closing a modal that is already closed.
///
/// Expected: Closed with an unchanged transition
#[test]
fn close_is_idempotent() {
    let mut controller = ModalController::default();

    let transition = controller.close();

    assert!(!transition.changed());
    assert_eq!(controller.state(), ModalState::Closed);
}
