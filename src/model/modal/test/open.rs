use super::*;

/// Tests opening the modal from its initial state.
///
/// Verifies that a fresh controller starts closed and that opening it both
/// shows the modal and locks page scrolling.
///
/// Expected: Open with scroll locked
#[test]
fn opens_and_locks_scrolling() {
    let mut controller = ModalController::default();
    assert_eq!(controller.state(), ModalState::Closed);
    assert_eq!(controller.scroll_lock(), ScrollLock::Unlocked);

    let transition = controller.open();

    assert!(transition.changed());
    assert_eq!(controller.state(), ModalState::Open);
    assert_eq!(controller.scroll_lock(), ScrollLock::Locked);
}

/// Tests opening an already open modal.
///
/// Verifies that a second open does not toggle the modal back to closed.
///
/// Expected: Open with an unchanged transition
#[test]
fn open_is_idempotent() {
    let mut controller = open_controller();

    let transition = controller.open();

    assert!(!transition.changed());
    assert!(controller.is_open());
    assert_eq!(controller.scroll_lock(), ScrollLock::Locked);
}
