mod close;
mod open;

use super::*;

fn open_controller() -> ModalController {
    let mut controller = ModalController::default();
    controller.open();
    controller
}

fn escape() -> ModalEvent {
    ModalEvent::KeyPressed("Escape".to_string())
}
