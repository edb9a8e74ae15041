//! Donate modal state machine.
//!
//! The modal is either `Closed` or `Open`. The page scroll lock is derived from
//! that state rather than stored next to it, so the two can never disagree.
//! Everything here is plain data; the Dioxus components in `client` render it
//! and feed DOM events back in through [`ModalController::handle`] once
//! [`ModalController::transition_for`] shows the event changes something.

pub mod click;
pub mod config;
pub mod sync;

#[cfg(test)]
mod test;

pub use click::ClickOrigin;
pub use config::{DonationLink, ModalConfig};
pub use sync::ScrollLockSync;

/// Visibility of the modal overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, ModalState::Open)
    }

    /// Scroll lock that must be applied to the page body for this state.
    pub fn scroll_lock(self) -> ScrollLock {
        match self {
            ModalState::Open => ScrollLock::Locked,
            ModalState::Closed => ScrollLock::Unlocked,
        }
    }
}

/// Whether page scrolling is suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollLock {
    Locked,
    Unlocked,
}

impl ScrollLock {
    /// Inline `overflow` value for the page body.
    ///
    /// Unlocking clears the inline property so the stylesheet's own value
    /// applies again.
    pub fn body_overflow(self) -> &'static str {
        match self {
            ScrollLock::Locked => "hidden",
            ScrollLock::Unlocked => "",
        }
    }
}

/// Element a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay background itself.
    Overlay,
    /// Anything inside the dialog box.
    Content,
}

/// Input events the controller reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    TriggerClicked,
    Clicked(ClickTarget),
    /// A document-level `keydown`, carrying `KeyboardEvent.key`.
    KeyPressed(String),
}

/// Before/after pair produced by a handled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: ModalState,
    pub to: ModalState,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalController {
    state: ModalState,
    close_key: String,
}

impl ModalController {
    pub fn new(config: &ModalConfig) -> Self {
        Self {
            state: ModalState::Closed,
            close_key: config.close_key.clone(),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn scroll_lock(&self) -> ScrollLock {
        self.state.scroll_lock()
    }

    /// Shows the modal and locks page scrolling. Calling it while already
    /// open leaves the modal open.
    pub fn open(&mut self) -> Transition {
        self.set(ModalState::Open)
    }

    /// Hides the modal and restores page scrolling.
    pub fn close(&mut self) -> Transition {
        self.set(ModalState::Closed)
    }

    /// Decides what an event would do without touching the controller.
    ///
    /// Content clicks never close the modal, and the close key only acts
    /// while the modal is open.
    pub fn transition_for(&self, event: &ModalEvent) -> Transition {
        let from = self.state();
        let to = match event {
            ModalEvent::TriggerClicked => ModalState::Open,
            ModalEvent::Clicked(ClickTarget::Overlay) => ModalState::Closed,
            ModalEvent::Clicked(ClickTarget::Content) => from,
            ModalEvent::KeyPressed(key) if from.is_open() && *key == self.close_key => {
                ModalState::Closed
            }
            ModalEvent::KeyPressed(_) => from,
        };
        Transition { from, to }
    }

    /// Dispatches a DOM event to `open`, `close` or nothing.
    pub fn handle(&mut self, event: &ModalEvent) -> Transition {
        let transition = self.transition_for(event);
        if !transition.changed() {
            return transition;
        }
        match transition.to {
            ModalState::Open => self.open(),
            ModalState::Closed => self.close(),
        }
    }

    fn set(&mut self, to: ModalState) -> Transition {
        let from = self.state();
        self.state = to;
        Transition { from, to }
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(&ModalConfig::default())
    }
}
