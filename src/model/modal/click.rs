use super::ClickTarget;

/// Works out which element a bubbling click started on.
///
/// The dialog content marks the click on its way up; the overlay handler then
/// takes the target. A click the content never saw started on the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickOrigin {
    content: bool,
}

impl ClickOrigin {
    pub fn mark_content(&mut self) {
        self.content = true;
    }

    /// Returns the target of the current click and resets for the next one.
    pub fn take_target(&mut self) -> ClickTarget {
        if std::mem::take(&mut self.content) {
            ClickTarget::Content
        } else {
            ClickTarget::Overlay
        }
    }
}
