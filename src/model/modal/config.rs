/// Markup conventions shared with the page template and stylesheet.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalConfig {
    /// Element id of the button that opens the modal.
    pub trigger_id: String,
    /// Element id of the full-screen overlay.
    pub overlay_id: String,
    /// Class marking the overlay as visible.
    pub shown_class: String,
    /// `KeyboardEvent.key` value that closes the modal.
    pub close_key: String,
}

impl ModalConfig {
    /// Class list for the overlay element in the given visibility.
    pub fn overlay_class(&self, open: bool) -> String {
        if open {
            format!("donate-modal {}", self.shown_class)
        } else {
            "donate-modal".to_string()
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            trigger_id: "donate-button".to_string(),
            overlay_id: "donate-modal".to_string(),
            shown_class: "show".to_string(),
            close_key: "Escape".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonationLink {
    pub label: String,
    pub href: String,
}

impl DonationLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}
