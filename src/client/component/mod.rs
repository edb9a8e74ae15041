pub mod donate_button;
pub mod donate_modal;

pub use donate_button::DonateButton;
pub use donate_modal::{dispatch, DonateModal};
