pub mod escape_listener;
pub mod scroll_lock;

pub use escape_listener::use_escape_listener;
pub use scroll_lock::use_scroll_lock;
