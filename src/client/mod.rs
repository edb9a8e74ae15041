pub mod app;
pub mod component;
pub mod constant;
pub mod hook;
pub mod model;

pub use app::App;
