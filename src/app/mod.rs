//! Application state and logic

pub mod cli;
mod edit;
mod input;
mod navigation;
mod state;
mod view_mode;

pub use input::KeyAction;
pub use state::App;
pub use view_mode::ViewMode;
