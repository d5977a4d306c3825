//! Application state and screen flow

pub mod screen;
pub mod state;

pub use screen::{AppCoordinator, MenuOption, Screen};
pub use state::{App, Feedback, FeedbackKind, MAX_PLAYERS};
