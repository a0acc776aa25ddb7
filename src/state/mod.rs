pub mod ui;

pub use ui::{Notification, UIState};
