pub mod dialogs;
pub mod formatting;
pub mod types;
pub mod updates;

pub use dialogs::{hide_error, set_status, show_error};
pub use updates::{populate_window, show_publications};
