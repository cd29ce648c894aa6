pub mod dialog_handlers;
pub mod filter_handlers;
pub mod ui_handlers;

pub use dialog_handlers::register_dialog_handlers;
pub use filter_handlers::register_filter_handlers;
pub use ui_handlers::register_ui_handlers;
