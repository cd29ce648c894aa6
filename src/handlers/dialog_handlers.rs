use slint::ComponentHandle;

use crate::ui::hide_error;
use crate::MainWindow;

/// Register all dialog-related handlers
pub fn register_dialog_handlers(window: &MainWindow) {
    register_dismiss_error(window);
}

/// Register error dialog OK handler
fn register_dismiss_error(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_dismiss_error(move || {
        if let Some(main_window) = main_window_weak.upgrade() {
            hide_error(&main_window);
        }
    });
}
