use slint::{ComponentHandle, SharedString, Timer};
use std::time::Duration;

use crate::ui::set_status;
use crate::{MainWindow, StatusLevel, Theme};

/// How long the email chip reads "Copied"
const COPIED_FEEDBACK: Duration = Duration::from_millis(1500);

/// Register all UI-related handlers (theme, email chip, links)
pub fn register_ui_handlers(window: &MainWindow) {
    register_toggle_theme(window);
    register_email_copy(window);
    register_open_link(window);
}

/// Register theme toggle handler
fn register_toggle_theme(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_toggle_theme(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        // Toggle between light and dark theme
        let current_theme = main_window.get_theme();
        let new_theme = if current_theme == Theme::Light {
            Theme::Dark
        } else {
            Theme::Light
        };
        main_window.set_theme(new_theme);
    });
}

/// Register email chip handler. The markup already placed the address on the
/// clipboard; this only drives the temporary "Copied" label.
fn register_email_copy(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_email_copy_requested(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        main_window.set_email_copied(true);
        set_status(&main_window, "Email copied to clipboard", StatusLevel::Success);

        let reset_weak = main_window.as_weak();
        Timer::single_shot(COPIED_FEEDBACK, move || {
            if let Some(main_window) = reset_weak.upgrade() {
                main_window.set_email_copied(false);
            }
        });
    });
}

/// Register link handler. Links are surfaced in the status line rather than
/// opened in a browser.
fn register_open_link(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_open_link(move |url: SharedString| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        tracing::info!(%url, "link activated");
        set_status(&main_window, format!("Link: {}", url), StatusLevel::Info);
    });
}
