use scholarfolio_core::Scope;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::AppState;
use crate::ui::set_status;
use crate::{MainWindow, StatusLevel};

/// Register all publication filter handlers
///
/// Handlers only forward input to the browser; the window is redrawn by the
/// browser subscription set up in `main`.
pub fn register_filter_handlers(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    register_query_changed(window, app_state);
    register_scope_selected(window, app_state);
    register_clear_filters(window, app_state);
}

/// Register search text handler
fn register_query_changed(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let app_state = app_state.clone();

    window.on_query_changed(move |text| {
        app_state.borrow_mut().browser.set_query(text.as_str());
    });
}

/// Register year scope handler
fn register_scope_selected(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_scope_selected(move |scope| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        let scope = Scope::parse(scope.as_str());
        let message = match &scope {
            Scope::All => "Showing publications from all years".to_string(),
            Scope::Year(year) => format!("Showing publications from {}", year),
        };

        app_state.borrow_mut().browser.set_scope(scope);
        set_status(&main_window, message, StatusLevel::Info);
    });
}

/// Register clear filters handler
fn register_clear_filters(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_clear_filters(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        app_state.borrow_mut().browser.clear();
        set_status(&main_window, "Filters cleared", StatusLevel::Info);
    });
}
