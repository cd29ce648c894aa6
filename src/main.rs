mod cli;
mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use clap::Parser;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::errors::map_portfolio_load_error;
use crate::operations::load_initial_state;

slint::include_modules!();

fn init_tracing() {
    // SCHOLARFOLIO_LOG_FORMAT=json switches to machine-readable output
    let log_format =
        std::env::var("SCHOLARFOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scholarfolio=info,scholarfolio_core=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (app_state, failure) = load_initial_state(cli.config.as_deref())?;
    let total = app_state.publication_count();
    let app_state = Rc::new(RefCell::new(app_state));

    let main_window =
        MainWindow::new().map_err(|e| anyhow::anyhow!("failed to create window: {}", e))?;
    main_window.set_theme(cli.theme.into());

    ui::populate_window(&main_window, &app_state.borrow());

    // The browser drives the publication list from here on
    {
        let main_window_weak = main_window.as_weak();
        app_state
            .borrow_mut()
            .browser
            .subscribe(move |visible, filters| {
                if let Some(main_window) = main_window_weak.upgrade() {
                    ui::show_publications(&main_window, visible, filters, total);
                }
            });
    }

    handlers::register_filter_handlers(&main_window, &app_state);
    handlers::register_ui_handlers(&main_window);
    handlers::register_dialog_handlers(&main_window);

    if let Some(failure) = failure {
        let (title, message, details) = map_portfolio_load_error(&failure.error, &failure.path);
        ui::show_error(&main_window, title, message, details);
        ui::set_status(
            &main_window,
            format!("Could not load {}", failure.path.display()),
            StatusLevel::Error,
        );
    } else {
        ui::set_status(
            &main_window,
            format!("{} publications loaded", total),
            StatusLevel::Success,
        );
    }

    tracing::info!(publications = total, "starting viewer");
    main_window
        .run()
        .map_err(|e| anyhow::anyhow!("event loop failed: {}", e))?;

    Ok(())
}
