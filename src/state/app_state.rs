use scholarfolio_core::{Portfolio, PublicationBrowser};
use std::path::PathBuf;

/// Application state management - Domain state only
/// The portfolio is fixed after start-up; the browser owns the filter state.
#[derive(Debug)]
pub struct AppState {
    /// Loaded portfolio document
    pub portfolio: Portfolio,
    /// Publication filter and its subscribers
    pub browser: PublicationBrowser,
    /// File the portfolio came from, `None` for the built-in sample
    pub source: Option<PathBuf>,
}

impl AppState {
    pub fn new(portfolio: Portfolio, source: Option<PathBuf>) -> Self {
        let browser = PublicationBrowser::new(portfolio.publications.clone());
        Self {
            portfolio,
            browser,
            source,
        }
    }

    /// Get window title with the portfolio owner and its source file
    pub fn get_window_title(&self) -> String {
        let file_name = self
            .source
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("built-in sample");

        format!("{} - Scholarfolio ({})", self.portfolio.name, file_name)
    }

    pub fn publication_count(&self) -> usize {
        self.browser.publications().len()
    }
}
