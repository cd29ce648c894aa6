use scholarfolio_core::PortfolioError;
use std::io::ErrorKind;
use std::path::Path;

const FALLBACK_NOTE: &str = "The built-in sample portfolio is shown instead.";

/// Map portfolio loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_portfolio_load_error(error: &PortfolioError, path: &Path) -> (String, String, String) {
    match error {
        PortfolioError::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The portfolio file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists. {}",
                path.display(),
                FALLBACK_NOTE
            ),
        ),
        PortfolioError::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!(
                "You don't have permission to read this file:\n{}\n\n{}",
                path.display(),
                FALLBACK_NOTE
            ),
        ),
        PortfolioError::Io { source, .. } => (
            "Error Loading File".to_string(),
            "Failed to read the portfolio file.".to_string(),
            format!("{}\n\n{}", source, FALLBACK_NOTE),
        ),
        PortfolioError::Json(e) => (
            "Invalid JSON".to_string(),
            "The portfolio file is not valid JSON.".to_string(),
            format!("{}\n\n{}", e, FALLBACK_NOTE),
        ),
        PortfolioError::Schema(errors) => (
            "Schema Error".to_string(),
            "The portfolio file does not have the expected structure.".to_string(),
            format!("{}\n\n{}", numbered(errors), FALLBACK_NOTE),
        ),
        PortfolioError::Invalid(errors) => (
            "Validation Error".to_string(),
            "The portfolio file has validation errors.".to_string(),
            format!("{}\n\n{}", numbered(errors), FALLBACK_NOTE),
        ),
    }
}

fn numbered(errors: &[String]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}
