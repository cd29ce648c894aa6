use scholarfolio_core::{default_portfolio, load_portfolio, PortfolioError};
use std::path::{Path, PathBuf};

use crate::state::AppState;

/// A user-supplied portfolio that could not be shown.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: PortfolioError,
}

/// Build the start-up state.
///
/// A broken user file does not stop the viewer: the built-in sample is shown
/// and the failure is returned so the window can explain what happened.
pub fn load_initial_state(
    config: Option<&Path>,
) -> Result<(AppState, Option<LoadFailure>), PortfolioError> {
    let Some(path) = config else {
        tracing::info!("no portfolio file given, using the built-in sample");
        return Ok((AppState::new(default_portfolio()?, None), None));
    };

    match load_portfolio(path) {
        Ok(portfolio) => Ok((AppState::new(portfolio, Some(path.to_path_buf())), None)),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "falling back to the built-in sample");
            let state = AppState::new(default_portfolio()?, None);
            let failure = LoadFailure {
                path: path.to_path_buf(),
                error,
            };
            Ok((state, Some(failure)))
        }
    }
}
