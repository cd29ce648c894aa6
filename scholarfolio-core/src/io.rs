use crate::error::PortfolioError;
use crate::models::Portfolio;
use crate::schema_validation::{portfolio_schema, validate_against_schema};
use crate::validation::validate_portfolio;
use serde_json::Value;
use std::fs;
use std::path::Path;

const DEFAULT_PORTFOLIO: &str = include_str!("../data/portfolio.json");

/// Load a portfolio from a JSON file
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Portfolio, PortfolioError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| PortfolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let portfolio = parse_portfolio(&contents)?;
    tracing::info!(
        path = %path.display(),
        publications = portfolio.publications.len(),
        "loaded portfolio"
    );
    Ok(portfolio)
}

/// Parse a portfolio document: schema check, typed decode, then semantic validation.
pub fn parse_portfolio(contents: &str) -> Result<Portfolio, PortfolioError> {
    let raw: Value = serde_json::from_str(contents)?;

    validate_against_schema(&portfolio_schema()?, &raw).map_err(PortfolioError::Schema)?;

    let portfolio: Portfolio = serde_json::from_value(raw)?;
    validate_portfolio(&portfolio).map_err(PortfolioError::Invalid)?;

    Ok(portfolio)
}

/// The sample portfolio shipped with the crate.
pub fn default_portfolio() -> Result<Portfolio, PortfolioError> {
    parse_portfolio(DEFAULT_PORTFOLIO)
}
