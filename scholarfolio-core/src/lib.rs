// Public modules
pub mod browser;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use browser::PublicationBrowser;
pub use error::PortfolioError;
pub use filtering::{
    available_scopes, filter_publications, has_filters, matches_filters, searchable_text, Filters,
    Scope, ALL_SCOPE,
};
pub use grouping::{group_by_year, sorted_group_names, UNDATED_GROUP};
pub use io::{default_portfolio, load_portfolio, parse_portfolio};
pub use models::{
    Affiliation, Education, Highlight, HighlightValue, LinkKind, Links, Portfolio, Project,
    Publication, ResearchArea, SocialKind, Socials, Talk, Teaching,
};
pub use schema_validation::{portfolio_schema, validate_against_schema};
pub use sorting::{normalize_for_sorting, sort_publications, strip_leading_articles, SortKey};
pub use validation::validate_portfolio;
