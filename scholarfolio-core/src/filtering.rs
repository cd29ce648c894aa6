use crate::models::Publication;
use std::collections::BTreeSet;
use std::fmt;

/// Scope value meaning "no year restriction".
pub const ALL_SCOPE: &str = "all";

/// Year scope selected by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    /// A year in its string form. Compared literally, so an unknown value
    /// matches nothing rather than failing.
    Year(String),
}

impl Scope {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SCOPE {
            Scope::All
        } else {
            Scope::Year(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Scope::All => ALL_SCOPE,
            Scope::Year(year) => year,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient filter state: free-text query plus year scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub query: String,
    pub scope: Scope,
}

impl Filters {
    pub fn new(query: impl Into<String>, scope: &str) -> Self {
        Self {
            query: query.into(),
            scope: Scope::parse(scope),
        }
    }
}

/// Distinct publication years, most recent first, as strings.
/// Publications without a usable year are skipped.
pub fn available_scopes(publications: &[Publication]) -> Vec<String> {
    let years: BTreeSet<i32> = publications.iter().filter_map(|p| p.year).collect();
    years.into_iter().rev().map(|y| y.to_string()).collect()
}

/// Lower-cased concatenation of title, venue, authors, abstract and tags.
/// Fields are glued together without a separator.
pub fn searchable_text(publication: &Publication) -> String {
    let mut text = String::new();
    text.push_str(&publication.title);
    text.push_str(publication.venue.as_deref().unwrap_or(""));
    text.push_str(&publication.authors.join(" "));
    text.push_str(publication.summary.as_deref().unwrap_or(""));
    text.push_str(&publication.tags.join(" "));
    text.to_lowercase()
}

/// Publications matching both the query and the scope, in their original order.
pub fn filter_publications<'a>(
    publications: &'a [Publication],
    filters: &Filters,
) -> Vec<&'a Publication> {
    let query = filters.query.to_lowercase();
    publications
        .iter()
        .filter(|p| matches_lowered(p, &query, &filters.scope))
        .collect()
}

/// Check if a publication matches the given filters
pub fn matches_filters(publication: &Publication, filters: &Filters) -> bool {
    matches_lowered(publication, &filters.query.to_lowercase(), &filters.scope)
}

fn matches_lowered(publication: &Publication, query: &str, scope: &Scope) -> bool {
    let scope_ok = match scope {
        Scope::All => true,
        Scope::Year(year) => publication.year_string() == *year,
    };

    scope_ok && (query.is_empty() || searchable_text(publication).contains(query))
}

/// Check if any filter is active
pub fn has_filters(filters: &Filters) -> bool {
    !filters.query.is_empty() || filters.scope != Scope::All
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Publication> {
        serde_json::from_value(json!([
            { "title": "Flows", "year": 2024, "venue": "NeurIPS" },
            { "title": "Nets", "year": 2023, "venue": "ICML" }
        ]))
        .unwrap()
    }

    fn titles(found: &[&Publication]) -> Vec<String> {
        found.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_query_matches_title() {
        let records = records();
        let found = filter_publications(&records, &Filters::new("flow", "all"));
        assert_eq!(titles(&found), vec!["Flows"]);
    }

    #[test]
    fn test_scope_selects_year() {
        let records = records();
        let found = filter_publications(&records, &Filters::new("", "2023"));
        assert_eq!(titles(&found), vec!["Nets"]);
    }

    #[test]
    fn test_empty_records() {
        let found = filter_publications(&[], &Filters::new("anything", "all"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_undated_record() {
        let records: Vec<Publication> = serde_json::from_value(json!([
            { "title": "Draft" },
            { "title": "Nets", "year": 2023 }
        ]))
        .unwrap();

        assert_eq!(available_scopes(&records), vec!["2023"]);
        let found = filter_publications(&records, &Filters::default());
        assert_eq!(titles(&found), vec!["Draft", "Nets"]);
    }

    #[test]
    fn test_scopes_sorted_and_unique() {
        let records: Vec<Publication> = serde_json::from_value(json!([
            { "title": "a", "year": 2019 },
            { "title": "b", "year": 2024 },
            { "title": "c", "year": 2019 },
            { "title": "d", "year": "2021" },
            { "title": "e", "year": "n/a" }
        ]))
        .unwrap();
        assert_eq!(available_scopes(&records), vec!["2024", "2021", "2019"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = records();
        for query in ["ICML", "icml", "IcMl"] {
            let found = filter_publications(&records, &Filters::new(query, "all"));
            assert_eq!(titles(&found), vec!["Nets"]);
        }
    }

    #[test]
    fn test_query_is_literal() {
        let records: Vec<Publication> = serde_json::from_value(json!([
            { "title": "Spectral Weighting for CP^N Lattice Models", "tags": ["CP^N"] },
            { "title": "Plain" }
        ]))
        .unwrap();

        let found = filter_publications(&records, &Filters::new("cp^n", "all"));
        assert_eq!(found.len(), 1);
        assert!(filter_publications(&records, &Filters::new(".*", "all")).is_empty());
    }

    #[test]
    fn test_searchable_text_covers_all_fields() {
        let p: Publication = serde_json::from_value(json!({
            "title": "Priors",
            "authors": ["Your Name", "B. Mentor"],
            "venue": "ICML",
            "abstract": "Symplectic",
            "tags": ["Geometric DL", "Physics"]
        }))
        .unwrap();

        assert_eq!(
            searchable_text(&p),
            "priorsicmlyour name b. mentorsymplecticgeometric dl physics"
        );
        for query in ["mentor", "symplectic", "geometric dl", "icml"] {
            assert!(matches_filters(&p, &Filters::new(query, "all")), "{}", query);
        }
    }

    #[test]
    fn test_unknown_scope_matches_nothing() {
        let records = records();
        assert!(filter_publications(&records, &Filters::new("", "1999")).is_empty());
        assert!(filter_publications(&records, &Filters::new("", "")).is_empty());
    }

    #[test]
    fn test_has_filters() {
        assert!(!has_filters(&Filters::default()));
        assert!(has_filters(&Filters::new("x", "all")));
        assert!(has_filters(&Filters::new("", "2024")));
    }

    #[test]
    fn test_scope_round_trip() {
        assert_eq!(Scope::parse("all"), Scope::All);
        assert_eq!(Scope::parse("2024").as_str(), "2024");
        assert_eq!(Scope::All.to_string(), "all");
    }
}
