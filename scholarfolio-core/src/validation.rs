use crate::models::Portfolio;
use std::collections::HashSet;

/// Validate a decoded portfolio
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
///
/// Years are deliberately not checked here: an unusable year only removes the
/// publication from the year scopes.
pub fn validate_portfolio(portfolio: &Portfolio) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if portfolio.name.trim().is_empty() {
        errors.push("Portfolio name cannot be empty".to_string());
    }

    validate_unique_titles(
        "Publication",
        portfolio.publications.iter().map(|p| p.title.as_str()),
        &mut errors,
    );
    validate_unique_titles(
        "Project",
        portfolio.projects.iter().map(|p| p.title.as_str()),
        &mut errors,
    );

    for (idx, entry) in portfolio.education.iter().enumerate() {
        if entry.degree.trim().is_empty() {
            errors.push(format!("Education #{}: degree cannot be empty", idx + 1));
        }
        if entry.institution.trim().is_empty() {
            errors.push(format!("Education #{}: institution cannot be empty", idx + 1));
        }
    }

    for (idx, entry) in portfolio.teaching.iter().enumerate() {
        if entry.course.trim().is_empty() {
            errors.push(format!("Teaching #{}: course cannot be empty", idx + 1));
        }
    }

    for (idx, talk) in portfolio.talks.iter().enumerate() {
        if talk.title.trim().is_empty() {
            errors.push(format!("Talk #{}: title cannot be empty", idx + 1));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Titles double as display keys, so they must be present and distinct.
fn validate_unique_titles<'a>(
    kind: &str,
    titles: impl Iterator<Item = &'a str>,
    errors: &mut Vec<String>,
) {
    let mut seen = HashSet::new();

    for (idx, title) in titles.enumerate() {
        let item_ref = format!("{} #{} ('{}')", kind, idx + 1, title);

        if title.trim().is_empty() {
            errors.push(format!("{}: title cannot be empty", item_ref));
        } else if !seen.insert(title) {
            errors.push(format!("{}: duplicate title", item_ref));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn portfolio(value: serde_json::Value) -> Portfolio {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_portfolio() {
        let p = portfolio(json!({
            "name": "Ada",
            "publications": [{ "title": "Flows" }, { "title": "Nets" }],
            "education": [{ "degree": "MSc", "institution": "Uni" }]
        }));
        assert!(validate_portfolio(&p).is_ok());
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_portfolio(&portfolio(json!({ "name": "  " }))).unwrap_err();
        assert_eq!(errors, vec!["Portfolio name cannot be empty"]);
    }

    #[test]
    fn test_collects_all_errors() {
        let p = portfolio(json!({
            "name": "Ada",
            "publications": [{ "title": "Flows" }, { "title": "" }, { "title": "Flows" }],
            "projects": [{ "title": "Tool" }, { "title": "Tool" }],
            "education": [{ "degree": "", "institution": "" }],
            "teaching": [{ "course": " " }],
            "talks": [{ "title": "" }]
        }));

        let errors = validate_portfolio(&p).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert!(errors.contains(&"Publication #2 (''): title cannot be empty".to_string()));
        assert!(errors.contains(&"Publication #3 ('Flows'): duplicate title".to_string()));
        assert!(errors.contains(&"Project #2 ('Tool'): duplicate title".to_string()));
    }

    #[test]
    fn test_malformed_year_is_not_an_error() {
        let p = portfolio(json!({
            "name": "Ada",
            "publications": [{ "title": "Draft", "year": "someday" }]
        }));
        assert!(validate_portfolio(&p).is_ok());
    }
}
