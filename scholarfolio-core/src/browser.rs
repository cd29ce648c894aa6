//! Stateful owner of the publication filter.
//!
//! The browser is the only place filter state lives. Front ends push user
//! input into it and subscribe to the recomputed list instead of filtering
//! on their own.

use crate::filtering::{available_scopes, filter_publications, Filters, Scope};
use crate::models::Publication;

type Listener = Box<dyn FnMut(&[&Publication], &Filters)>;

pub struct PublicationBrowser {
    publications: Vec<Publication>,
    scopes: Vec<String>,
    filters: Filters,
    listeners: Vec<Listener>,
}

impl PublicationBrowser {
    pub fn new(publications: Vec<Publication>) -> Self {
        let scopes = available_scopes(&publications);
        Self {
            publications,
            scopes,
            filters: Filters::default(),
            listeners: Vec::new(),
        }
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Year scopes computed once from the full list.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn visible(&self) -> Vec<&Publication> {
        filter_publications(&self.publications, &self.filters)
    }

    /// Register a listener. It receives the current view right away and
    /// again after every change to the filters.
    pub fn subscribe<F>(&mut self, mut listener: F)
    where
        F: FnMut(&[&Publication], &Filters) + 'static,
    {
        let visible = filter_publications(&self.publications, &self.filters);
        listener(&visible, &self.filters);
        self.listeners.push(Box::new(listener));
    }

    pub fn set_query(&mut self, query: &str) {
        if self.filters.query != query {
            self.filters.query = query.to_string();
            self.notify();
        }
    }

    pub fn set_scope(&mut self, scope: Scope) {
        if self.filters.scope != scope {
            tracing::debug!(scope = %scope, "publication scope changed");
            self.filters.scope = scope;
            self.notify();
        }
    }

    /// Reset both filters to their defaults.
    pub fn clear(&mut self) {
        if self.filters != Filters::default() {
            self.filters = Filters::default();
            self.notify();
        }
    }

    fn notify(&mut self) {
        let visible = filter_publications(&self.publications, &self.filters);
        for listener in &mut self.listeners {
            listener(&visible, &self.filters);
        }
    }
}

impl std::fmt::Debug for PublicationBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicationBrowser")
            .field("publications", &self.publications.len())
            .field("scopes", &self.scopes)
            .field("filters", &self.filters)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn browser() -> PublicationBrowser {
        let publications = serde_json::from_value(json!([
            { "title": "Flows", "year": 2024, "venue": "NeurIPS" },
            { "title": "Nets", "year": 2023, "venue": "ICML" },
            { "title": "Notes" }
        ]))
        .unwrap();
        PublicationBrowser::new(publications)
    }

    fn recorder(browser: &mut PublicationBrowser) -> Rc<RefCell<Vec<Vec<String>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        browser.subscribe(move |visible, _| {
            sink.borrow_mut()
                .push(visible.iter().map(|p| p.title.clone()).collect());
        });
        seen
    }

    #[test]
    fn test_subscribe_delivers_current_view() {
        let mut browser = browser();
        let seen = recorder(&mut browser);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0], vec!["Flows", "Nets", "Notes"]);
    }

    #[test]
    fn test_changes_notify() {
        let mut browser = browser();
        let seen = recorder(&mut browser);

        browser.set_query("n");
        browser.set_scope(Scope::parse("2023"));
        browser.clear();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[1], vec!["Flows", "Nets", "Notes"]);
        assert_eq!(seen[2], vec!["Nets"]);
        assert_eq!(seen[3], vec!["Flows", "Nets", "Notes"]);
    }

    #[test]
    fn test_no_op_changes_are_silent() {
        let mut browser = browser();
        let seen = recorder(&mut browser);

        browser.set_query("");
        browser.set_scope(Scope::All);
        browser.clear();

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_scopes_from_full_list() {
        let mut browser = browser();
        browser.set_query("flows");
        assert_eq!(browser.scopes(), ["2024", "2023"]);
        assert_eq!(browser.visible().len(), 1);
    }

    #[test]
    fn test_unknown_scope_yields_empty_view() {
        let mut browser = browser();
        browser.set_scope(Scope::parse("1999"));
        assert!(browser.visible().is_empty());
        assert_eq!(browser.filters().scope.as_str(), "1999");
    }
}
