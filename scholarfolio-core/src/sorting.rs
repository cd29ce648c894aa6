use crate::models::Publication;
use regex::Regex;
use std::cmp::{Ordering, Reverse};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|gli|un|une|een)\s+")
        .expect("leading article pattern is valid")
});

/// Order in which publications are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Library-style title order.
    Title,
    /// Most recent first; undated entries last.
    Year,
}

/// Sort publications in place. The sort is stable.
pub fn sort_publications(publications: &mut [Publication], key: SortKey) {
    match key {
        SortKey::Title => publications.sort_by(compare_titles),
        SortKey::Year => publications.sort_by(|a, b| {
            // None sorts below Some, so reversing puts undated entries last
            Reverse(a.year)
                .cmp(&Reverse(b.year))
                .then_with(|| compare_titles(a, b))
        }),
    }
}

fn compare_titles(a: &Publication, b: &Publication) -> Ordering {
    let a_key = normalize_for_sorting(&a.title);
    let b_key = normalize_for_sorting(&b.title);

    a_key.cmp(&b_key).then_with(|| a.title.cmp(&b.title))
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the, and common European ones)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);
    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn strip_leading_articles(s: &str) -> String {
    LEADING_ARTICLE.replace(s, "").to_string()
}
