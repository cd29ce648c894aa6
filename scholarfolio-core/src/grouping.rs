use crate::models::Publication;
use std::collections::HashMap;

/// Group name for publications without a usable year.
pub const UNDATED_GROUP: &str = "undated";

/// Group publications by year string, keeping their relative order in each group.
pub fn group_by_year<'a>(publications: &[&'a Publication]) -> HashMap<String, Vec<&'a Publication>> {
    let mut groups: HashMap<String, Vec<&'a Publication>> = HashMap::new();

    for publication in publications {
        let key = match publication.year {
            Some(year) => year.to_string(),
            None => UNDATED_GROUP.to_string(),
        };
        groups.entry(key).or_default().push(publication);
    }

    groups
}

/// Year groups, most recent first, with the undated group last.
pub fn sorted_group_names(groups: &HashMap<String, Vec<&Publication>>) -> Vec<String> {
    let mut years: Vec<i32> = groups.keys().filter_map(|k| k.parse().ok()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));

    let mut names: Vec<String> = years.into_iter().map(|y| y.to_string()).collect();
    if groups.contains_key(UNDATED_GROUP) {
        names.push(UNDATED_GROUP.to_string());
    }
    names
}
