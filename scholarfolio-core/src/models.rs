use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The whole portfolio document.
///
/// Keys use camelCase so hand-written configuration reads the same as a
/// JavaScript object literal. Every collection defaults to empty and every
/// optional field to `None`, so display code never has to guess.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub affiliation: Option<Affiliation>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub research_areas: Vec<ResearchArea>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub teaching: Vec<Teaching>,
    #[serde(default)]
    pub talks: Vec<Talk>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Affiliation {
    pub role: String,
    pub org: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Socials {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub google_scholar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Website,
    GoogleScholar,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Website => "Website",
            SocialKind::GoogleScholar => "Google Scholar",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchArea {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: HighlightValue,
}

/// A highlight is either a count ("Citations: 214") or free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HighlightValue {
    Count(u64),
    Text(String),
}

// Counts written as `214.0` are still counts; JSON Schema already treats
// them as integers.
impl<'de> Deserialize<'de> for HighlightValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(HighlightValue::Text(s)),
            serde_json::Value::Number(n) => whole_number(&n)
                .and_then(|v| u64::try_from(v).ok())
                .map(HighlightValue::Count)
                .ok_or_else(|| {
                    D::Error::custom(format!("highlight count {} is not a whole number", n))
                }),
            other => Err(D::Error::custom(format!(
                "highlight value must be a count or text, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for HighlightValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightValue::Count(n) => write!(f, "{}", n),
            HighlightValue::Text(s) => f.write_str(s),
        }
    }
}

/// One citable work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub paper: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Paper,
    Code,
    Poster,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Paper => "Paper",
            LinkKind::Code => "Code",
            LinkKind::Poster => "Poster",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub thesis_title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teaching {
    pub course: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Accept a year written as a number or a numeric string. Anything else is
/// treated as "no year" so that incomplete entries stay visible but never
/// show up as a scope.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => whole_number(&n).and_then(|y| i32::try_from(y).ok()),
        serde_json::Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }))
}

/// Integer value of a JSON number, accepting floats with no fractional part.
fn whole_number(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// `null` string lists decode as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Portfolio {
    /// Short biography sentence shown in the intro card.
    pub fn intro(&self) -> String {
        let mut intro = match &self.affiliation {
            Some(aff) => format!("I am a {} at {}.", aff.role, aff.org),
            None => format!("I am {}.", self.name),
        };

        if !self.research_areas.is_empty() {
            let areas: Vec<&str> = self.research_areas.iter().map(|a| a.name.as_str()).collect();
            intro.push_str(&format!(" My work focuses on {}.", areas.join(", ")));
        }

        intro
    }
}

impl Affiliation {
    /// "role · org · since start"
    pub fn summary(&self) -> String {
        match &self.start {
            Some(start) => format!("{} · {} · since {}", self.role, self.org, start),
            None => format!("{} · {}", self.role, self.org),
        }
    }
}

impl Socials {
    /// Configured profiles in display order.
    pub fn entries(&self) -> Vec<(SocialKind, &str)> {
        [
            (SocialKind::GitHub, &self.github),
            (SocialKind::LinkedIn, &self.linkedin),
            (SocialKind::Website, &self.website),
            (SocialKind::GoogleScholar, &self.google_scholar),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_deref().map(|u| (kind, u)))
        .collect()
    }
}

impl Publication {
    /// Year in the string form used by scopes, empty when unknown.
    pub fn year_string(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }

    /// "venue year", tolerating either half being absent.
    pub fn venue_line(&self) -> String {
        let venue = self.venue.as_deref().unwrap_or("");
        let year = self.year_string();
        format!("{} {}", venue, year).trim().to_string()
    }
}

impl Links {
    /// Present links, always in paper, code, poster order.
    pub fn entries(&self) -> Vec<(LinkKind, &str)> {
        [
            (LinkKind::Paper, &self.paper),
            (LinkKind::Code, &self.code),
            (LinkKind::Poster, &self.poster),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_deref().map(|u| (kind, u)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.paper.is_none() && self.code.is_none() && self.poster.is_none()
    }
}

impl Education {
    pub fn heading(&self) -> String {
        match &self.field {
            Some(field) => format!("{} in {}", self.degree, field),
            None => self.degree.clone(),
        }
    }

    pub fn period(&self) -> String {
        let start = self.start.as_deref().unwrap_or("");
        let end = self.end.as_deref().unwrap_or("present");
        format!("{}–{}", start, end)
    }
}

impl Teaching {
    pub fn details(&self) -> String {
        [self.role.as_deref(), self.term.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

impl Talk {
    pub fn details(&self) -> String {
        [self.event.as_deref(), self.date.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn publication(value: serde_json::Value) -> Publication {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_publication_defaults() {
        let p = publication(json!({ "title": "Flows" }));
        assert!(p.authors.is_empty());
        assert!(p.tags.is_empty());
        assert_eq!(p.venue, None);
        assert_eq!(p.year, None);
        assert!(p.links.is_empty());
    }

    #[test]
    fn test_year_accepts_numeric_string() {
        let p = publication(json!({ "title": "Flows", "year": " 2024 " }));
        assert_eq!(p.year, Some(2024));

        let p = publication(json!({ "title": "Flows", "year": 2024.0 }));
        assert_eq!(p.year, Some(2024));
    }

    #[test]
    fn test_malformed_year_is_dropped() {
        for year in [json!("soon"), json!(true), json!(2024.5), json!(9_999_999_999i64), json!(null)] {
            let p = publication(json!({ "title": "Flows", "year": year.clone() }));
            assert_eq!(p.year, None, "year {:?}", year);
        }
    }

    #[test]
    fn test_abstract_key() {
        let p = publication(json!({ "title": "Flows", "abstract": "We flow." }));
        assert_eq!(p.summary.as_deref(), Some("We flow."));
    }

    #[test]
    fn test_venue_line() {
        let mut p = publication(json!({ "title": "Nets", "venue": "ICML", "year": 2023 }));
        assert_eq!(p.venue_line(), "ICML 2023");
        p.year = None;
        assert_eq!(p.venue_line(), "ICML");
        p.venue = None;
        p.year = Some(2021);
        assert_eq!(p.venue_line(), "2021");
    }

    #[test]
    fn test_link_order() {
        let links = Links {
            paper: None,
            code: Some("https://code".to_string()),
            poster: Some("https://poster".to_string()),
        };
        let kinds: Vec<LinkKind> = links.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![LinkKind::Code, LinkKind::Poster]);
    }

    #[test]
    fn test_highlight_values() {
        let h: Vec<Highlight> = serde_json::from_value(json!([
            { "label": "Papers", "value": 6 },
            { "label": "Status", "value": "on leave" }
        ]))
        .unwrap();
        assert_eq!(h[0].value, HighlightValue::Count(6));
        assert_eq!(h[1].value.to_string(), "on leave");
    }

    #[test]
    fn test_highlight_whole_float_is_count() {
        let h: Highlight =
            serde_json::from_value(json!({ "label": "Citations", "value": 214.0 })).unwrap();
        assert_eq!(h.value, HighlightValue::Count(214));

        let bad = serde_json::from_value::<Highlight>(json!({ "label": "Citations", "value": 2.5 }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_null_string_lists_are_empty() {
        let p = publication(json!({ "title": "Flows", "authors": null, "tags": null }));
        assert!(p.authors.is_empty());
        assert!(p.tags.is_empty());

        let project: Project =
            serde_json::from_value(json!({ "title": "Kit", "tags": null })).unwrap();
        assert!(project.tags.is_empty());
    }

    #[test]
    fn test_education_display() {
        let e: Education = serde_json::from_value(json!({
            "degree": "MSc",
            "field": "Artificial Intelligence",
            "institution": "Your University",
            "start": "2022",
            "thesisTitle": "Priors"
        }))
        .unwrap();
        assert_eq!(e.heading(), "MSc in Artificial Intelligence");
        assert_eq!(e.period(), "2022–present");
        assert_eq!(e.thesis_title.as_deref(), Some("Priors"));
    }

    #[test]
    fn test_socials_entries_skip_missing() {
        let s: Socials = serde_json::from_value(json!({
            "github": "https://github.com/me",
            "googleScholar": "https://scholar.google.com/x"
        }))
        .unwrap();
        let labels: Vec<&str> = s.entries().iter().map(|(k, _)| k.label()).collect();
        assert_eq!(labels, vec!["GitHub", "Google Scholar"]);
    }

    #[test]
    fn test_intro_mentions_areas() {
        let portfolio: Portfolio = serde_json::from_value(json!({
            "name": "Ada",
            "affiliation": { "role": "PhD Researcher", "org": "Uni" },
            "researchAreas": [{ "name": "Optimization" }, { "name": "Scientific ML" }]
        }))
        .unwrap();
        assert_eq!(
            portfolio.intro(),
            "I am a PhD Researcher at Uni. My work focuses on Optimization, Scientific ML."
        );
    }
}
