use scholarfolio_core::{
    Education, Filters, Highlight, Project, Publication, Scope, Socials, Talk, Teaching,
};
use slint::{ModelRc, SharedString, VecModel};
use std::rc::Rc;

use super::types::{
    EducationCard, HighlightEntry, LinkEntry, ProjectCard, PublicationCard, TalkCard, TeachingCard,
};

fn string_model(values: &[String]) -> ModelRc<SharedString> {
    let items: Vec<SharedString> = values.iter().map(|v| SharedString::from(v.as_str())).collect();
    Rc::new(VecModel::from(items)).into()
}

/// "authors · venue year", skipping whichever half is empty
pub fn format_byline(publication: &Publication) -> String {
    [publication.authors_line(), publication.venue_line()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

pub fn publication_card(publication: &Publication) -> PublicationCard {
    let links: Vec<LinkEntry> = publication
        .links
        .entries()
        .into_iter()
        .map(|(kind, url)| LinkEntry {
            label: kind.label().into(),
            url: url.into(),
        })
        .collect();

    PublicationCard {
        title: publication.title.as_str().into(),
        byline: format_byline(publication).into(),
        summary: publication.summary.as_deref().unwrap_or("").into(),
        tags: string_model(&publication.tags),
        links: Rc::new(VecModel::from(links)).into(),
    }
}

pub fn project_card(project: &Project) -> ProjectCard {
    ProjectCard {
        title: project.title.as_str().into(),
        description: project.description.as_deref().unwrap_or("").into(),
        tags: string_model(&project.tags),
        link: project.link.as_deref().unwrap_or("").into(),
    }
}

pub fn talk_card(talk: &Talk) -> TalkCard {
    TalkCard {
        title: talk.title.as_str().into(),
        details: talk.details().into(),
        link: talk.link.as_deref().unwrap_or("").into(),
    }
}

pub fn education_card(entry: &Education) -> EducationCard {
    let institution = match &entry.location {
        Some(location) => format!("{} · {}", entry.institution, location),
        None => entry.institution.clone(),
    };
    let thesis = entry
        .thesis_title
        .as_deref()
        .map(|t| format!("Thesis: {}", t))
        .unwrap_or_default();

    EducationCard {
        heading: entry.heading().into(),
        institution: institution.into(),
        period: entry.period().into(),
        thesis: thesis.into(),
        link: entry.link.as_deref().unwrap_or("").into(),
    }
}

pub fn teaching_card(entry: &Teaching) -> TeachingCard {
    TeachingCard {
        course: entry.course.as_str().into(),
        details: entry.details().into(),
        link: entry.link.as_deref().unwrap_or("").into(),
    }
}

pub fn social_links(socials: &Socials) -> Vec<LinkEntry> {
    socials
        .entries()
        .into_iter()
        .map(|(kind, url)| LinkEntry {
            label: kind.label().into(),
            url: url.into(),
        })
        .collect()
}

pub fn highlight_entries(highlights: &[Highlight]) -> Vec<HighlightEntry> {
    highlights
        .iter()
        .map(|h| HighlightEntry {
            label: h.label.as_str().into(),
            value: h.value.to_string().into(),
        })
        .collect()
}

pub fn format_footer(name: &str, year: i32) -> String {
    format!("© {} {}", year, name)
}

/// One-line description of what the publication list currently shows
pub fn format_publication_summary(shown: usize, total: usize, filters: &Filters) -> String {
    let mut summary = format!("Showing {} of {} publications", shown, total);

    if let Scope::Year(year) = &filters.scope {
        summary.push_str(&format!(" from {}", year));
    }
    if !filters.query.is_empty() {
        summary.push_str(&format!(" matching \"{}\"", filters.query));
    }

    summary
}
