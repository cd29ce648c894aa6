use chrono::Datelike;
use scholarfolio_core::{Filters, Publication};
use slint::{SharedString, VecModel};
use std::rc::Rc;

use crate::state::AppState;
use crate::ui::formatting::{
    education_card, format_footer, format_publication_summary, highlight_entries, project_card,
    publication_card, social_links, talk_card, teaching_card,
};
use crate::MainWindow;

/// Copy the static parts of the portfolio into the window.
/// The publication list itself arrives through the browser subscription.
pub fn populate_window(main_window: &MainWindow, state: &AppState) {
    let portfolio = &state.portfolio;
    let text = |value: &Option<String>| SharedString::from(value.as_deref().unwrap_or(""));

    main_window.set_window_title(SharedString::from(state.get_window_title()));

    // Header and intro
    main_window.set_name(SharedString::from(portfolio.name.as_str()));
    main_window.set_tagline(text(&portfolio.tagline));
    main_window.set_avatar(text(&portfolio.avatar));
    main_window.set_cv_url(text(&portfolio.cv_url));
    main_window.set_intro(SharedString::from(portfolio.intro()));
    main_window.set_affiliation(SharedString::from(
        portfolio
            .affiliation
            .as_ref()
            .map(|a| a.summary())
            .unwrap_or_default(),
    ));
    main_window.set_location(text(&portfolio.location));
    main_window.set_email(text(&portfolio.email));
    main_window.set_socials(Rc::new(VecModel::from(social_links(&portfolio.socials))).into());
    main_window.set_highlights(
        Rc::new(VecModel::from(highlight_entries(&portfolio.highlights))).into(),
    );

    // Year scopes never change after load
    let scopes: Vec<SharedString> = state
        .browser
        .scopes()
        .iter()
        .map(|s| SharedString::from(s.as_str()))
        .collect();
    main_window.set_scopes(Rc::new(VecModel::from(scopes)).into());

    // Remaining sections
    main_window.set_projects(
        Rc::new(VecModel::from(
            portfolio.projects.iter().map(project_card).collect::<Vec<_>>(),
        ))
        .into(),
    );
    main_window.set_talks(
        Rc::new(VecModel::from(
            portfolio.talks.iter().map(talk_card).collect::<Vec<_>>(),
        ))
        .into(),
    );
    main_window.set_education(
        Rc::new(VecModel::from(
            portfolio.education.iter().map(education_card).collect::<Vec<_>>(),
        ))
        .into(),
    );
    main_window.set_teaching(
        Rc::new(VecModel::from(
            portfolio.teaching.iter().map(teaching_card).collect::<Vec<_>>(),
        ))
        .into(),
    );

    let year = chrono::Local::now().year();
    main_window.set_footer(SharedString::from(format_footer(&portfolio.name, year)));
}

/// Render the current filtered view. Called by the browser on every change.
pub fn show_publications(
    main_window: &MainWindow,
    visible: &[&Publication],
    filters: &Filters,
    total: usize,
) {
    let cards: Vec<_> = visible.iter().map(|p| publication_card(p)).collect();
    main_window.set_publications(Rc::new(VecModel::from(cards)).into());

    // Keep the controls in sync when the change did not come from them
    main_window.set_query(SharedString::from(filters.query.as_str()));
    main_window.set_active_scope(SharedString::from(filters.scope.as_str()));

    main_window.set_publication_summary(SharedString::from(format_publication_summary(
        visible.len(),
        total,
        filters,
    )));
}
