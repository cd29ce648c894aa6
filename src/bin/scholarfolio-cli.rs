use clap::{Parser, ValueEnum};
use colored::Colorize;
use scholarfolio_core::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Scholarfolio CLI - print a portfolio and search its publications
///
/// Examples:
///   # Print the whole portfolio
///   scholarfolio-cli portfolio.json
///
///   # Publications mentioning "flow" (title, authors, venue, abstract, tags)
///   scholarfolio-cli portfolio.json --query flow
///
///   # Publications from one year
///   scholarfolio-cli portfolio.json --scope 2024
///
///   # Combine search and year, newest first, grouped by year
///   scholarfolio-cli portfolio.json -q lattice -s all --sort year --group-by-year
///
///   # List the years that can be used as a scope
///   scholarfolio-cli portfolio.json --scopes
#[derive(Parser, Debug)]
#[command(name = "scholarfolio-cli")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - --query is a case-insensitive literal substring search\n  \
    - --scope is \"all\" or a publication year\n  \
    - Both filters must match for a publication to be shown\n\n\
Sorting Options:\n  \
    - title: Alphabetical, ignoring leading articles\n  \
    - year: Most recent first, undated last")]
struct Cli {
    /// Path to the portfolio JSON file (the built-in sample when omitted)
    #[arg(value_name = "FILE", env = "SCHOLARFOLIO_CONFIG")]
    file: Option<PathBuf>,

    /// Search publications by title, author, venue, abstract or tag
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    query: String,

    /// Restrict publications to one year ("all" for no restriction)
    #[arg(short, long, value_name = "YEAR", default_value = ALL_SCOPE)]
    scope: String,

    /// Sort matching publications
    #[arg(long = "sort", value_enum, value_name = "FIELD")]
    sort_by: Option<SortField>,

    /// Group matching publications by year
    #[arg(short = 'G', long)]
    group_by_year: bool,

    /// List available year scopes and exit
    #[arg(long)]
    scopes: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortField {
    Title,
    Year,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Title => SortKey::Title,
            SortField::Year => SortKey::Year,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scholarfolio_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let loaded = match &cli.file {
        Some(path) => load_portfolio(path),
        None => default_portfolio(),
    };

    let portfolio = match loaded {
        Ok(portfolio) => portfolio,
        Err(err) => {
            // Nothing useful left to do if stderr itself is gone
            let _ = report_load_error(&mut io::stderr().lock(), cli.file.as_deref(), &err);
            process::exit(1);
        }
    };

    let mut out = io::stdout().lock();
    if let Err(err) = run(&mut out, &portfolio, &cli) {
        if err.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("Error writing output: {}", err);
            process::exit(1);
        }
    }
}

/// Pick the view the flags ask for and render it.
fn run(out: &mut impl Write, portfolio: &Portfolio, cli: &Cli) -> io::Result<()> {
    if cli.scopes {
        return write_scopes(out, portfolio);
    }

    let filters = Filters::new(cli.query.clone(), &cli.scope);

    if has_filters(&filters) || cli.sort_by.is_some() || cli.group_by_year {
        write_filtered_publications(out, portfolio, &filters, cli)
    } else {
        write_portfolio(out, portfolio)
    }
}

fn report_load_error(
    out: &mut impl Write,
    file: Option<&Path>,
    err: &PortfolioError,
) -> io::Result<()> {
    let source = file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in sample".to_string());
    writeln!(out, "Error loading portfolio from '{}':\n", source)?;
    for (i, detail) in err.details().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, detail)?;
    }
    writeln!(out, "\nPlease fix these errors and try again.")
}

fn write_scopes(out: &mut impl Write, portfolio: &Portfolio) -> io::Result<()> {
    for scope in available_scopes(&portfolio.publications) {
        writeln!(out, "{}", scope)?;
    }
    Ok(())
}

fn write_filtered_publications(
    out: &mut impl Write,
    portfolio: &Portfolio,
    filters: &Filters,
    cli: &Cli,
) -> io::Result<()> {
    writeln!(out, "{}\n", "# Publications".bold())?;

    if has_filters(filters) {
        writeln!(out, "## Active Filters\n")?;
        if !filters.query.is_empty() {
            writeln!(out, "- **Query:** {}", filters.query)?;
        }
        writeln!(out, "- **Year:** {}", filters.scope)?;
        writeln!(out)?;
    }

    if let Some(sort_field) = cli.sort_by {
        writeln!(out, "**Sorted by:** {:?}\n", sort_field)?;
    }

    let mut matching: Vec<Publication> = filter_publications(&portfolio.publications, filters)
        .into_iter()
        .cloned()
        .collect();

    writeln!(
        out,
        "**Matching Publications:** {} of {}\n",
        matching.len(),
        portfolio.publications.len()
    )?;

    if matching.is_empty() {
        writeln!(out, "{}\n", "No publications match your search.".italic())?;
        return Ok(());
    }

    if let Some(sort_field) = cli.sort_by {
        sort_publications(&mut matching, sort_field.into());
    }

    if cli.group_by_year {
        let refs: Vec<&Publication> = matching.iter().collect();
        let groups = group_by_year(&refs);
        for group_name in sorted_group_names(&groups) {
            if let Some(group) = groups.get(&group_name) {
                writeln!(out, "{}\n", format!("## {}", group_name).bold())?;
                for publication in group {
                    write_publication(out, publication)?;
                }
            }
        }
    } else {
        for publication in &matching {
            write_publication(out, publication)?;
        }
    }

    Ok(())
}

fn write_portfolio(out: &mut impl Write, portfolio: &Portfolio) -> io::Result<()> {
    writeln!(out, "{}", format!("# {}", portfolio.name).bold())?;
    if let Some(tagline) = &portfolio.tagline {
        writeln!(out, "{}", tagline.dimmed())?;
    }
    writeln!(out)?;

    writeln!(out, "{}\n", portfolio.intro())?;

    if let Some(affiliation) = &portfolio.affiliation {
        writeln!(out, "- {}", affiliation.summary())?;
    }
    if let Some(location) = &portfolio.location {
        writeln!(out, "- {}", location)?;
    }
    if let Some(email) = &portfolio.email {
        writeln!(out, "- {}", email)?;
    }
    for (kind, url) in portfolio.socials.entries() {
        writeln!(out, "- {}: {}", kind.label(), url)?;
    }
    if let Some(cv) = &portfolio.cv_url {
        writeln!(out, "- CV: {}", cv)?;
    }
    writeln!(out)?;

    if !portfolio.highlights.is_empty() {
        let stats: Vec<String> = portfolio
            .highlights
            .iter()
            .map(|h| format!("{} {}", h.value.to_string().bold(), h.label))
            .collect();
        writeln!(out, "{}\n", stats.join(" · "))?;
    }

    writeln!(out, "{}\n", "## Publications".bold())?;
    if portfolio.publications.is_empty() {
        writeln!(out, "{}\n", "No publications listed yet.".italic())?;
    }
    for publication in &portfolio.publications {
        write_publication(out, publication)?;
    }

    if !portfolio.projects.is_empty() {
        writeln!(out, "{}\n", "## Projects".bold())?;
        for project in &portfolio.projects {
            writeln!(out, "### {}\n", project.title)?;
            if let Some(description) = &project.description {
                writeln!(out, "{}\n", description)?;
            }
            if !project.tags.is_empty() {
                writeln!(out, "Tags: {}\n", project.tags.join(", "))?;
            }
            if let Some(link) = &project.link {
                writeln!(out, "View: {}\n", link.underline())?;
            }
        }
    }

    if !portfolio.talks.is_empty() {
        writeln!(out, "{}\n", "## Talks".bold())?;
        for talk in &portfolio.talks {
            writeln!(out, "- **{}** ({})", talk.title, talk.details())?;
        }
        writeln!(out)?;
    }

    if !portfolio.education.is_empty() {
        writeln!(out, "{}\n", "## Education".bold())?;
        for entry in &portfolio.education {
            writeln!(out, "### {}\n", entry.heading())?;
            match &entry.location {
                Some(location) => writeln!(out, "{} · {}", entry.institution, location)?,
                None => writeln!(out, "{}", entry.institution)?,
            }
            writeln!(out, "{}", entry.period().dimmed())?;
            if let Some(thesis) = &entry.thesis_title {
                writeln!(out, "Thesis: {}", thesis)?;
            }
            writeln!(out)?;
        }
    }

    if !portfolio.teaching.is_empty() {
        writeln!(out, "{}\n", "## Teaching".bold())?;
        for course in &portfolio.teaching {
            writeln!(out, "- **{}** ({})", course.course, course.details())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn write_publication(out: &mut impl Write, publication: &Publication) -> io::Result<()> {
    writeln!(out, "{}\n", format!("### {}", publication.title).bold())?;

    let authors = publication.authors_line();
    let venue = publication.venue_line();
    match (authors.is_empty(), venue.is_empty()) {
        (false, false) => writeln!(out, "{} · {}", authors, venue.dimmed())?,
        (false, true) => writeln!(out, "{}", authors)?,
        (true, false) => writeln!(out, "{}", venue.dimmed())?,
        (true, true) => {}
    }

    if let Some(summary) = &publication.summary {
        writeln!(out, "\n{}", summary)?;
    }

    if !publication.tags.is_empty() {
        writeln!(out, "\nTags: {}", publication.tags.join(", ").cyan())?;
    }

    for (kind, url) in publication.links.entries() {
        writeln!(out, "{}: {}", kind.label(), url.underline())?;
    }

    writeln!(out)
}
