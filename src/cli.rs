use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::Theme;

/// Scholarfolio - academic portfolio viewer
///
/// Shows a researcher's profile, publications, education and teaching from a
/// JSON portfolio document. Without a file the built-in sample is shown.
#[derive(Parser, Debug)]
#[command(name = "scholarfolio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Portfolio JSON file
    #[arg(short, long, value_name = "FILE", env = "SCHOLARFOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Initial color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Light, env = "SCHOLARFOLIO_THEME")]
    pub theme: ThemeChoice,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["scholarfolio"]).unwrap();
        assert_eq!(cli.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_config_and_theme() {
        let cli =
            Cli::try_parse_from(["scholarfolio", "--config", "me.json", "--theme", "dark"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("me.json")));
        assert_eq!(Theme::from(cli.theme), Theme::Dark);
    }
}
