//! `folio nav` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use folio_config::SiteConfig;
use folio_nav::{FlatEntry, ValidatedConfig, validate};

use crate::error::CliError;
use crate::output::Output;

/// Output format for the nav command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum NavFormat {
    /// Indented tree.
    #[default]
    Text,
    /// Validated config as JSON.
    Json,
}

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Path to configuration file (default: auto-discover folio.toml / folio.json).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = NavFormat::Text)]
    format: NavFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl NavArgs {
    /// Print the validated sidebar.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = validate(SiteConfig::load(self.config.as_deref(), None)?)?;

        match self.format {
            NavFormat::Text => {
                output.info(&format!(
                    "{} ({} theme)",
                    config.title(),
                    config.theme().color_scheme.as_str()
                ));
                for entry in config.flatten() {
                    let label = indented(&entry);
                    match entry.link {
                        Some(link) => output.print_with_note(&label, link),
                        None => output.print(&label),
                    }
                }
            }
            NavFormat::Json => output.print(&to_json(&config)?),
        }
        Ok(())
    }
}

/// Label indented two spaces per nesting level.
fn indented(entry: &FlatEntry<'_>) -> String {
    format!("{}{}", "  ".repeat(entry.depth), entry.text)
}

fn to_json(config: &ValidatedConfig) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(config)?)
}
