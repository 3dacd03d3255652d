//! `folio check` command implementation.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, SiteConfig};
use folio_nav::{ValidatedConfig, resolve_links, validate};
use folio_scan::{DocPage, DocumentRef, ScanError, Scanner};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover folio.toml / folio.json).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Validate the sidebar and resolve every link against the source directory.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        let source_dir = config.docs_resolved.source_dir.clone();
        output.info(&format!("Source: {}", source_dir.display()));

        let config = validate(config)?;

        let docs = Scanner::new(source_dir).scan();
        let available: HashSet<String> = docs.iter().map(|d| d.route.clone()).collect();
        resolve_links(&config, &available)?;

        for route in unlisted_routes(&config, &docs) {
            output.warning(&format!("Not in sidebar: {route}"));
        }
        for route in empty_pages(&config, &docs)? {
            output.warning(&format!("Empty document: {route}"));
        }

        output.success(&format!(
            "{}: {} sidebar entries, {} documents, all links resolved",
            config.title(),
            config.flatten().count(),
            docs.len()
        ));
        Ok(())
    }
}

/// Routes of documents that no sidebar entry links to, in scan order.
fn unlisted_routes<'a>(config: &ValidatedConfig, docs: &'a [DocumentRef]) -> Vec<&'a str> {
    docs.iter()
        .map(|d| d.route.as_str())
        .filter(|route| config.find_node(route).is_none())
        .collect()
}

/// Routes of sidebar-linked documents whose markdown is blank.
///
/// Reads every linked page, so an unreadable document fails the check.
fn empty_pages<'a>(
    config: &ValidatedConfig,
    docs: &'a [DocumentRef],
) -> Result<Vec<&'a str>, ScanError> {
    let mut empty = Vec::new();
    for doc in docs.iter().filter(|d| config.find_node(&d.route).is_some()) {
        let page = DocPage::load(doc)?;
        if page.content.trim().is_empty() {
            empty.push(doc.route.as_str());
        }
    }
    Ok(empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::NavEntry;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn doc(route: &str) -> DocumentRef {
        DocumentRef {
            route: route.to_owned(),
            source: PathBuf::from(format!("docs{route}.md")),
        }
    }

    #[test]
    fn test_unlisted_routes() {
        let config = validate(SiteConfig::new(
            "Handbook",
            vec![
                NavEntry::leaf("Intro", "/"),
                NavEntry::group("Basics", vec![NavEntry::leaf("Unit", "/basic/unit")])
                    .with_link("/basic"),
            ],
        ))
        .unwrap();
        let docs = vec![
            doc("/"),
            doc("/basic"),
            doc("/basic/unit"),
            doc("/basic/fuzz"),
            doc("/drafts"),
        ];

        assert_eq!(unlisted_routes(&config, &docs), vec!["/basic/fuzz", "/drafts"]);
    }

    #[test]
    fn test_empty_pages_only_reports_linked_blank_documents() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("index.md"), "# Handbook\n").unwrap();
        fs::write(temp_dir.path().join("fuzz.md"), "  \n").unwrap();
        fs::write(temp_dir.path().join("drafts.md"), "").unwrap();
        let docs = Scanner::new(temp_dir.path().to_path_buf()).scan();
        let config = validate(SiteConfig::new(
            "Handbook",
            vec![NavEntry::leaf("Intro", "/"), NavEntry::leaf("Fuzz", "/fuzz")],
        ))
        .unwrap();

        assert_eq!(empty_pages(&config, &docs).unwrap(), vec!["/fuzz"]);
    }

    #[test]
    fn test_empty_pages_unreadable_document_fails() {
        let config =
            validate(SiteConfig::new("Handbook", vec![NavEntry::leaf("Gone", "/gone")])).unwrap();
        let docs = vec![doc("/gone")];

        let err = empty_pages(&config, &docs).unwrap_err();

        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn test_unlisted_routes_none() {
        let config =
            validate(SiteConfig::new("Handbook", vec![NavEntry::leaf("Intro", "/")])).unwrap();
        assert!(unlisted_routes(&config, &[doc("/")]).is_empty());
    }
}
