//! Markdown document discovery for Folio.
//!
//! [`Scanner`] walks the docs source directory and produces the set of routes
//! that sidebar links are resolved against. [`DocPage`] holds a page's raw
//! markdown once it is needed.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use folio_scan::{DocPage, Scanner};
//!
//! let scanner = Scanner::new(PathBuf::from("docs"));
//! for doc in scanner.scan() {
//!     let page = DocPage::load(&doc).unwrap();
//!     assert_eq!(page.path, doc.route);
//! }
//! ```

mod scanner;

use std::path::PathBuf;

pub use scanner::{DocumentRef, Scanner};

/// Error reading a document.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Page source could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// A markdown page addressed by its route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
    /// Site route, unique across the site.
    pub path: String,
    /// Raw markdown.
    pub content: String,
    /// File the content was read from.
    pub source: PathBuf,
}

impl DocPage {
    /// Read the page behind a discovered document.
    pub fn load(doc: &DocumentRef) -> Result<Self, ScanError> {
        let content = std::fs::read_to_string(&doc.source).map_err(|source| ScanError::Io {
            path: doc.source.clone(),
            source,
        })?;
        Ok(Self {
            path: doc.route.clone(),
            content,
            source: doc.source.clone(),
        })
    }
}
