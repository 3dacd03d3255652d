//! Sidebar validation and traversal for Folio.
//!
//! Turns the raw sidebar of a [`folio_config::SiteConfig`] into a tagged
//! [`NavNode`] tree and exposes it read-only to renderers:
//!
//! - [`validate`]: structural checks, conversion to [`ValidatedConfig`]
//! - [`resolve_links`]: every link must name an existing document
//! - [`flatten`]: lazy pre-order sequence of `(depth, text, link)` rows
//! - [`find_node`]: point lookup by exact link
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use folio_config::{NavEntry, SiteConfig};
//! use folio_nav::{flatten, resolve_links, validate};
//!
//! let config = SiteConfig::new(
//!     "Handbook",
//!     vec![
//!         NavEntry::leaf("Intro", "/"),
//!         NavEntry::group("Basics", vec![NavEntry::leaf("Unit", "/basic/unit")]),
//!     ],
//! );
//! let config = validate(config).unwrap();
//!
//! let available: HashSet<String> = ["/", "/basic/unit"].map(String::from).into();
//! resolve_links(&config, &available).unwrap();
//!
//! let rows: Vec<_> = flatten(&config).map(|e| (e.depth, e.text)).collect();
//! assert_eq!(rows, vec![(0, "Intro"), (0, "Basics"), (1, "Unit")]);
//! ```

mod error;
mod node;
mod traverse;
mod validate;

pub use error::{ConfigError, NodePath};
pub use node::{NavNode, ValidatedConfig};
pub use traverse::{FlatEntry, Flatten, find_node, flatten};
pub use validate::{MAX_DEPTH, resolve_links, validate};
