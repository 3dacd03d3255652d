//! Structural validation and link resolution.

use std::collections::HashSet;
use std::hash::BuildHasher;

use folio_config::{NavEntry, SiteConfig};

use crate::error::{ConfigError, NodePath};
use crate::node::{NavNode, ValidatedConfig};

/// Maximum sidebar nesting. Top-level entries are level 1.
pub const MAX_DEPTH: usize = 6;

/// Validate a raw site configuration and convert its sidebar to [`NavNode`]s.
///
/// Checks the title, then that the sidebar is non-empty, then makes one
/// pre-order, left-to-right pass over the sidebar per rule:
///
/// 1. node shape: `link`, non-empty `items`, or both
/// 2. non-blank label
/// 3. link syntax
/// 4. no duplicate link among earlier siblings
/// 5. nesting bound
///
/// A rule is checked on the whole tree before the next one starts, so the
/// first failure of the earliest rule is returned regardless of where other
/// faults sit.
pub fn validate(config: SiteConfig) -> Result<ValidatedConfig, ConfigError> {
    if config.title.trim().is_empty() {
        return Err(ConfigError::EmptyTitle);
    }
    if config.sidebar.is_empty() {
        return Err(ConfigError::EmptySidebar);
    }

    let root = NodePath::root();
    walk(&config.sidebar, &root, &mut check_shape)?;
    walk(&config.sidebar, &root, &mut check_text)?;
    walk(&config.sidebar, &root, &mut check_link_syntax)?;
    walk(&config.sidebar, &root, &mut check_unique_link)?;
    walk(&config.sidebar, &root, &mut check_depth)?;

    let sidebar = convert_level(config.sidebar, &root)?;

    Ok(ValidatedConfig::new(
        config.title,
        config.description,
        config.theme,
        sidebar,
    ))
}

/// Visit every entry in pre-order with its earlier siblings and position.
fn walk<F>(entries: &[NavEntry], parent: &NodePath, check: &mut F) -> Result<(), ConfigError>
where
    F: FnMut(&NavEntry, &[NavEntry], &NodePath) -> Result<(), ConfigError>,
{
    for (index, entry) in entries.iter().enumerate() {
        let path = parent.child(index);
        check(entry, &entries[..index], &path)?;
        walk(children(entry), &path, check)?;
    }
    Ok(())
}

/// Nested entries; `items: []` is treated as absent.
fn children(entry: &NavEntry) -> &[NavEntry] {
    entry.items.as_deref().unwrap_or_default()
}

fn check_shape(entry: &NavEntry, _: &[NavEntry], path: &NodePath) -> Result<(), ConfigError> {
    if entry.link.is_none() && children(entry).is_empty() {
        return Err(ConfigError::InvalidNode(path.clone()));
    }
    Ok(())
}

fn check_text(entry: &NavEntry, _: &[NavEntry], path: &NodePath) -> Result<(), ConfigError> {
    if entry.text.trim().is_empty() {
        return Err(ConfigError::EmptyText(path.clone()));
    }
    Ok(())
}

fn check_link_syntax(
    entry: &NavEntry,
    _: &[NavEntry],
    path: &NodePath,
) -> Result<(), ConfigError> {
    match &entry.link {
        Some(link) if !is_valid_link(link) => Err(ConfigError::InvalidLink {
            path: path.clone(),
            link: link.clone(),
        }),
        _ => Ok(()),
    }
}

fn check_unique_link(
    entry: &NavEntry,
    earlier: &[NavEntry],
    path: &NodePath,
) -> Result<(), ConfigError> {
    let Some(link) = &entry.link else {
        return Ok(());
    };
    if earlier.iter().any(|sibling| sibling.link.as_ref() == Some(link)) {
        return Err(ConfigError::DuplicateLink {
            path: path.clone(),
            link: link.clone(),
        });
    }
    Ok(())
}

fn check_depth(_: &NavEntry, _: &[NavEntry], path: &NodePath) -> Result<(), ConfigError> {
    if path.depth() > MAX_DEPTH {
        return Err(ConfigError::ExcessiveDepth(path.clone()));
    }
    Ok(())
}

/// A link is a route: starts with `/` and has no whitespace.
fn is_valid_link(link: &str) -> bool {
    link.starts_with('/') && !link.chars().any(char::is_whitespace)
}

/// Convert one level of already-checked siblings.
fn convert_level(
    entries: Vec<NavEntry>,
    parent: &NodePath,
) -> Result<Vec<NavNode>, ConfigError> {
    let mut nodes = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let path = parent.child(index);
        let items = entry.items.filter(|items| !items.is_empty());

        let node = match (entry.link, items) {
            (Some(link), None) => NavNode::Leaf {
                text: entry.text,
                link,
            },
            (link, Some(items)) => NavNode::Group {
                text: entry.text,
                link,
                items: convert_level(items, &path)?,
            },
            (None, None) => return Err(ConfigError::InvalidNode(path)),
        };
        nodes.push(node);
    }

    Ok(nodes)
}

/// Check that every link in the sidebar names an available document.
///
/// Links are visited in pre-order, left to right, including group header
/// links. The first missing one is reported, so repeated runs over the same
/// input always report the same error.
pub fn resolve_links<S: BuildHasher>(
    config: &ValidatedConfig,
    available: &HashSet<String, S>,
) -> Result<(), ConfigError> {
    let checked = resolve_level(config.sidebar(), &NodePath::root(), available)?;
    tracing::debug!(
        links = checked,
        documents = available.len(),
        "Sidebar links resolved"
    );
    Ok(())
}

/// Resolve one level and its descendants, returning the number of links checked.
fn resolve_level<S: BuildHasher>(
    nodes: &[NavNode],
    parent: &NodePath,
    available: &HashSet<String, S>,
) -> Result<usize, ConfigError> {
    let mut checked = 0;
    for (index, node) in nodes.iter().enumerate() {
        let path = parent.child(index);
        if let Some(link) = node.link() {
            if !available.contains(link) {
                return Err(ConfigError::DanglingLink {
                    path,
                    link: link.to_owned(),
                });
            }
            checked += 1;
        }
        checked += resolve_level(node.items(), &path, available)?;
    }
    Ok(checked)
}
