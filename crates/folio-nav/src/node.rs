//! Validated sidebar tree.

use folio_config::ThemeConfig;
use serde::Serialize;

use crate::traverse::{self, Flatten};

/// One entry of a validated sidebar.
///
/// Serializes back to the config shape (`text`, optional `link`, `items`) so a
/// renderer can consume it as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Link to a single page.
    Leaf {
        /// Display label.
        text: String,
        /// Target route.
        link: String,
    },
    /// Labeled group of entries, optionally a page itself.
    Group {
        /// Display label.
        text: String,
        /// Landing page of the group, if clickable.
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
        /// Nested entries (never empty).
        items: Vec<NavNode>,
    },
}

impl NavNode {
    pub fn text(&self) -> &str {
        match self {
            Self::Leaf { text, .. } | Self::Group { text, .. } => text,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf { link, .. } => Some(link),
            Self::Group { link, .. } => link.as_deref(),
        }
    }

    /// Nested entries; empty for leaves.
    pub fn items(&self) -> &[NavNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { items, .. } => items,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

/// Site configuration that passed [`validate`](crate::validate).
///
/// Immutable; the only way to obtain one is through validation, so holding a
/// value is proof that the sidebar invariants hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedConfig {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    theme: ThemeConfig,
    sidebar: Vec<NavNode>,
}

impl ValidatedConfig {
    pub(crate) fn new(
        title: String,
        description: Option<String>,
        theme: ThemeConfig,
        sidebar: Vec<NavNode>,
    ) -> Self {
        Self {
            title,
            description,
            theme,
            sidebar,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn theme(&self) -> ThemeConfig {
        self.theme
    }

    /// Top-level sidebar entries in declaration order.
    pub fn sidebar(&self) -> &[NavNode] {
        &self.sidebar
    }

    /// Shorthand for [`traverse::flatten`].
    pub fn flatten(&self) -> Flatten<'_> {
        traverse::flatten(self)
    }

    /// Shorthand for [`traverse::find_node`].
    pub fn find_node(&self, link: &str) -> Option<&NavNode> {
        traverse::find_node(self, link)
    }
}
