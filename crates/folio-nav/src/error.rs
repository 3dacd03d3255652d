//! Sidebar configuration errors.

use std::fmt;

use crate::MAX_DEPTH;

/// Position of a sidebar node: sibling indices from the root, outermost first.
///
/// `[1, 1]` is the second child of the second top-level entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the sidebar itself (no indices).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Nesting level: 1 for top-level entries.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Sibling indices from the root.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{index}")?;
        }
        f.write_str("]")
    }
}

/// Sidebar configuration error.
///
/// Every variant is fatal to the build. Errors are deterministic for a given
/// input, so retrying without changing the config cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Title missing or blank.
    #[error("Empty title: site title is missing or blank")]
    EmptyTitle,
    /// Sidebar has zero entries.
    #[error("Empty sidebar: at least one entry is required")]
    EmptySidebar,
    /// Node has neither `link` nor `items`.
    #[error("Invalid node at {0}: entry needs a link, nested items, or both")]
    InvalidNode(NodePath),
    /// Node label is blank.
    #[error("Empty text at {0}: entry label is missing or blank")]
    EmptyText(NodePath),
    /// Link is not an absolute route without whitespace.
    #[error("Invalid link at {path}: {link:?} must start with '/' and contain no whitespace")]
    InvalidLink {
        /// Offending node.
        path: NodePath,
        /// Link as written.
        link: String,
    },
    /// A sibling earlier in the same group declares the same link.
    #[error("Duplicate link at {path}: {link} is already used by an earlier sibling")]
    DuplicateLink {
        /// The later of the two siblings.
        path: NodePath,
        /// Shared link.
        link: String,
    },
    /// Nesting exceeds [`MAX_DEPTH`].
    #[error("Excessive depth at {0}: sidebar nesting is limited to {max} levels", max = MAX_DEPTH)]
    ExcessiveDepth(NodePath),
    /// Link has no corresponding document.
    #[error("Dangling link at {path}: no document found for {link}")]
    DanglingLink {
        /// Offending node.
        path: NodePath,
        /// Unresolved route.
        link: String,
    },
}

impl ConfigError {
    /// Position of the offending node, if the error concerns one.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            Self::EmptyTitle | Self::EmptySidebar => None,
            Self::InvalidNode(path) | Self::EmptyText(path) | Self::ExcessiveDepth(path) => {
                Some(path)
            }
            Self::InvalidLink { path, .. }
            | Self::DuplicateLink { path, .. }
            | Self::DanglingLink { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_path_display() {
        assert_eq!(NodePath::root().to_string(), "[]");
        assert_eq!(NodePath::from(vec![0]).to_string(), "[0]");
        assert_eq!(NodePath::from(vec![1, 1]).to_string(), "[1, 1]");
    }

    #[test]
    fn test_node_path_child_extends_parent() {
        let parent = NodePath::from(vec![2]);
        let child = parent.child(3);

        assert_eq!(child.as_slice(), &[2, 3]);
        assert_eq!(child.depth(), 2);
        assert_eq!(parent.as_slice(), &[2]);
    }

    #[test]
    fn test_dangling_link_message_names_position_and_route() {
        let err = ConfigError::DanglingLink {
            path: NodePath::from(vec![1, 1]),
            link: "/basic/fuzz".to_owned(),
        };
        let msg = err.to_string();

        assert!(msg.starts_with("Dangling link"));
        assert!(msg.contains("[1, 1]"));
        assert!(msg.contains("/basic/fuzz"));
    }

    #[test]
    fn test_excessive_depth_message_names_limit() {
        let err = ConfigError::ExcessiveDepth(NodePath::from(vec![0; 7]));
        assert!(err.to_string().contains("limited to 6 levels"));
    }

    #[test]
    fn test_path_accessor() {
        assert_eq!(ConfigError::EmptyTitle.path(), None);
        let path = NodePath::from(vec![0]);
        assert_eq!(ConfigError::InvalidNode(path.clone()).path(), Some(&path));
    }
}
