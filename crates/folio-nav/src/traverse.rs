//! Read-only traversal for renderers.
//!
//! Renderers consume the sidebar either as a flat pre-order sequence
//! ([`flatten`]) or by point lookup ([`find_node`]). Declaration order is
//! significant and is never changed.

use std::iter::FusedIterator;
use std::slice;

use serde::Serialize;

use crate::node::{NavNode, ValidatedConfig};

/// One row of the flattened sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FlatEntry<'a> {
    /// Nesting depth, 0 for top-level entries.
    pub depth: usize,
    /// Display label.
    pub text: &'a str,
    /// Target route, `None` for group headers without a page.
    pub link: Option<&'a str>,
}

/// Lazy pre-order iterator over a validated sidebar.
///
/// Cloning the iterator snapshots its position.
#[derive(Clone, Debug)]
pub struct Flatten<'a> {
    stack: Vec<slice::Iter<'a, NavNode>>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let level = self.stack.last_mut()?;
            let Some(node) = level.next() else {
                self.stack.pop();
                continue;
            };

            let children = node.items();
            if !children.is_empty() {
                self.stack.push(children.iter());
            }

            return Some(FlatEntry {
                depth,
                text: node.text(),
                link: node.link(),
            });
        }
    }
}

impl FusedIterator for Flatten<'_> {}

/// Flatten the sidebar in pre-order, depth-first, preserving declaration order.
///
/// Every call starts a fresh traversal and yields the same sequence.
pub fn flatten(config: &ValidatedConfig) -> Flatten<'_> {
    Flatten {
        stack: vec![config.sidebar().iter()],
    }
}

/// Find the first node, in pre-order, whose link is exactly `link`.
///
/// Group headers with a landing page are matched too.
pub fn find_node<'a>(config: &'a ValidatedConfig, link: &str) -> Option<&'a NavNode> {
    find_in(config.sidebar(), link)
}

fn find_in<'a>(nodes: &'a [NavNode], link: &str) -> Option<&'a NavNode> {
    for node in nodes {
        if node.link() == Some(link) {
            return Some(node);
        }
        if let Some(found) = find_in(node.items(), link) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve_links, validate};
    use folio_config::{NavEntry, SiteConfig};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn entry(depth: usize, text: &'static str, link: Option<&'static str>) -> FlatEntry<'static> {
        FlatEntry { depth, text, link }
    }

    fn basics() -> ValidatedConfig {
        validate(SiteConfig::new(
            "Handbook",
            vec![
                NavEntry::leaf("Intro", "/"),
                NavEntry::group(
                    "Basics",
                    vec![
                        NavEntry::leaf("Unit", "/basic/unit"),
                        NavEntry::leaf("Fuzz", "/basic/fuzz"),
                    ],
                ),
            ],
        ))
        .unwrap()
    }

    /// Shape of the handbook sidebar, including the clickable "Scenario Tests" group.
    fn handbook() -> ValidatedConfig {
        validate(SiteConfig::new(
            "Smart Contract Testing",
            vec![
                NavEntry::leaf("Introduction", "/"),
                NavEntry::group(
                    "Basic Testing",
                    vec![
                        NavEntry::leaf("Unit Tests", "/basic/unit-tests"),
                        NavEntry::leaf("Integration Tests", "/basic/integration-tests"),
                        NavEntry::leaf("Fork Tests", "/basic/fork-tests"),
                    ],
                ),
                NavEntry::group(
                    "Advanced Testing",
                    vec![
                        NavEntry::leaf("Invariant Tests", "/advanced/invariant-tests"),
                        NavEntry::group(
                            "Scenario Tests",
                            vec![NavEntry::leaf("Lifecycle Tests", "/advanced/lifecycle-tests")],
                        )
                        .with_link("/advanced/scenario-tests"),
                        NavEntry::leaf("Mutation Tests", "/advanced/mutation-tests"),
                    ],
                ),
                NavEntry::leaf("Swiss Cheese", "/swiss-cheese"),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn test_flatten_basics() {
        let config = basics();

        let flat: Vec<_> = flatten(&config).collect();

        assert_eq!(
            flat,
            vec![
                entry(0, "Intro", Some("/")),
                entry(0, "Basics", None),
                entry(1, "Unit", Some("/basic/unit")),
                entry(1, "Fuzz", Some("/basic/fuzz")),
            ]
        );
    }

    #[test]
    fn test_flatten_returns_to_outer_level_after_group() {
        let config = handbook();

        let rows: Vec<_> = flatten(&config).map(|e| (e.depth, e.text)).collect();

        assert_eq!(
            rows,
            vec![
                (0, "Introduction"),
                (0, "Basic Testing"),
                (1, "Unit Tests"),
                (1, "Integration Tests"),
                (1, "Fork Tests"),
                (0, "Advanced Testing"),
                (1, "Invariant Tests"),
                (1, "Scenario Tests"),
                (2, "Lifecycle Tests"),
                (1, "Mutation Tests"),
                (0, "Swiss Cheese"),
            ]
        );
    }

    #[test]
    fn test_flatten_group_header_keeps_link() {
        let config = handbook();

        let scenario = flatten(&config)
            .find(|e| e.text == "Scenario Tests")
            .unwrap();

        assert_eq!(scenario.link, Some("/advanced/scenario-tests"));
        assert_eq!(scenario.depth, 1);
    }

    #[test]
    fn test_flatten_is_restartable() {
        let config = handbook();

        let first: Vec<_> = flatten(&config).collect();
        let second: Vec<_> = config.flatten().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 11);
    }

    #[test]
    fn test_flatten_clone_resumes_from_same_position() {
        let config = basics();
        let mut iter = flatten(&config);
        iter.next();

        let snapshot = iter.clone();

        assert_eq!(iter.collect::<Vec<_>>(), snapshot.collect::<Vec<_>>());
    }

    #[test]
    fn test_flatten_is_fused() {
        let config = basics();
        let mut iter = flatten(&config);
        for _ in 0..4 {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_flatten_is_lazy() {
        let config = handbook();
        let first_two: Vec<_> = flatten(&config).take(2).map(|e| e.text).collect();
        assert_eq!(first_two, vec!["Introduction", "Basic Testing"]);
    }

    #[test]
    fn test_flatten_serializes_for_renderer() {
        let config = basics();
        let json = serde_json::to_value(flatten(&config).collect::<Vec<_>>()).unwrap();

        assert_eq!(json[1]["text"], "Basics");
        assert!(json[1]["link"].is_null());
        assert_eq!(json[2]["depth"], 1);
        assert_eq!(json[2]["link"], "/basic/unit");
    }

    #[test]
    fn test_find_node_leaf() {
        let config = handbook();

        let node = find_node(&config, "/basic/fork-tests").unwrap();

        assert_eq!(node.text(), "Fork Tests");
        assert!(!node.is_group());
    }

    #[test]
    fn test_find_node_group_header() {
        let config = handbook();

        let node = config.find_node("/advanced/scenario-tests").unwrap();

        assert!(node.is_group());
        assert_eq!(node.items()[0].text(), "Lifecycle Tests");
    }

    #[test]
    fn test_find_node_requires_exact_match() {
        let config = handbook();

        assert!(find_node(&config, "/basic/fork-tests/").is_none());
        assert!(find_node(&config, "/basic").is_none());
        assert!(find_node(&config, "/BASIC/FORK-TESTS").is_none());
    }

    #[test]
    fn test_find_node_returns_first_in_preorder() {
        let config = validate(SiteConfig::new(
            "Handbook",
            vec![
                NavEntry::group("Basics", vec![NavEntry::leaf("First", "/overview")]),
                NavEntry::group("Advanced", vec![NavEntry::leaf("Second", "/overview")]),
            ],
        ))
        .unwrap();

        assert_eq!(find_node(&config, "/overview").unwrap().text(), "First");
    }

    #[test]
    fn test_find_node_after_resolve_finds_every_link() {
        let config = handbook();
        let available: HashSet<String> = flatten(&config)
            .filter_map(|e| e.link.map(str::to_owned))
            .collect();

        resolve_links(&config, &available).unwrap();

        for link in &available {
            assert_eq!(find_node(&config, link).unwrap().link(), Some(link.as_str()));
        }
    }

    #[test]
    fn test_validated_config_serializes_in_config_shape() {
        let config = handbook();

        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["title"], "Smart Contract Testing");
        assert!(json.get("description").is_none());
        assert_eq!(json["theme"]["colorScheme"], "light");
        assert_eq!(json["sidebar"][0]["link"], "/");
        assert!(json["sidebar"][0].get("items").is_none());
        assert!(json["sidebar"][1].get("link").is_none());
        assert_eq!(json["sidebar"][1]["items"][0]["text"], "Unit Tests");
        assert_eq!(
            json["sidebar"][2]["items"][1]["link"],
            "/advanced/scenario-tests"
        );
    }
}
