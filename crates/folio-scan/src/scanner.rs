//! Document discovery by filesystem walking.
//!
//! Discovery only records where pages live; content is read later through
//! [`DocPage::load`](crate::DocPage::load).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Reference to a markdown source file and the route it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Site route (e.g., "/", "/basic", "/basic/unit-tests").
    pub route: String,
    /// Path to the `.md` file.
    pub source: PathBuf,
}

/// Walks a source directory and maps markdown files to routes.
///
/// - `index.md` -> `/`
/// - `basic/index.md` -> `/basic`
/// - `basic/unit-tests.md` -> `/basic/unit-tests`
///
/// Hidden files and directories are skipped. Directory entries are visited in
/// name order so results are stable across platforms.
pub struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a new Scanner rooted at `source_dir`.
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the filesystem and return one reference per route.
    ///
    /// Returns an empty Vec if the source directory doesn't exist. When two
    /// files map to the same route (`guide.md` and `guide/index.md`), the
    /// first one found wins and the other is logged.
    pub fn scan(&self) -> Vec<DocumentRef> {
        let mut refs = Vec::new();
        if !self.source_dir.is_dir() {
            tracing::warn!(
                source_dir = %self.source_dir.display(),
                "Source directory does not exist"
            );
            return refs;
        }

        let mut seen = HashSet::new();
        self.scan_directory(&self.source_dir, "", &mut refs, &mut seen);
        tracing::debug!(documents = refs.len(), "Document scan completed");
        refs
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        route_prefix: &str,
        refs: &mut Vec<DocumentRef>,
        seen: &mut HashSet<String>,
    ) {
        let Ok(entries) = fs::read_dir(dir_path) else {
            tracing::debug!(dir = %dir_path.display(), "Skipping unreadable directory");
            return;
        };

        // Cache file_type to avoid repeated stat calls
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                let name = e.file_name().to_string_lossy().into_owned();
                (e.path(), is_dir, name)
            })
            .collect();
        entries.sort_by(|a, b| a.2.cmp(&b.2));

        for (path, is_dir, name) in entries {
            if name.starts_with('.') {
                continue;
            }

            if is_dir {
                let child_prefix = format!("{route_prefix}/{name}");
                self.scan_directory(&path, &child_prefix, refs, seen);
            } else if let Some(stem) = name.strip_suffix(".md") {
                let route = file_route(stem, route_prefix);
                if seen.insert(route.clone()) {
                    refs.push(DocumentRef {
                        route,
                        source: path,
                    });
                } else {
                    tracing::warn!(
                        route = %route,
                        source = %path.display(),
                        "Ignoring document with duplicate route"
                    );
                }
            }
        }
    }
}

/// Route for a markdown file stem inside a directory route.
///
/// `index` names the directory itself; the root directory is `/`.
pub(crate) fn file_route(stem: &str, route_prefix: &str) -> String {
    match (route_prefix.is_empty(), stem) {
        (true, "index") => "/".to_owned(),
        (false, "index") => route_prefix.to_owned(),
        _ => format!("{route_prefix}/{stem}"),
    }
}
