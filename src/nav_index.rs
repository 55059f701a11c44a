//! Flattened navigation index with breadcrumb trails and search.
//!
//! The index is derived once from the configured navigation tree by a
//! single depth-first traversal. Each link becomes a [`NavEntry`] whose
//! breadcrumb trail runs from the configured root label down to the
//! link's own label. Lookup by path is O(1); search is a synchronous
//! substring scan capped at [`SEARCH_RESULT_LIMIT`] results.

use console_nav_config::NavNode;
use std::collections::HashMap;
use thiserror::Error;

/// Maximum number of entries returned by [`NavIndex::search`].
///
/// Search is a local, synchronous scan feeding a quick-jump menu; the
/// cap bounds UI cost without any need for pagination.
pub const SEARCH_RESULT_LIMIT: usize = 12;

/// Errors raised while building the navigation index.
///
/// These indicate configuration mistakes and are surfaced at startup,
/// never mid-session: the navigation tree is fixed data, so a tree that
/// builds once builds forever.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Two links in the navigation tree share the same route path.
    ///
    /// A silent overwrite would make one of the two destinations
    /// permanently unreachable by lookup, so this fails the build.
    #[error("duplicate nav path '{path}': used by both '{existing_label}' and '{label}'")]
    DuplicatePath {
        /// The colliding route path.
        path: String,
        /// Label of the link indexed first.
        existing_label: String,
        /// Label of the link that collided with it.
        label: String,
    },
}

/// One destination in the flattened index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Route path, unique across the index.
    pub path: String,
    /// Display label of the destination itself.
    pub label: String,
    /// Ancestor labels from the root label down to `label` inclusive.
    pub breadcrumbs: Vec<String>,
}

/// Path-keyed lookup over the navigation tree.
///
/// Entries are stored in depth-first traversal order (the order the
/// sidebar displays them), with a side map for O(1) path lookup.
#[derive(Debug)]
pub struct NavIndex {
    entries: Vec<NavEntry>,
    by_path: HashMap<String, usize>,
}

impl NavIndex {
    /// Build the index from a navigation tree.
    ///
    /// `root_label` anchors every breadcrumb trail. Fails if two links
    /// share a route path.
    pub fn build(root_label: &str, tree: &[NavNode]) -> Result<Self, IndexError> {
        let mut index = NavIndex {
            entries: Vec::new(),
            by_path: HashMap::new(),
        };
        let mut trail = vec![root_label.to_string()];
        for node in tree {
            index.walk(node, &mut trail)?;
        }
        log::info!(
            "Built nav index: {} destinations under root '{}'",
            index.entries.len(),
            root_label
        );
        Ok(index)
    }

    fn walk(&mut self, node: &NavNode, trail: &mut Vec<String>) -> Result<(), IndexError> {
        match node {
            NavNode::Link { label, path, .. } => {
                if let Some(&existing) = self.by_path.get(path) {
                    return Err(IndexError::DuplicatePath {
                        path: path.clone(),
                        existing_label: self.entries[existing].label.clone(),
                        label: label.clone(),
                    });
                }
                let mut breadcrumbs = trail.clone();
                breadcrumbs.push(label.clone());
                self.by_path.insert(path.clone(), self.entries.len());
                self.entries.push(NavEntry {
                    path: path.clone(),
                    label: label.clone(),
                    breadcrumbs,
                });
                Ok(())
            }
            NavNode::Group { label, children, .. } => {
                trail.push(label.clone());
                for child in children {
                    self.walk(child, trail)?;
                }
                trail.pop();
                Ok(())
            }
        }
    }

    /// Look up a destination by route path.
    pub fn lookup(&self, path: &str) -> Option<&NavEntry> {
        self.by_path.get(path).map(|&i| &self.entries[i])
    }

    /// All entries in traversal (display) order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Number of indexed destinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index contains no destinations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring search over labels, paths, and joined
    /// breadcrumb trails, in that priority order.
    ///
    /// An empty query returns the first [`SEARCH_RESULT_LIMIT`] entries
    /// in traversal order, so a search box doubles as a quick-jump menu.
    pub fn search(&self, query: &str) -> Vec<&NavEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.entries.iter().take(SEARCH_RESULT_LIMIT).collect();
        }

        let mut results: Vec<&NavEntry> = Vec::new();
        // Three passes in priority order; an entry matched by an earlier
        // pass is skipped by the later ones.
        let passes: [fn(&NavEntry, &str) -> bool; 3] = [
            |e, q| e.label.to_lowercase().contains(q),
            |e, q| e.path.to_lowercase().contains(q),
            |e, q| e.breadcrumbs.join(" / ").to_lowercase().contains(q),
        ];
        for matches in passes {
            for entry in &self.entries {
                if results.len() >= SEARCH_RESULT_LIMIT {
                    return results;
                }
                if matches(entry, &query) && !results.iter().any(|r| r.path == entry.path) {
                    results.push(entry);
                }
            }
        }
        results
    }
}
