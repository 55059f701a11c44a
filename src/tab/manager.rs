//! Tab manager for coordinating open workspace tabs.

use super::Tab;

/// Manages the ordered list of open workspace tabs and the active
/// selection.
///
/// This is the single writer of tab state: sidebar clicks, search
/// selection, tab-bar interaction, and route sync all mutate tabs
/// through the operations here, so there is exactly one code path that
/// can grow the tab list and the active id always refers to a tab that
/// exists.
pub struct TabManager {
    /// All open tabs, in insertion order.
    tabs: Vec<Tab>,
    /// Id of the currently active tab.
    active_tab_id: Option<String>,
}

impl TabManager {
    /// Create a tab manager holding a single active home tab.
    pub fn new(home: Tab) -> Self {
        let active = home.id.clone();
        Self {
            tabs: vec![home],
            active_tab_id: Some(active),
        }
    }

    /// Open a tab and make it active (idempotent upsert).
    ///
    /// If a tab with the same id already exists, its label, path, and
    /// breadcrumbs are replaced in place and its position is unchanged.
    /// Otherwise the tab is appended at the end of the list. Either way
    /// the tab ends up active. This is the only insertion point into
    /// the tab list.
    pub fn open_tab(&mut self, tab: Tab) {
        let id = tab.id.clone();
        if let Some(existing) = self.tabs.iter_mut().find(|t| t.id == id) {
            existing.label = tab.label;
            existing.path = tab.path;
            existing.breadcrumbs = tab.breadcrumbs;
            log::debug!("Refreshed existing tab '{}'", id);
        } else {
            self.tabs.push(tab);
            log::info!("Opened tab '{}' (total: {})", id, self.tabs.len());
        }
        self.active_tab_id = Some(id);
    }

    /// Switch to a tab by id. No-op if the id is unknown.
    ///
    /// Never alters tab order.
    pub fn switch_to(&mut self, id: &str) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active_tab_id = Some(id.to_string());
            log::debug!("Switched to tab '{}'", id);
        }
    }

    /// Switch to a tab by 1-based index (keyboard shortcut affordance).
    pub fn switch_to_index(&mut self, index: usize) {
        if index > 0 && index <= self.tabs.len() {
            let id = self.tabs[index - 1].id.clone();
            self.switch_to(&id);
        }
    }

    /// Close a tab by id, returning the removed tab.
    ///
    /// If the closed tab was active, the tab immediately to its left
    /// becomes active (clamped to the first remaining tab when the
    /// closed tab was leftmost); closing an inactive tab leaves the
    /// active selection untouched. Closing the last remaining tab, or
    /// an unknown id, is a no-op returning `None` — there is always at
    /// least one tab open.
    ///
    /// The caller is responsible for navigating the route to the newly
    /// active tab's path afterwards; the manager performs no routing.
    pub fn close_tab(&mut self, id: &str) -> Option<Tab> {
        if self.tabs.len() == 1 {
            log::debug!("Ignoring close of last remaining tab '{}'", id);
            return None;
        }
        let idx = self.tabs.iter().position(|t| t.id == id)?;

        let removed = self.tabs.remove(idx);
        log::info!("Closed tab '{}' (index {})", id, idx);

        if self.active_tab_id.as_deref() == Some(id) {
            // Left neighbor, clamped to the first remaining tab.
            let new_idx = idx.saturating_sub(1);
            self.active_tab_id = Some(self.tabs[new_idx].id.clone());
            log::debug!(
                "Active tab closed; switched to '{}'",
                self.tabs[new_idx].id
            );
        }
        Some(removed)
    }

    /// Get a reference to the active tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_deref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    /// Get the active tab id.
    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// Get all tabs as a slice, in insertion order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get a tab by id.
    pub fn get_tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Find a tab by route path.
    ///
    /// Identity is usually the path, but the home tab is addressed by
    /// its reserved id while still owning a route, so path lookups scan
    /// the list rather than going through ids.
    pub fn find_by_path(&self, path: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.path == path)
    }

    /// Number of open tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Whether more than one tab is open (close affordances enabled).
    pub fn has_multiple_tabs(&self) -> bool {
        self.tabs.len() > 1
    }
}
