//! Composition root wiring the navigation components together.
//!
//! `ConsoleWorkspace` owns the one nav index, the one tab manager, and
//! the search state, and exposes a handler per user-driven event source:
//! sidebar click, tab-bar selection, tab close, search selection, and
//! observed route change. Rendering layers read tab and breadcrumb
//! state through the accessors; they never hold a second copy of it.

use crate::nav_index::{IndexError, NavEntry, NavIndex};
use crate::route_sync::{RouteOutcome, on_route_changed};
use crate::routing::RouteMutator;
use crate::search::SearchNavigator;
use crate::tab::{HOME_TAB_ID, Tab, TabManager};
use console_nav_config::NavConfig;

/// The live navigation state of one console process.
pub struct ConsoleWorkspace {
    index: NavIndex,
    session: TabManager,
    search: SearchNavigator,
}

impl ConsoleWorkspace {
    /// Build the workspace from navigation configuration.
    ///
    /// Compiles the nav tree into the index and seeds the session with
    /// the pinned home tab. Fails only on configuration errors
    /// (duplicate link paths), so startup either succeeds completely or
    /// not at all.
    pub fn new(config: &NavConfig) -> Result<Self, IndexError> {
        let index = NavIndex::build(&config.root_label, &config.tree)?;

        // The home tab points at the configured home destination but
        // keeps its reserved id, so reopening that destination from the
        // tree can never create a colliding second tab.
        let home = match index.lookup(&config.home_path) {
            Some(entry) => Tab::new(
                HOME_TAB_ID,
                entry.label.clone(),
                entry.path.clone(),
                entry.breadcrumbs.clone(),
            ),
            None => Tab::new(
                HOME_TAB_ID,
                config.root_label.clone(),
                config.home_path.clone(),
                vec![config.root_label.clone()],
            ),
        };

        Ok(Self {
            index,
            session: TabManager::new(home),
            search: SearchNavigator::new(),
        })
    }

    /// Handle a sidebar click on a navigation link.
    ///
    /// Opens (or re-activates) the destination's tab, then asks the
    /// router to move. Paths missing from the index are navigated
    /// without tab mutation; they live outside the tab model.
    pub fn handle_sidebar_click(&mut self, path: &str, router: &mut dyn RouteMutator) {
        if let Some(entry) = self.index.lookup(path) {
            self.session.open_tab(Tab::from_entry(entry));
        } else {
            log::warn!("Sidebar click on unindexed path '{}'", path);
        }
        router.navigate(path);
    }

    /// Handle a tab-bar click selecting an open tab.
    pub fn handle_tab_selected(&mut self, id: &str, router: &mut dyn RouteMutator) {
        self.session.switch_to(id);
        if let Some(tab) = self.session.get_tab(id) {
            router.navigate(&tab.path);
        }
    }

    /// Handle a tab-bar close action.
    ///
    /// When the closed tab was the active one, the session picks its
    /// left neighbor and this handler navigates the route there to keep
    /// the visible screen matching the active tab.
    pub fn handle_tab_closed(&mut self, id: &str, router: &mut dyn RouteMutator) {
        let was_active = self.session.active_tab_id() == Some(id);
        if self.session.close_tab(id).is_some()
            && was_active
            && let Some(active) = self.session.active_tab()
        {
            router.navigate(&active.path);
        }
    }

    /// Handle an externally observed route change (back/forward, deep
    /// link, reload, or the eventual callback of a navigation this
    /// workspace itself requested).
    pub fn handle_route_changed(&mut self, current_path: &str) -> RouteOutcome {
        on_route_changed(&mut self.session, &self.index, current_path)
    }

    /// Replace the search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    /// Ranked search results for the current query.
    pub fn search_results(&self) -> Vec<&NavEntry> {
        self.search.results(&self.index)
    }

    /// Select a search result by path, opening its tab and navigating.
    ///
    /// Returns false if the path is no longer in the index (stale
    /// result), in which case nothing changes.
    pub fn select_search_result(&mut self, path: &str, router: &mut dyn RouteMutator) -> bool {
        match self.index.lookup(path) {
            Some(entry) => {
                self.search.select(&mut self.session, entry, router);
                true
            }
            None => false,
        }
    }

    /// Breadcrumb trail of the active tab, for the header display.
    pub fn breadcrumbs(&self) -> &[String] {
        self.session
            .active_tab()
            .map(|tab| tab.breadcrumbs.as_slice())
            .unwrap_or_default()
    }

    /// The navigation index (sidebar rendering, path resolution).
    pub fn index(&self) -> &NavIndex {
        &self.index
    }

    /// The tab session (tab-bar rendering).
    pub fn session(&self) -> &TabManager {
        &self.session
    }

    /// Current search query text.
    pub fn search_query(&self) -> &str {
        self.search.query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RecordingRouter;

    fn workspace() -> ConsoleWorkspace {
        ConsoleWorkspace::new(&NavConfig::default()).unwrap()
    }

    #[test]
    fn starts_with_active_home_tab() {
        let ws = workspace();
        assert_eq!(ws.session().tab_count(), 1);
        let home = ws.session().active_tab().unwrap();
        assert_eq!(home.id, HOME_TAB_ID);
        assert_eq!(home.path, "/dashboard");
        assert_eq!(ws.breadcrumbs(), ["Home", "Dashboard"]);
    }

    #[test]
    fn sidebar_click_opens_tab_and_navigates() {
        let mut ws = workspace();
        let mut router = RecordingRouter::default();

        ws.handle_sidebar_click("/gifts/list", &mut router);

        assert_eq!(ws.session().active_tab_id(), Some("/gifts/list"));
        assert_eq!(router.requests, vec!["/gifts/list"]);
        assert_eq!(ws.breadcrumbs(), ["Home", "Gifts", "Gift List"]);
    }

    #[test]
    fn sidebar_click_then_route_callback_does_not_duplicate() {
        let mut ws = workspace();
        let mut router = RecordingRouter::default();

        ws.handle_sidebar_click("/gifts/list", &mut router);
        let outcome = ws.handle_route_changed("/gifts/list");

        assert_eq!(outcome, RouteOutcome::AlreadyActive);
        assert_eq!(ws.session().tab_count(), 2);
    }

    #[test]
    fn tab_selection_navigates_to_tab_path() {
        let mut ws = workspace();
        let mut router = RecordingRouter::default();
        ws.handle_sidebar_click("/users/list", &mut router);
        router.requests.clear();

        ws.handle_tab_selected(HOME_TAB_ID, &mut router);

        assert_eq!(ws.session().active_tab_id(), Some(HOME_TAB_ID));
        assert_eq!(router.requests, vec!["/dashboard"]);
    }

    #[test]
    fn closing_active_tab_navigates_to_new_active() {
        let mut ws = workspace();
        let mut router = RecordingRouter::default();
        ws.handle_sidebar_click("/users/list", &mut router);
        ws.handle_sidebar_click("/gifts/list", &mut router);
        router.requests.clear();

        ws.handle_tab_closed("/gifts/list", &mut router);

        assert_eq!(ws.session().active_tab_id(), Some("/users/list"));
        assert_eq!(router.requests, vec!["/users/list"]);
    }

    #[test]
    fn closing_inactive_tab_does_not_navigate() {
        let mut ws = workspace();
        let mut router = RecordingRouter::default();
        ws.handle_sidebar_click("/users/list", &mut router);
        ws.handle_sidebar_click("/gifts/list", &mut router);
        router.requests.clear();

        ws.handle_tab_closed("/users/list", &mut router);

        assert_eq!(ws.session().active_tab_id(), Some("/gifts/list"));
        assert!(router.requests.is_empty());
    }

    #[test]
    fn closing_last_tab_is_refused_and_does_not_navigate() {
        let mut ws = workspace();
        let mut router = RecordingRouter::default();

        ws.handle_tab_closed(HOME_TAB_ID, &mut router);

        assert_eq!(ws.session().tab_count(), 1);
        assert!(router.requests.is_empty());
    }

    #[test]
    fn stale_search_result_is_rejected() {
        let mut ws = workspace();
        let mut router = RecordingRouter::default();

        assert!(!ws.select_search_result("/gone", &mut router));
        assert_eq!(ws.session().tab_count(), 1);
        assert!(router.requests.is_empty());
    }
}
