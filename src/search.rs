//! Free-text quick-jump over the navigation index.
//!
//! Holds the query state for the header search box. Results come from
//! [`NavIndex::search`]; selecting a result opens (or re-activates) the
//! destination's tab and then asks the router to move. The tab is made
//! active *before* the route change is issued so that when the route
//! observer later reports the change, reconciliation sees the matching
//! tab already active and performs no duplicate insertion.

use crate::nav_index::{NavEntry, NavIndex};
use crate::routing::RouteMutator;
use crate::tab::{Tab, TabManager};

/// Query state and selection behavior for the navigation search box.
#[derive(Debug, Default)]
pub struct SearchNavigator {
    query: String,
}

impl SearchNavigator {
    /// Create an empty search navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Ranked results for the current query.
    pub fn results<'a>(&self, index: &'a NavIndex) -> Vec<&'a NavEntry> {
        index.search(&self.query)
    }

    /// Open the selected destination and navigate to it.
    ///
    /// Opens (or re-activates) the tab first, then issues the route
    /// change, then clears the query. The ordering is load-bearing: the
    /// tab must be active before the router's change propagates back
    /// through route sync.
    pub fn select(
        &mut self,
        session: &mut TabManager,
        entry: &NavEntry,
        router: &mut dyn RouteMutator,
    ) {
        log::debug!("Search selected '{}' ({})", entry.label, entry.path);
        session.open_tab(Tab::from_entry(entry));
        router.navigate(&entry.path);
        self.query.clear();
    }
}
