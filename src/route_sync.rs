//! Reconciliation of externally observed route changes with tab state.
//!
//! Route changes can originate outside the tab bar entirely: browser
//! back/forward, a deep link, or a reload. This module folds each
//! observed change back into the tab manager so the tab list, the
//! active selection, and the current route stay converged. It is also
//! what breaks the feedback loop "tab click → route change →
//! route-change handler → tab mutation": navigations the tab system
//! itself triggered arrive here with the matching tab already active
//! and short-circuit to a no-op.

use crate::nav_index::NavIndex;
use crate::tab::{Tab, TabManager};

/// What a route-change reconciliation did to the tab session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The active tab already owns this path; nothing changed.
    AlreadyActive,
    /// An existing tab owns this path and was made active.
    Activated,
    /// The path resolved in the nav index and a new tab was opened.
    Opened,
    /// The path is outside the navigation tree; tab state untouched.
    OutsideTree,
}

/// Reconcile an observed route change with the tab session.
///
/// 1. If the active tab already owns `current_path`, do nothing.
/// 2. Else if any open tab owns the path, switch to it.
/// 3. Else resolve the path in the nav index and open a tab for it;
///    paths the index does not know (login screens and the like) are
///    deliberately outside the tab model and leave state untouched.
pub fn on_route_changed(
    session: &mut TabManager,
    index: &NavIndex,
    current_path: &str,
) -> RouteOutcome {
    if session
        .active_tab()
        .is_some_and(|tab| tab.path == current_path)
    {
        log::debug!("Route '{}' already active; no-op", current_path);
        return RouteOutcome::AlreadyActive;
    }

    if let Some(existing) = session.find_by_path(current_path) {
        let id = existing.id.clone();
        session.switch_to(&id);
        return RouteOutcome::Activated;
    }

    match index.lookup(current_path) {
        Some(entry) => {
            session.open_tab(Tab::from_entry(entry));
            RouteOutcome::Opened
        }
        None => {
            log::debug!(
                "Route '{}' is outside the navigation tree; ignoring",
                current_path
            );
            RouteOutcome::OutsideTree
        }
    }
}
