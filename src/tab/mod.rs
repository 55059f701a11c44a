//! Workspace tab types for the admin console.
//!
//! This module provides the core tab infrastructure:
//! - `Tab`: one open workspace entry bound to a route path
//! - `TabManager`: the ordered tab list plus the active selection
//!
//! Tab identity is the route path, except the pinned home tab which uses
//! the reserved id [`HOME_TAB_ID`] so it can never collide with a
//! destination opened from the navigation tree.

pub mod manager;

pub use manager::TabManager;

use crate::nav_index::NavEntry;

/// Reserved id of the pinned home tab.
///
/// The home tab is created at startup and acts as a floor: route sync
/// never closes it, and a user-initiated close is honoured only while
/// other tabs remain.
pub const HOME_TAB_ID: &str = "home";

/// One open workspace tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Stable identity used for selection and removal. Equals `path`
    /// for tabs opened from the navigation tree; [`HOME_TAB_ID`] for
    /// the pinned home tab.
    pub id: String,
    /// Display label shown in the tab bar.
    pub label: String,
    /// Route path this tab is bound to.
    pub path: String,
    /// Breadcrumb trail shown in the header while this tab is active.
    pub breadcrumbs: Vec<String>,
}

impl Tab {
    /// Create a tab with an explicit id.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        breadcrumbs: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            breadcrumbs,
        }
    }

    /// Create a tab for an indexed destination. Identity is the path.
    pub fn from_entry(entry: &NavEntry) -> Self {
        Self {
            id: entry.path.clone(),
            label: entry.label.clone(),
            path: entry.path.clone(),
            breadcrumbs: entry.breadcrumbs.clone(),
        }
    }

    /// Whether this is the pinned home tab.
    pub fn is_home(&self) -> bool {
        self.id == HOME_TAB_ID
    }
}
