//! Workspace tab and navigation state core for the live-console admin UI.
//!
//! This crate keeps a set of open workspace tabs converged with three
//! independently triggered event sources: programmatic navigation
//! (sidebar clicks, search selection), externally observed route changes
//! (back/forward, deep links, reloads), and tab-bar interaction
//! (selecting or closing a tab). The pieces:
//!
//! - [`NavIndex`]: flattened path → entry lookup with precomputed
//!   breadcrumb trails, built once from the configured navigation tree
//! - [`TabManager`]: the ordered open-tab list plus the active selection,
//!   the single writer of tab state
//! - [`route_sync`]: reconciles observed route changes with the tab list
//! - [`SearchNavigator`]: free-text quick-jump over the navigation index
//! - [`ConsoleWorkspace`]: composition root wiring the above together
//!
//! Everything here is synchronous and in-memory. The only asynchronous
//! collaborator is the router itself, reached through the
//! [`RouteMutator`] trait; `route_sync` exists precisely to reconcile
//! once the router's change is observed.

/// Application version (root crate version, for use by embedders).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod nav_index;
pub mod route_sync;
pub mod routing;
pub mod search;
pub mod tab;
pub mod workspace;

pub use nav_index::{IndexError, NavEntry, NavIndex, SEARCH_RESULT_LIMIT};
pub use route_sync::{RouteOutcome, on_route_changed};
pub use routing::RouteMutator;
pub use search::SearchNavigator;
pub use tab::{HOME_TAB_ID, Tab, manager::TabManager};
pub use workspace::ConsoleWorkspace;
