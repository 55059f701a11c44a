//! Navigation tree configuration for the live-console admin UI.
//!
//! This crate provides the static navigation data consumed by the
//! `console-nav` state machine. It includes:
//!
//! - Navigation tree node types (`NavNode`, `IconRef`)
//! - Top-level navigation configuration (`NavConfig`)
//! - YAML loading and saving with platform config paths
//! - The built-in default navigation tree for the admin console
//!
//! The navigation tree is read-only configuration: it is loaded once at
//! process start and never mutated at runtime. Session state (which tabs
//! are open, which is active) lives in `console-nav`, not here.

pub mod defaults;
pub mod error;
pub mod nav;

// Re-export main types for convenience
pub use error::ConfigError;
pub use nav::{IconRef, NavConfig, NavNode};
