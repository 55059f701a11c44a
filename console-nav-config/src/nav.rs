//! Navigation tree types and YAML loading.
//!
//! The navigation tree describes every destination in the admin console:
//! top-level sections, nested groups, and the leaf links users can open
//! as workspace tabs. It is supplied once at process start, either from
//! a YAML file or from the built-in defaults, and never mutated.

use crate::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Opaque reference to an icon asset.
///
/// The identity of the icon is meaningful only to the rendering layer;
/// the navigation core never interprets, compares, or derives anything
/// from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconRef(pub String);

/// One node of the navigation tree.
///
/// A `Group` carries child nodes (which may themselves be groups, to
/// arbitrary depth); a `Link` is a leaf destination with a route path.
/// Every `path` among all links reachable from the root must be unique —
/// the index builder in `console-nav` rejects trees that violate this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    /// A labelled group of child nodes.
    Group {
        /// Display label shown in the sidebar and breadcrumb trail.
        label: String,
        /// Optional icon for the sidebar entry.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<IconRef>,
        /// Child nodes, in display order.
        children: Vec<NavNode>,
    },
    /// A leaf destination bound to a route path.
    Link {
        /// Display label shown in the sidebar, tab bar, and breadcrumbs.
        label: String,
        /// Route path, e.g. `/users/list`. Must be unique tree-wide.
        path: String,
        /// Optional icon for the sidebar entry.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<IconRef>,
    },
}

impl NavNode {
    /// Display label of this node, regardless of variant.
    pub fn label(&self) -> &str {
        match self {
            NavNode::Group { label, .. } | NavNode::Link { label, .. } => label,
        }
    }
}

/// Top-level navigation configuration.
///
/// `root_label` anchors every breadcrumb trail (e.g. "Home"); `home_path`
/// is the destination of the pinned home tab; `tree` is the full
/// navigation tree in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Label used as the first element of every breadcrumb trail.
    #[serde(default = "crate::defaults::root_label")]
    pub root_label: String,

    /// Route path of the pinned home tab.
    #[serde(default = "crate::defaults::home_path")]
    pub home_path: String,

    /// The navigation tree, in display order.
    #[serde(default = "crate::defaults::nav_tree")]
    pub tree: Vec<NavNode>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            root_label: crate::defaults::root_label(),
            home_path: crate::defaults::home_path(),
            tree: crate::defaults::nav_tree(),
        }
    }
}

impl NavConfig {
    /// Load the navigation config from the platform config path.
    ///
    /// If no config file exists, the built-in default tree is written to
    /// that path and returned, so a fresh install starts with a working
    /// console layout.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Nav config path: {:?}", config_path);

        if config_path.exists() {
            log::info!("Loading existing nav config from {:?}", config_path);
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Nav config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default nav config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Load the navigation config from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: NavConfig =
            serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the navigation config to the platform config path.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(&config_path, yaml).map_err(ConfigError::Io)?;
        log::info!("Saved nav config to {:?}", config_path);
        Ok(())
    }

    /// Platform path of the navigation config file.
    pub fn config_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("console-nav").join("nav.yaml")
            } else {
                PathBuf::from("nav.yaml")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all platforms: ~/.config/console-nav/nav.yaml
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("console-nav").join("nav.yaml")
            } else {
                PathBuf::from("nav.yaml")
            }
        }
    }

    /// Structural validation of labels and paths.
    ///
    /// Path uniqueness is not checked here — the index builder owns that
    /// invariant because it is the component whose lookups break when two
    /// links collide.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.root_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "root_label must not be empty".to_string(),
            ));
        }
        if !self.home_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "home_path must start with '/': {:?}",
                self.home_path
            )));
        }
        for node in &self.tree {
            validate_node(node)?;
        }
        Ok(())
    }
}

fn validate_node(node: &NavNode) -> Result<(), ConfigError> {
    match node {
        NavNode::Group { label, children, .. } => {
            if label.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "group label must not be empty".to_string(),
                ));
            }
            for child in children {
                validate_node(child)?;
            }
            Ok(())
        }
        NavNode::Link { label, path, .. } => {
            if label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "link label must not be empty (path {:?})",
                    path
                )));
            }
            if !path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "link path must start with '/': {:?} (label {:?})",
                    path, label
                )));
            }
            Ok(())
        }
    }
}
