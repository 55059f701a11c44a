//! Default values for the navigation configuration.
//!
//! The free functions here are wired up as `#[serde(default = "...")]`
//! attributes on `NavConfig` fields, and together they form the built-in
//! console layout used when no config file exists yet.

use crate::nav::NavNode;

/// Label anchoring every breadcrumb trail.
pub fn root_label() -> String {
    "Home".to_string()
}

/// Route path of the pinned home tab.
pub fn home_path() -> String {
    "/dashboard".to_string()
}

fn link(label: &str, path: &str) -> NavNode {
    NavNode::Link {
        label: label.to_string(),
        path: path.to_string(),
        icon: None,
    }
}

fn group(label: &str, children: Vec<NavNode>) -> NavNode {
    NavNode::Group {
        label: label.to_string(),
        icon: None,
        children,
    }
}

/// The built-in navigation tree for the admin console.
///
/// Sections mirror the management areas of the platform: content,
/// virtual gifts, live rooms, users, growth (levels and tasks), and
/// mobile app configuration.
pub fn nav_tree() -> Vec<NavNode> {
    vec![
        link("Dashboard", "/dashboard"),
        group(
            "Content",
            vec![
                link("Articles", "/content/articles"),
                link("Article Review", "/content/articles/review"),
                link("Banners", "/content/banners"),
            ],
        ),
        group(
            "Gifts",
            vec![
                link("Gift List", "/gifts/list"),
                link("Gift Categories", "/gifts/categories"),
            ],
        ),
        group(
            "Rooms",
            vec![
                link("Room List", "/rooms/list"),
                link("Room Reports", "/rooms/reports"),
            ],
        ),
        group(
            "Users",
            vec![
                link("User List", "/users/list"),
                link("User Levels", "/users/levels"),
                group(
                    "Moderation",
                    vec![
                        link("Banned Users", "/users/moderation/banned"),
                        link("Mute Records", "/users/moderation/mutes"),
                    ],
                ),
            ],
        ),
        group(
            "Growth",
            vec![
                link("Level Config", "/growth/levels"),
                link("Task List", "/growth/tasks"),
                link("Task Rewards", "/growth/tasks/rewards"),
            ],
        ),
        group(
            "App",
            vec![
                link("Mobile Config", "/app/mobile-config"),
                link("Version Management", "/app/versions"),
            ],
        ),
    ]
}
