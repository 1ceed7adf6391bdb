//! Navigation entries and their grouping in the sidebar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
    /// Icon name; drawing it is the stylesheet's business.
    pub icon: String,
}

impl NavItem {
    pub fn new(href: &str, label: &str, icon: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Fixed sidebar sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NavSection {
    Core,
    Game,
    Support,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [NavSection::Core, NavSection::Game, NavSection::Support];

    /// Section a path belongs to. Anything unlisted is support.
    pub fn of(href: &str) -> Self {
        match href {
            "/" | "/profile" => NavSection::Core,
            "/worlds" | "/guilds" | "/wiki" | "/simulators" => NavSection::Game,
            _ => NavSection::Support,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Core => "Core",
            NavSection::Game => "Game",
            NavSection::Support => "Support",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub section: NavSection,
    pub items: Vec<NavItem>,
}

impl NavGroup {
    pub fn label(&self) -> &'static str {
        self.section.label()
    }
}

/// Splits `items` into sections, keeping input order within each one and
/// leaving out empty sections.
pub fn group_items(items: &[NavItem]) -> Vec<NavGroup> {
    NavSection::ALL
        .into_iter()
        .map(|section| NavGroup {
            section,
            items: items
                .iter()
                .filter(|i| NavSection::of(&i.href) == section)
                .cloned()
                .collect(),
        })
        .filter(|g| !g.items.is_empty())
        .collect()
}

/// Whether `href` is the current page or one of its ancestors.
///
/// The root only matches itself; other entries match on whole path segments,
/// so `/worlds` is active at `/worlds/42` but not at `/worldsextra`.
pub fn is_active(href: &str, location: &str) -> bool {
    if href == "/" {
        return location == "/";
    }
    match location.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(hrefs: &[&str]) -> Vec<NavItem> {
        hrefs.iter().map(|h| NavItem::new(h, h, "dot")).collect()
    }

    fn hrefs(group: &NavGroup) -> Vec<&str> {
        group.items.iter().map(|i| i.href.as_str()).collect()
    }

    #[test]
    fn groups_default_navigation() {
        let groups = group_items(&items(&[
            "/",
            "/profile",
            "/worlds",
            "/guilds",
            "/wiki",
            "/simulators",
            "/reports",
            "/support",
            "/settings",
        ]));
        let labels: Vec<_> = groups.iter().map(NavGroup::label).collect();
        assert_eq!(labels, ["Core", "Game", "Support"]);
        assert_eq!(hrefs(&groups[0]), ["/", "/profile"]);
        assert_eq!(hrefs(&groups[1]), ["/worlds", "/guilds", "/wiki", "/simulators"]);
        assert_eq!(hrefs(&groups[2]), ["/reports", "/support", "/settings"]);
    }

    #[test]
    fn group_order_ignores_input_order() {
        let groups = group_items(&items(&["/settings", "/wiki", "/profile"]));
        let labels: Vec<_> = groups.iter().map(NavGroup::label).collect();
        assert_eq!(labels, ["Core", "Game", "Support"]);
    }

    #[test]
    fn empty_groups_are_omitted() {
        let groups = group_items(&items(&["/worlds", "/help"]));
        let sections: Vec<_> = groups.iter().map(|g| g.section).collect();
        assert_eq!(sections, [NavSection::Game, NavSection::Support]);
        assert!(group_items(&[]).is_empty());
    }

    #[test]
    fn active_on_exact_and_nested_paths() {
        assert!(is_active("/worlds", "/worlds"));
        assert!(is_active("/worlds", "/worlds/42"));
        assert!(!is_active("/guilds", "/worlds/42"));
    }

    #[test]
    fn bare_prefix_is_not_active() {
        assert!(!is_active("/worlds", "/worldsextra"));
        assert!(!is_active("/worlds", "/worldsx"));
        assert!(!is_active("/worlds/42", "/worlds"));
    }

    #[test]
    fn root_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/worlds"));
    }
}
