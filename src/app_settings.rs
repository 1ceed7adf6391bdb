use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

use crate::nav::NavItem;

const SHELL_JSON: &str = include_str!("../assets/shell.json");

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShellSettings {
    pub brand: String,
    pub identity: Identity,
    pub nav_items: Vec<NavItem>,
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Who is signed in, as far as the header and drawer display it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Identity {
    pub display_name: String,
    pub initials: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark Mode",
            ThemeMode::Light => "Light Mode",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl ShellSettings {
    /// Settings bundled with the app, or the built-in defaults if they do not parse.
    pub fn load() -> Self {
        Self::from_json(SHELL_JSON).unwrap_or_else(|e| {
            warn!("Invalid shell settings: {e:?}");
            Self::default()
        })
    }

    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            brand: "Valor".to_string(),
            identity: Identity {
                display_name: "Aldric Stormforge".to_string(),
                initials: "AS".to_string(),
                email: Some("aldric@valorkeep.com".to_string()),
                avatar_url: None,
            },
            nav_items: vec![
                NavItem::new("/", "Home", "home"),
                NavItem::new("/profile", "Profile", "user"),
                NavItem::new("/worlds", "Worlds", "globe"),
                NavItem::new("/guilds", "Guilds", "users"),
                NavItem::new("/wiki", "Wiki", "book-open"),
                NavItem::new("/simulators", "Simulators", "cpu"),
                NavItem::new("/reports", "Reports", "bar-chart"),
                NavItem::new("/support", "Support", "help-circle"),
                NavItem::new("/settings", "Settings", "settings"),
            ],
            theme: ThemeMode::Dark,
        }
    }
}
