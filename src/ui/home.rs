//! Landing dashboard shown at `/`.

use dioxus::prelude::*;

use crate::{
    app_settings::ShellSettings,
    ui::button::{Button, ButtonSize, ButtonVariant},
};

#[derive(Debug, Clone, PartialEq)]
struct Stat {
    label: &'static str,
    value: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { label: "Active worlds", value: "3" },
    Stat { label: "Guild members", value: "128" },
    Stat { label: "Open reports", value: "2" },
];

/// First word of the display name, used in the greeting.
pub fn greeting_name(display_name: &str) -> &str {
    display_name.split_whitespace().next().unwrap_or("adventurer")
}

#[component]
pub fn Home() -> Element {
    let settings = use_context::<ShellSettings>();
    let name = greeting_name(&settings.identity.display_name).to_string();
    let nav = navigator();
    rsx! {
        section { class: "page home",
            div { class: "card welcome",
                h1 { "Welcome back, {name}" }
                p { class: "muted", "Here is what changed in {settings.brand} since your last visit." }
                div { class: "card-actions",
                    Button {
                        onclick: move |_| {
                            let _ = nav.push("/worlds");
                        },
                        "Browse worlds"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        onclick: move |_| {
                            let _ = nav.push("/reports");
                        },
                        "View reports"
                    }
                }
            }
            ul { class: "stats", role: "list",
                for stat in STATS.iter() {
                    li { key: "{stat.label}", class: "card stat",
                        span { class: "stat-value", "{stat.value}" }
                        span { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_first_name() {
        assert_eq!(greeting_name("Aldric Stormwind"), "Aldric");
        assert_eq!(greeting_name("  Mira "), "Mira");
        assert_eq!(greeting_name(""), "adventurer");
    }
}
