use dioxus::prelude::*;

use crate::{app_settings::ShellSettings, nav::is_active};

/// Heading for a section page: the nav label when the path belongs to a
/// known entry, otherwise the first segment capitalised.
pub fn section_title(settings: &ShellSettings, segments: &[String]) -> String {
    let path = format!("/{}", segments.join("/"));
    let known = settings
        .nav_items
        .iter()
        .filter(|item| item.href != "/")
        .find(|item| is_active(&item.href, &path));
    if let Some(item) = known {
        return item.label.clone();
    }
    let Some(first) = segments.first() else {
        return "Not found".to_string();
    };
    let mut chars = first.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => "Not found".to_string(),
    }
}

/// Placeholder page for every path the shell links to.
#[component]
pub fn Section(segments: Vec<String>) -> Element {
    let settings = use_context::<ShellSettings>();
    let title = section_title(&settings, &segments);
    let detail = segments.get(1).cloned();
    rsx! {
        section { class: "page section",
            div { class: "card",
                h1 { "{title}" }
                if let Some(detail) = detail {
                    p { class: "muted", "Entry {detail}" }
                } else {
                    p { class: "muted", "Nothing here yet." }
                }
            }
        }
    }
}
