use dioxus::prelude::*;

use crate::nav::{NavItem, group_items, is_active};

/// Grouped navigation list.
///
/// Clicking an entry never navigates by itself; the href is handed to
/// `on_item_click` and the caller decides what to do.
#[component]
pub fn SidebarNav(
    items: Vec<NavItem>,
    #[props(into)] location: String,
    on_item_click: Option<EventHandler<String>>,
) -> Element {
    let groups = group_items(&items);
    let last = groups.len().saturating_sub(1);
    rsx! {
        nav { class: "sidebar-nav", "aria-label": "Main navigation",
            for (i, group) in groups.into_iter().enumerate() {
                div { key: "{group.section:?}", class: "nav-group",
                    div { class: "nav-group-label",
                        span { {group.label()} }
                    }
                    ul { class: "nav-list", role: "list",
                        for item in group.items.iter() {
                            NavItemLink {
                                key: "{item.href}",
                                active: is_active(&item.href, &location),
                                item: item.clone(),
                                on_click: on_item_click,
                            }
                        }
                    }
                    if i < last {
                        div { class: "nav-separator", "aria-hidden": "true" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItemLink(
    item: NavItem,
    active: bool,
    #[props(!optional)] on_click: Option<EventHandler<String>>,
) -> Element {
    let class = if active { "nav-link active" } else { "nav-link" };
    let current = active.then_some("page");
    let href = item.href.clone();
    rsx! {
        li {
            a {
                href: "{item.href}",
                class,
                "aria-current": current,
                onclick: move |e: MouseEvent| {
                    e.prevent_default();
                    if let Some(handler) = on_click {
                        handler.call(href.clone());
                    }
                },
                span { class: "nav-indicator", "aria-hidden": "true" }
                span { class: "nav-icon", "data-icon": "{item.icon}", "aria-hidden": "true" }
                span { class: "nav-label", "{item.label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_settings::ShellSettings;

    fn render(location: &str) -> String {
        let items = ShellSettings::default().nav_items;
        let location = location.to_string();
        dioxus_ssr::render_element(rsx! {
            SidebarNav { items, location }
        })
    }

    #[test]
    fn marks_only_the_current_section() {
        let html = render("/worlds/42");
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);

        let worlds = html.find(r#"href="/worlds""#).unwrap();
        let guilds = html.find(r#"href="/guilds""#).unwrap();
        let current = html.find(r#"aria-current="page""#).unwrap();
        assert!(worlds < current && current < guilds);
    }

    #[test]
    fn lookalike_path_marks_nothing() {
        let html = render("/worldsextra");
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn groups_render_in_fixed_order() {
        let html = render("/");
        let core = html.find(">Core<").unwrap();
        let game = html.find(">Game<").unwrap();
        let support = html.find(">Support<").unwrap();
        assert!(core < game && game < support);
        assert_eq!(html.matches("nav-separator").count(), 2);
    }
}
