//! Application frame: sidebar on wide screens, sheet drawer on narrow ones,
//! and a header with the user menu.

use dioxus::prelude::*;

use crate::{
    app_settings::Identity,
    nav::NavItem,
    sheet::dom::{DocumentEvent, DocumentListener, DocumentSignal},
    ui::{
        button::{ButtonSize, ButtonVariant, button_class},
        sheet::{Sheet, SheetClose, SheetContent, SheetHeader, SheetTitle, SheetTrigger, use_sheet},
        sidebar_nav::SidebarNav,
    },
};

const USER_MENU_ID: &str = "shell-user-menu";

pub fn is_dark_theme(theme_label: &str) -> bool {
    theme_label.to_lowercase().contains("dark")
}

/// Accessible name of the theme toggle: it names the mode it switches to.
pub fn theme_toggle_label(theme_label: &str) -> String {
    let target = if is_dark_theme(theme_label) { "light" } else { "dark" };
    format!("Switch to {target} mode")
}

#[component]
pub fn Shell(
    #[props(into)] brand: String,
    identity: Identity,
    #[props(into)] location: String,
    nav_items: Vec<NavItem>,
    on_navigate: Option<EventHandler<String>>,
    #[props(into)] theme_label: String,
    on_toggle_theme: EventHandler<()>,
    notifications: Element,
    assistant: Element,
    on_sign_out: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let drawer = use_sheet(false);

    let on_mobile_nav = {
        let drawer = drawer.clone();
        move |href: String| {
            drawer.close();
            if let Some(handler) = on_navigate {
                handler.call(href);
            }
        }
    };
    let on_desktop_nav = move |href: String| {
        if let Some(handler) = on_navigate {
            handler.call(href);
        }
    };

    rsx! {
        div { class: "shell",
            aside { class: "shell-sidebar",
                div { class: "shell-brand",
                    BrandMark { brand: brand.clone() }
                    span { class: "shell-brand-name", "{brand}" }
                }
                SidebarNav {
                    items: nav_items.clone(),
                    location: location.clone(),
                    on_item_click: on_desktop_nav,
                }
                div { class: "shell-sidebar-footer",
                    ThemeToggle { theme_label: theme_label.clone(), on_toggle: on_toggle_theme }
                }
            }

            Sheet { controller: drawer.clone(),
                SheetContent { class: "shell-drawer",
                    SheetHeader {
                        div { class: "shell-brand",
                            BrandMark { brand: brand.clone() }
                            SheetTitle { "{brand}" }
                        }
                        SheetClose {}
                    }
                    SidebarNav {
                        items: nav_items.clone(),
                        location: location.clone(),
                        on_item_click: on_mobile_nav,
                    }
                    div { class: "drawer-identity",
                        Avatar { identity: identity.clone() }
                        div { class: "drawer-identity-text",
                            p { class: "identity-name", "{identity.display_name}" }
                            if let Some(email) = identity.email.clone() {
                                p { class: "identity-email", "{email}" }
                            }
                        }
                    }
                    div { class: "drawer-footer",
                        ThemeToggle { theme_label: theme_label.clone(), on_toggle: on_toggle_theme }
                    }
                }
            }

            div { class: "shell-main",
                header { class: "shell-header",
                    SheetTrigger {
                        controller: drawer.clone(),
                        class: button_class(ButtonVariant::Ghost, ButtonSize::Icon, "shell-menu-button"),
                        aria_label: "Open navigation menu",
                        span { class: "icon icon-menu", "aria-hidden": "true" }
                    }
                    span { class: "shell-brand-mobile", "{brand}" }
                    div { class: "shell-spacer" }
                    div { class: "shell-actions",
                        {assistant}
                        {notifications}
                        UserMenu { identity: identity.clone(), on_navigate, on_sign_out }
                    }
                }
                main { class: "shell-content",
                    div { class: "shell-content-inner", {children} }
                }
            }
        }
    }
}

#[component]
fn BrandMark(brand: String) -> Element {
    let initial = brand.chars().next().map(String::from).unwrap_or_default();
    rsx! {
        div { class: "brand-mark",
            span { "{initial}" }
        }
    }
}

#[component]
fn Avatar(identity: Identity) -> Element {
    rsx! {
        div { class: "avatar",
            if let Some(url) = identity.avatar_url.clone() {
                img { src: "{url}", alt: "{identity.display_name}" }
            } else {
                div { class: "avatar-initials", "{identity.initials}" }
            }
        }
    }
}

#[component]
fn ThemeToggle(theme_label: String, on_toggle: EventHandler<()>) -> Element {
    let icon = if is_dark_theme(&theme_label) { "icon icon-sun" } else { "icon icon-moon" };
    let aria_label = theme_toggle_label(&theme_label);
    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            "aria-label": "{aria_label}",
            onclick: move |_| on_toggle.call(()),
            span { class: icon, "aria-hidden": "true" }
            span { "{theme_label}" }
        }
    }
}

#[component]
fn UserMenu(
    identity: Identity,
    #[props(!optional)] on_navigate: Option<EventHandler<String>>,
    #[props(!optional)] on_sign_out: Option<EventHandler<()>>,
) -> Element {
    let mut open = use_signal(|| false);
    let expanded = if open() { "true" } else { "false" };
    let chevron = if open() { "chevron open" } else { "chevron" };
    rsx! {
        div { id: USER_MENU_ID, class: "user-menu",
            button {
                r#type: "button",
                class: "user-menu-button",
                "aria-expanded": expanded,
                "aria-haspopup": "true",
                "aria-label": "User menu",
                onclick: move |_| open.toggle(),
                Avatar { identity: identity.clone() }
                span { class: chevron, "aria-hidden": "true" }
            }
            if open() {
                UserMenuDropdown {
                    identity: identity.clone(),
                    on_close: move |_| open.set(false),
                    on_navigate,
                    on_sign_out,
                }
            }
        }
    }
}

/// Mounted only while the menu is open, so its document listeners are too.
#[component]
fn UserMenuDropdown(
    identity: Identity,
    on_close: EventHandler<()>,
    #[props(!optional)] on_navigate: Option<EventHandler<String>>,
    #[props(!optional)] on_sign_out: Option<EventHandler<()>>,
) -> Element {
    use_hook(|| {
        spawn(async move {
            let mut events = DocumentListener::attach(&[
                DocumentEvent::Escape,
                DocumentEvent::OutsidePress {
                    element_id: USER_MENU_ID.to_string(),
                },
            ]);
            while let Some(signal) = events.next().await {
                match signal {
                    DocumentSignal::Escape | DocumentSignal::OutsidePress => on_close.call(()),
                }
            }
        })
    });

    let select = move |href: &'static str| {
        move |e: MouseEvent| {
            e.prevent_default();
            on_close.call(());
            if let Some(handler) = on_navigate {
                handler.call(href.to_string());
            }
        }
    };

    rsx! {
        div { class: "user-menu-dropdown", role: "menu", "aria-orientation": "vertical",
            div { class: "user-menu-identity",
                p { class: "identity-name", "{identity.display_name}" }
                if let Some(email) = identity.email.clone() {
                    p { class: "identity-email", "{email}" }
                }
            }
            div { class: "user-menu-items",
                a { href: "/profile", class: "menu-item", role: "menuitem", onclick: select("/profile"),
                    span { class: "icon icon-user", "aria-hidden": "true" }
                    "Profile"
                }
                a { href: "/settings", class: "menu-item", role: "menuitem", onclick: select("/settings"),
                    span { class: "icon icon-settings", "aria-hidden": "true" }
                    "Settings"
                }
            }
            div { class: "user-menu-items",
                button {
                    r#type: "button",
                    class: "menu-item destructive",
                    role: "menuitem",
                    onclick: move |_| {
                        on_close.call(());
                        if let Some(handler) = on_sign_out {
                            handler.call(());
                        }
                    },
                    span { class: "icon icon-log-out", "aria-hidden": "true" }
                    "Sign out"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_settings::ShellSettings;

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(theme_toggle_label("Dark Mode"), "Switch to light mode");
        assert_eq!(theme_toggle_label("DARK"), "Switch to light mode");
        assert_eq!(theme_toggle_label("Light Mode"), "Switch to dark mode");
        assert_eq!(theme_toggle_label(""), "Switch to dark mode");
    }

    #[component]
    fn Harness(location: String) -> Element {
        let settings = ShellSettings::default();
        rsx! {
            Shell {
                brand: settings.brand,
                identity: settings.identity,
                location,
                nav_items: settings.nav_items,
                theme_label: "Dark Mode",
                on_toggle_theme: move |_| {},
                notifications: rsx! { span { "bell" } },
                assistant: rsx! {},
                p { "page body" }
            }
        }
    }

    fn render(location: &str) -> String {
        let location = location.to_string();
        dioxus_ssr::render_element(rsx! {
            Harness { location }
        })
    }

    #[test]
    fn closed_drawer_is_not_in_the_tree() {
        let html = render("/");
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("shell-drawer"));
        // Only the desktop sidebar carries a current-page marker.
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
    }

    #[test]
    fn header_exposes_menu_controls() {
        let html = render("/worlds");
        assert!(html.contains(r#"aria-label="Open navigation menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"aria-label="Switch to light mode""#));
        assert!(!html.contains("role=\"menu\""));
        assert!(html.contains("page body"));
        assert!(html.contains("bell"));
    }

    #[test]
    fn initials_stand_in_for_missing_avatar() {
        let html = render("/");
        assert!(html.contains("avatar-initials"));
        assert!(html.contains(">AS<"));
    }
}
