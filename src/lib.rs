use dioxus::prelude::*;

pub mod app_settings;
pub mod nav;
pub mod sheet;
pub mod ui;
mod utils;

use app_settings::{ShellSettings, ThemeMode};
use ui::{
    button::{Button, ButtonSize, ButtonVariant},
    home::Home,
    section::Section,
    shell::Shell,
};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let settings = use_context::<ShellSettings>();
    use_context_provider(|| Signal::new(settings.theme));
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Section { segments: Vec<String> },
}

/// Shared layout component: every page renders inside the shell.
#[component]
fn Layout() -> Element {
    let settings = use_context::<ShellSettings>();
    let mut theme = use_context::<Signal<ThemeMode>>();
    let location = use_route::<Route>().to_string();
    let nav = navigator();
    let mode = theme();
    let theme_class = mode.class();

    rsx! {
        div { class: "app {theme_class}",
            Shell {
                brand: settings.brand.clone(),
                identity: settings.identity.clone(),
                location,
                nav_items: settings.nav_items.clone(),
                on_navigate: move |href: String| {
                    let _ = nav.push(href);
                },
                theme_label: mode.label(),
                on_toggle_theme: move |_| theme.set(mode.toggled()),
                notifications: rsx! {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Notifications",
                        span { class: "icon icon-bell", "aria-hidden": "true" }
                    }
                },
                assistant: rsx! {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Open assistant",
                        span { class: "icon icon-sparkles", "aria-hidden": "true" }
                    }
                },
                Outlet::<Route> {}
            }
        }
    }
}
