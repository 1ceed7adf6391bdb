use dioxus::prelude::*;

use crate::utils::class_names;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Ghost,
    Outline,
    Destructive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    /// Square, sized for a 44px touch target.
    Icon,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Destructive => "btn-destructive",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    class_names(["btn", variant.class(), size.class(), extra])
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(into, default)] class: String,
    #[props(into, default)] aria_label: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = button_class(variant, size, &class);
    let label = (!aria_label.is_empty()).then_some(aria_label);
    rsx! {
        button {
            r#type: "button",
            class,
            "aria-label": label,
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_classes() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), ""),
            "btn btn-default btn-md"
        );
    }

    #[test]
    fn icon_ghost_with_extra_class() {
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Icon, "shell-menu-button"),
            "btn btn-ghost btn-icon shell-menu-button"
        );
    }

    #[test]
    fn renders_accessible_label() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Outline, aria_label: "Notifications", "Bell" }
        });
        assert!(html.contains(r#"aria-label="Notifications""#));
        assert!(html.contains("btn-outline"));
    }
}
