use dioxus::{logger::tracing::Level, prelude::*};

use valor_shell::{App, app_settings::ShellSettings};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    LaunchBuilder::new()
        .with_context(ShellSettings::load())
        .launch(App)
}
