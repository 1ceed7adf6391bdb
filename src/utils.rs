//! Small helpers shared by the UI and the sheet core.

use std::time::Duration;

/// Sleeps without blocking the UI thread, on any target the app runs on.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Joins CSS class fragments with single spaces, skipping empty ones.
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_skips_blanks() {
        assert_eq!(class_names(["btn", "", "  ", "btn-ghost "]), "btn btn-ghost");
        assert_eq!(class_names([]), "");
    }
}
