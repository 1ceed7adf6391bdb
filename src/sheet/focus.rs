//! Initial focus placement inside an opened panel.

use async_trait::async_trait;
use serde::Deserialize;

/// The parts of an element that decide whether it can take focus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FocusCandidate {
    pub tag: String,
    #[serde(default)]
    pub has_href: bool,
    #[serde(default)]
    pub tab_index: Option<i32>,
}

impl FocusCandidate {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            has_href: false,
            tab_index: None,
        }
    }

    pub fn with_href(mut self) -> Self {
        self.has_href = true;
        self
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }
}

pub fn is_focusable(c: &FocusCandidate) -> bool {
    let tag = c.tag.to_ascii_lowercase();
    match tag.as_str() {
        "button" | "input" | "select" | "textarea" => true,
        "a" | "area" if c.has_href => true,
        _ => c.tab_index.is_some_and(|i| i >= 0),
    }
}

/// Index of the first focusable element, in document order.
pub fn first_focusable(candidates: &[FocusCandidate]) -> Option<usize> {
    candidates.iter().position(is_focusable)
}

/// The descendants of a panel, as seen by the focus controller.
#[async_trait(?Send)]
pub trait FocusScope {
    /// Every descendant element in document order.
    async fn descendants(&self) -> anyhow::Result<Vec<FocusCandidate>>;

    /// Focuses the descendant at `index` of [`FocusScope::descendants`].
    fn focus(&self, index: usize);
}

/// Moves focus to the first focusable descendant of `scope`.
///
/// Returns `false` and leaves focus alone when there is none.
pub async fn focus_first(scope: &dyn FocusScope) -> anyhow::Result<bool> {
    let candidates = scope.descendants().await?;
    let Some(index) = first_focusable(&candidates) else {
        return Ok(false);
    };
    scope.focus(index);
    Ok(true)
}
