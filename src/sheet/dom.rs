//! Page-side effects of the sheet, run through `document::eval`.
//!
//! Works the same under the web and desktop renderers, since both evaluate
//! the scripts in the page hosting the app.

use async_trait::async_trait;
use dioxus::{
    document::{self, Eval},
    logger::tracing::warn,
};
use serde::Deserialize;

use super::{
    SheetError,
    focus::{FocusCandidate, FocusScope},
    scroll_lock::Viewport,
};

fn run(script: &str) {
    // Fire and forget; the script runs as soon as it is handed over.
    let _ = document::eval(script);
}

/// The browser window and `document.body`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomViewport;

#[async_trait(?Send)]
impl Viewport for DomViewport {
    async fn scroll_y(&self) -> anyhow::Result<f64> {
        let y = document::eval("return window.scrollY;")
            .join::<f64>()
            .await
            .map_err(|e| SheetError::Dom(format!("{e:?}")))?;
        Ok(y)
    }

    fn freeze(&self, offset_y: f64) {
        run(&format!(
            r#"const s = document.body.style;
            s.overflow = "hidden";
            s.position = "fixed";
            s.width = "100%";
            s.top = "-{offset_y}px";"#
        ));
    }

    fn unfreeze(&self) {
        run(r#"const s = document.body.style;
            s.overflow = "";
            s.position = "";
            s.width = "";
            s.top = "";"#);
    }

    fn scroll_to(&self, y: f64) {
        run(&format!("window.scrollTo(0, {y});"));
    }
}

/// Descendants of the element with id `panel_id`.
#[derive(Debug, Clone)]
pub struct PanelFocusScope {
    panel_id: String,
}

impl PanelFocusScope {
    pub fn new(panel_id: impl Into<String>) -> Self {
        Self {
            panel_id: panel_id.into(),
        }
    }

    fn id_literal(&self) -> String {
        serde_json::to_string(&self.panel_id).unwrap_or_else(|_| "\"\"".to_string())
    }
}

/// Attribute the scan writes on each descendant so a later focus call hits the
/// element that was scanned, even if the panel changed in between.
const FOCUS_SLOT_ATTR: &str = "data-focus-slot";

fn scan_script(id: &str) -> String {
    format!(
        r#"const panel = document.getElementById({id});
        if (!panel) {{ return []; }}
        return Array.from(panel.querySelectorAll("*"), (el, i) => {{
            el.setAttribute("{FOCUS_SLOT_ATTR}", String(i));
            const raw = el.getAttribute("tabindex");
            const n = raw === null ? NaN : parseInt(raw, 10);
            return {{
                tag: el.tagName.toLowerCase(),
                has_href: el.hasAttribute("href"),
                tab_index: Number.isNaN(n) ? null : n,
            }};
        }});"#
    )
}

fn focus_script(id: &str, index: usize) -> String {
    format!(
        r#"const panel = document.getElementById({id});
        const el = panel && panel.querySelector('[{FOCUS_SLOT_ATTR}="{index}"]');
        if (el) {{ el.focus(); }}"#
    )
}

#[async_trait(?Send)]
impl FocusScope for PanelFocusScope {
    async fn descendants(&self) -> anyhow::Result<Vec<FocusCandidate>> {
        let candidates = document::eval(&scan_script(&self.id_literal()))
            .join::<Vec<FocusCandidate>>()
            .await
            .map_err(|e| SheetError::Dom(format!("{e:?}")))?;
        Ok(candidates)
    }

    fn focus(&self, index: usize) {
        run(&focus_script(&self.id_literal(), index));
    }
}

/// A document-level event a [`DocumentListener`] can watch for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// Escape pressed anywhere in the document.
    Escape,
    /// Mouse pressed outside the element with this id.
    OutsidePress { element_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSignal {
    Escape,
    OutsidePress,
}

/// Builds the script behind a [`DocumentListener`].
///
/// The script attaches one handler per event, then waits for any message
/// from Rust and removes them all.
pub fn listener_script(events: &[DocumentEvent]) -> String {
    let mut script = String::from(
        "const detach = [];\n\
         const on = (type, fn) => {\n\
         document.addEventListener(type, fn);\n\
         detach.push(() => document.removeEventListener(type, fn));\n\
         };\n",
    );
    for event in events {
        match event {
            DocumentEvent::Escape => script.push_str(
                "on(\"keydown\", (e) => { if (e.key === \"Escape\") { dioxus.send(\"escape\"); } });\n",
            ),
            DocumentEvent::OutsidePress { element_id } => {
                let id = serde_json::to_string(element_id).unwrap_or_else(|_| "\"\"".to_string());
                script.push_str(&format!(
                    "on(\"mousedown\", (e) => {{ const el = document.getElementById({id}); \
                     if (el && !el.contains(e.target)) {{ dioxus.send(\"outside_press\"); }} }});\n"
                ));
            }
        }
    }
    script.push_str("await dioxus.recv();\ndetach.forEach((off) => off());\n");
    script
}

/// Document listeners that live exactly as long as this value.
///
/// Dropping it, including by cancelling the task that owns it, detaches
/// every handler.
pub struct DocumentListener {
    eval: Eval,
}

impl DocumentListener {
    pub fn attach(events: &[DocumentEvent]) -> Self {
        Self {
            eval: document::eval(&listener_script(events)),
        }
    }

    /// Waits for the next matching event. `None` once the bridge is gone.
    pub async fn next(&mut self) -> Option<DocumentSignal> {
        match self.eval.recv::<DocumentSignal>().await {
            Ok(signal) => Some(signal),
            Err(e) => {
                warn!("document listener stopped: {e:?}");
                None
            }
        }
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.eval.send("detach");
    }
}
