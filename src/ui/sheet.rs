//! Drawer components built on [`crate::sheet`].
//!
//! The owner creates a controller with [`use_sheet`] and hands it to
//! [`Sheet`]. Parts rendered inside the `Sheet` find it on their own; parts
//! rendered elsewhere (a header trigger, say) take it as a prop.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use dioxus::{core::Task, logger::tracing::warn, prelude::*};

use crate::{
    sheet::{
        PanelDriver, SETTLE_DELAY, SettleTicket, SheetController, SheetError, Side,
        dom::{DocumentEvent, DocumentListener, DomViewport, PanelFocusScope},
        focus::focus_first,
        resolve_controller,
        scroll_lock::{ScrollLockGuard, Viewport, lock_scroll},
        state::Subscription,
    },
    utils::{class_names, sleep},
};

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(0);

/// Creates the controller for a sheet owned by the calling component.
pub fn use_sheet(initial_open: bool) -> SheetController {
    use_hook(|| SheetController::new(initial_open))
}

/// Open state of `controller`. The caller re-renders on every transition.
///
/// Passing a different controller on a later render moves the subscription
/// over to it.
pub fn use_sheet_open(controller: &SheetController) -> bool {
    let revision = use_signal(|| 0u64);
    let slot: Rc<RefCell<Option<(SheetController, Subscription)>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let stale = slot
        .borrow()
        .as_ref()
        .is_none_or(|(current, _)| current != controller);
    if stale {
        let subscription = controller.subscribe(move |_| {
            let mut revision = revision;
            *revision.write() += 1;
        });
        *slot.borrow_mut() = Some((controller.clone(), subscription));
    }
    let _ = revision();
    controller.is_open()
}

/// Page surface an open sheet locks. Provide one as context to replace the
/// browser window.
#[derive(Clone)]
pub struct SheetViewport(pub Rc<dyn Viewport>);

fn use_sheet_viewport() -> Rc<dyn Viewport> {
    match try_use_context::<SheetViewport>() {
        Some(SheetViewport(viewport)) => viewport,
        None => Rc::new(DomViewport),
    }
}

fn use_sheet_controller(explicit: Option<SheetController>) -> Result<SheetController, SheetError> {
    let ambient = try_use_context::<SheetController>();
    resolve_controller(explicit, ambient)
}

/// Makes `controller` available to the sheet parts among `children`.
#[component]
pub fn Sheet(controller: SheetController, children: Element) -> Element {
    use_context_provider(|| controller.clone());
    rsx! {
        {children}
    }
}

#[component]
pub fn SheetTrigger(
    controller: Option<SheetController>,
    #[props(into, default)] class: String,
    #[props(into, default)] aria_label: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let controller = use_sheet_controller(controller)?;
    let label = (!aria_label.is_empty()).then_some(aria_label);
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "aria-label": label,
            "aria-haspopup": "dialog",
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
                controller.open();
            },
            {children}
        }
    }
}

/// Backdrop and panel of the sheet. Nothing is mounted while it is closed.
#[component]
pub fn SheetContent(
    controller: Option<SheetController>,
    #[props(default)] side: Side,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let controller = use_sheet_controller(controller)?;
    if !use_sheet_open(&controller) {
        return rsx! {};
    }
    rsx! {
        SheetPanel { controller, side, class, {children} }
    }
}

/// Lives exactly as long as the sheet is open: the scroll lock, the Escape
/// listener and any pending settle are tied to this scope.
#[component]
fn SheetPanel(controller: SheetController, side: Side, class: String, children: Element) -> Element {
    let panel_id = use_hook(|| format!("sheet-panel-{}", NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed)));
    let driver = use_hook(|| Rc::new(RefCell::new(PanelDriver::new(controller.clone(), side))));
    let mut style = use_signal(|| driver.borrow().style());
    let pending: Rc<Cell<Option<Task>>> = use_hook(|| Rc::new(Cell::new(None)));
    let scroll_lock: Rc<RefCell<Option<ScrollLockGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));
    let viewport = use_sheet_viewport();

    use_hook(|| {
        let slot = scroll_lock.clone();
        spawn(async move {
            match lock_scroll(viewport).await {
                Ok(guard) => *slot.borrow_mut() = Some(guard),
                Err(e) => warn!("Could not lock page scroll: {e:?}"),
            }
        })
    });

    use_hook(|| {
        let driver = Rc::downgrade(&driver);
        spawn(async move {
            let mut keys = DocumentListener::attach(&[DocumentEvent::Escape]);
            while keys.next().await.is_some() {
                if let Some(driver) = driver.upgrade() {
                    driver.borrow().key_down("Escape");
                }
            }
        })
    });

    use_drop({
        let driver = driver.clone();
        let pending = pending.clone();
        let scroll_lock = scroll_lock.clone();
        move || {
            if let Some(task) = pending.take() {
                task.cancel();
            }
            driver.borrow_mut().reset();
            scroll_lock.borrow_mut().take();
        }
    });

    let schedule_settle = {
        let driver = driver.clone();
        let pending = pending.clone();
        move |ticket: SettleTicket| {
            let weak = Rc::downgrade(&driver);
            let task = spawn(async move {
                let mut style = style;
                sleep(SETTLE_DELAY).await;
                let Some(driver) = weak.upgrade() else {
                    return;
                };
                let mut driver = driver.borrow_mut();
                if driver.settle(&ticket) {
                    style.set(driver.style());
                }
            });
            if let Some(previous) = pending.replace(Some(task)) {
                previous.cancel();
            }
        }
    };

    let side_class = format!("sheet-panel-{side}");
    let dragging = if style.read().is_frozen() { "sheet-panel-dragging" } else { "" };
    let panel_class = class_names(["sheet-panel", side_class.as_str(), dragging, class.as_str()]);
    let panel_style = style.read().to_string();
    let focus_scope = PanelFocusScope::new(panel_id.clone());

    rsx! {
        div { class: "sheet-root", role: "dialog", "aria-modal": "true",
            div {
                class: "sheet-backdrop",
                "aria-hidden": "true",
                onclick: {
                    let driver = driver.clone();
                    move |_| {
                        driver.borrow().backdrop_click();
                    }
                },
            }
            div {
                id: "{panel_id}",
                class: "{panel_class}",
                style: "{panel_style}",
                onmounted: move |_| {
                    let scope = focus_scope.clone();
                    spawn(async move {
                        if let Err(e) = focus_first(&scope).await {
                            warn!("Could not focus sheet content: {e:?}");
                        }
                    });
                },
                ontouchstart: {
                    let driver = driver.clone();
                    move |e: TouchEvent| {
                        let touches = e.touches();
                        if let Some(first) = touches.first() {
                            driver.borrow_mut().touch_start(touches.len(), first.client_coordinates().x);
                        }
                    }
                },
                ontouchmove: {
                    let driver = driver.clone();
                    move |e: TouchEvent| {
                        let Some(first) = e.touches().into_iter().next() else {
                            return;
                        };
                        let mut driver = driver.borrow_mut();
                        if driver.touch_move(first.client_coordinates().x) {
                            style.set(driver.style());
                        }
                    }
                },
                ontouchend: {
                    let driver = driver.clone();
                    let schedule_settle = schedule_settle.clone();
                    move |_: TouchEvent| {
                        let ticket = {
                            let mut driver = driver.borrow_mut();
                            let ticket = driver.touch_end();
                            style.set(driver.style());
                            ticket
                        };
                        if let Some(ticket) = ticket {
                            schedule_settle(ticket);
                        }
                    }
                },
                ontouchcancel: {
                    let driver = driver.clone();
                    move |_: TouchEvent| {
                        let ticket = {
                            let mut driver = driver.borrow_mut();
                            let ticket = driver.touch_cancel();
                            style.set(driver.style());
                            ticket
                        };
                        if let Some(ticket) = ticket {
                            schedule_settle(ticket);
                        }
                    }
                },
                {children}
            }
        }
    }
}

#[component]
pub fn SheetHeader(#[props(into, default)] class: String, children: Element) -> Element {
    let class = class_names(["sheet-header", class.as_str()]);
    rsx! {
        div { class, {children} }
    }
}

#[component]
pub fn SheetTitle(#[props(into, default)] class: String, children: Element) -> Element {
    let class = class_names(["sheet-title", class.as_str()]);
    rsx! {
        h2 { class, {children} }
    }
}

/// Close button with a glyph and a screen-reader label.
#[component]
pub fn SheetClose(
    controller: Option<SheetController>,
    #[props(into, default)] class: String,
    #[props(into, default = "Close".to_string())] label: String,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let controller = use_sheet_controller(controller)?;
    let class = class_names(["sheet-close", class.as_str()]);
    rsx! {
        button {
            r#type: "button",
            class,
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
                controller.close();
            },
            span { class: "sheet-close-icon", "aria-hidden": "true", "×" }
            span { class: "sr-only", "{label}" }
        }
    }
}
