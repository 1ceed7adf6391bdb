//! Input handling for an open sheet panel.
//!
//! [`PanelDriver`] owns the swipe recognizer for one mounted panel and routes
//! every dismissal (Escape, backdrop, swipe commit) to the shared controller.
//! It does not touch the DOM: callers render [`PanelDriver::style`] and run
//! the settle delay themselves.

use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use dioxus::logger::tracing::debug;

use super::{
    SheetController,
    gesture::{PanelStyle, Release, Side, SwipeRecognizer},
};

/// Handle to a pending settle, returned by [`PanelDriver::touch_end`].
///
/// It goes stale when the driver is dropped or reset, and settling with a
/// stale ticket does nothing.
#[derive(Debug, Clone)]
pub struct SettleTicket {
    release: Release,
    generation: u64,
    live: Weak<Cell<u64>>,
}

impl SettleTicket {
    pub fn release(&self) -> Release {
        self.release
    }

    pub fn is_current(&self) -> bool {
        self.live
            .upgrade()
            .is_some_and(|g| g.get() == self.generation)
    }
}

pub struct PanelDriver {
    controller: SheetController,
    gesture: SwipeRecognizer,
    generation: Rc<Cell<u64>>,
}

impl PanelDriver {
    pub fn new(controller: SheetController, side: Side) -> Self {
        Self {
            controller,
            gesture: SwipeRecognizer::new(side),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn style(&self) -> PanelStyle {
        self.gesture.style()
    }

    pub fn gesture(&self) -> &SwipeRecognizer {
        &self.gesture
    }

    /// Closes the sheet. Returns whether this call caused the transition.
    pub fn dismiss(&self) -> bool {
        self.controller.close()
    }

    /// Handles a document key press; only Escape has a meaning.
    pub fn key_down(&self, key: &str) -> bool {
        key == "Escape" && self.dismiss()
    }

    pub fn backdrop_click(&self) -> bool {
        self.dismiss()
    }

    pub fn touch_start(&mut self, contacts: usize, x: f64) -> bool {
        self.gesture.touch_start(contacts, x)
    }

    pub fn touch_move(&mut self, x: f64) -> bool {
        self.gesture.touch_move(x)
    }

    /// Ends the swipe. The returned ticket must be passed to
    /// [`PanelDriver::settle`] after [`SETTLE_DELAY`](super::gesture::SETTLE_DELAY).
    pub fn touch_end(&mut self) -> Option<SettleTicket> {
        let release = self.gesture.touch_end()?;
        Some(self.ticket(release))
    }

    pub fn touch_cancel(&mut self) -> Option<SettleTicket> {
        self.gesture
            .touch_cancel()
            .then(|| self.ticket(Release::Cancel))
    }

    fn ticket(&self, release: Release) -> SettleTicket {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        SettleTicket {
            release,
            generation,
            live: Rc::downgrade(&self.generation),
        }
    }

    /// Finishes the commit/cancel animation.
    ///
    /// A committed swipe closes the sheet here, not at release time.
    pub fn settle(&mut self, ticket: &SettleTicket) -> bool {
        if !ticket.is_current() {
            debug!("dropping stale settle");
            return false;
        }
        self.gesture.settle();
        if ticket.release == Release::Commit {
            self.dismiss();
        }
        true
    }

    /// Abandons any session and invalidates outstanding tickets.
    pub fn reset(&mut self) {
        self.generation.set(self.generation.get() + 1);
        self.gesture.reset();
    }
}
