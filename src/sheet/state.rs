//! Open/closed state shared by every part of one sheet.
//!
//! A [`SheetController`] is created once by the owner of the drawer and handed
//! to each part that needs it. Every dismissal path ends in [`SheetController::set_open`],
//! so there is exactly one writer and one value.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use dioxus::logger::tracing::debug;

type Listener = Rc<dyn Fn(bool)>;

struct Inner {
    open: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Handle to the open/closed state of one sheet.
///
/// Cloning the handle shares the state. Two handles compare equal when they
/// point at the same sheet.
#[derive(Clone)]
pub struct SheetController {
    inner: Rc<RefCell<Inner>>,
}

impl SheetController {
    pub fn new(open: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                open,
                next_id: 0,
                listeners: vec![],
            })),
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().open
    }

    /// Moves the sheet to `next` and notifies subscribers synchronously.
    ///
    /// Returns `false` without notifying anyone when the sheet is already in
    /// the requested state.
    pub fn set_open(&self, next: bool) -> bool {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.open == next {
                return false;
            }
            inner.open = next;
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        debug!("sheet open -> {next}");
        for listener in listeners {
            // A listener may itself flip the state; the nested call has
            // already delivered the newer value to everyone.
            if self.is_open() != next {
                break;
            }
            listener(next);
        }
        true
    }

    pub fn open(&self) -> bool {
        self.set_open(true)
    }

    pub fn close(&self) -> bool {
        self.set_open(false)
    }

    pub fn toggle(&self) -> bool {
        let next = !self.is_open();
        self.set_open(next)
    }

    /// Registers `listener` for every future transition.
    ///
    /// The listener stays registered for as long as the returned
    /// [`Subscription`] is alive.
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl PartialEq for SheetController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SheetController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("open", &self.is_open())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
