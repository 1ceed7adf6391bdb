//! Page scroll freezing while an overlay is shown.
//!
//! The body is pinned with `position: fixed` and shifted up by the current
//! scroll offset, so the page does not jump and touch devices cannot
//! rubber-band behind the overlay. The [`ScrollLockGuard`] puts everything
//! back when it is dropped, whichever way the overlay goes away.

use std::{cell::Cell, fmt, rc::Rc};

use async_trait::async_trait;
use dioxus::logger::tracing::{info, warn};

use super::SheetError;

/// The page surface a scroll lock acts on.
#[async_trait(?Send)]
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    async fn scroll_y(&self) -> anyhow::Result<f64>;

    /// Pins the body so it renders as if scrolled to `offset_y`.
    fn freeze(&self, offset_y: f64);

    /// Removes every style `freeze` applied.
    fn unfreeze(&self);

    fn scroll_to(&self, y: f64);
}

thread_local! {
    static LOCKED: Cell<bool> = const { Cell::new(false) };
}

#[cfg(test)]
pub(crate) fn is_locked() -> bool {
    LOCKED.with(Cell::get)
}

/// Record of an active lock. Dropping it restores the page.
pub struct ScrollLockGuard {
    previous_scroll_y: f64,
    viewport: Rc<dyn Viewport>,
}

impl ScrollLockGuard {
    /// Freezes the page at `previous_scroll_y`.
    ///
    /// Only one lock may exist at a time.
    pub fn engage(viewport: Rc<dyn Viewport>, previous_scroll_y: f64) -> Result<Self, SheetError> {
        if LOCKED.with(|l| l.replace(true)) {
            warn!("scroll lock requested while already held");
            return Err(SheetError::ScrollLocked);
        }
        viewport.freeze(previous_scroll_y);
        info!("scroll locked at {previous_scroll_y}");
        Ok(Self {
            previous_scroll_y,
            viewport,
        })
    }

    pub fn previous_scroll_y(&self) -> f64 {
        self.previous_scroll_y
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.viewport.unfreeze();
        self.viewport.scroll_to(self.previous_scroll_y);
        LOCKED.with(|l| l.set(false));
        info!("scroll restored to {}", self.previous_scroll_y);
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("previous_scroll_y", &self.previous_scroll_y)
            .finish()
    }
}

/// Reads the current offset and locks the page there.
pub async fn lock_scroll(viewport: Rc<dyn Viewport>) -> anyhow::Result<ScrollLockGuard> {
    let y = viewport.scroll_y().await?;
    Ok(ScrollLockGuard::engage(viewport, y)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;

    /// In-memory page: a scroll offset plus the body's inline `top`.
    #[derive(Default)]
    pub(crate) struct FakeViewport {
        pub scroll: Cell<f64>,
        pub body_top: RefCell<Option<String>>,
        pub frozen: Cell<bool>,
        pub freezes: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl Viewport for FakeViewport {
        async fn scroll_y(&self) -> anyhow::Result<f64> {
            Ok(self.scroll.get())
        }

        fn freeze(&self, offset_y: f64) {
            self.frozen.set(true);
            self.freezes.set(self.freezes.get() + 1);
            *self.body_top.borrow_mut() = Some(format!("-{offset_y}px"));
            // A fixed body reports no window scroll.
            self.scroll.set(0.0);
        }

        fn unfreeze(&self) {
            self.frozen.set(false);
            *self.body_top.borrow_mut() = None;
        }

        fn scroll_to(&self, y: f64) {
            self.scroll.set(y);
        }
    }

    fn page(y: f64) -> Rc<FakeViewport> {
        let v = Rc::new(FakeViewport::default());
        v.scroll.set(y);
        v
    }

    #[test]
    fn round_trip_restores_exact_offset() {
        for y in [0.0, 1.0, 437.0, 1234.5, 98765.4321, f64::MIN_POSITIVE] {
            let viewport = page(y);
            let guard = block_on(lock_scroll(viewport.clone())).unwrap();
            assert!(viewport.frozen.get());
            assert_eq!(viewport.freezes.get(), 1);
            assert_eq!(guard.previous_scroll_y(), y);
            drop(guard);
            assert!(!viewport.frozen.get());
            assert_eq!(viewport.scroll.get().to_bits(), y.to_bits());
        }
    }

    #[test]
    fn freeze_shifts_body_by_offset() {
        let viewport = page(320.0);
        let _guard = block_on(lock_scroll(viewport.clone())).unwrap();
        assert_eq!(viewport.body_top.borrow().as_deref(), Some("-320px"));
    }

    #[test]
    fn only_one_lock_at_a_time() {
        let viewport = page(10.0);
        let first = block_on(lock_scroll(viewport.clone())).unwrap();
        assert!(is_locked());

        let second = block_on(lock_scroll(viewport.clone()));
        assert!(second.is_err());
        // The refused attempt must not disturb the held lock.
        assert!(viewport.frozen.get());

        drop(first);
        assert!(!is_locked());
        assert!(block_on(lock_scroll(viewport)).is_ok());
    }

    #[test]
    fn release_runs_on_unwind() {
        let viewport = page(75.0);
        let v = viewport.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = block_on(lock_scroll(v)).unwrap();
            panic!("teardown");
        }));
        assert!(result.is_err());
        assert!(!viewport.frozen.get());
        assert_eq!(viewport.scroll.get(), 75.0);
        assert!(!is_locked());
    }
}
