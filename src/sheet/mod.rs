//! Modal drawer ("sheet") interaction core.
//!
//! The submodules are plain Rust and know nothing about rendering, except
//! [`dom`], which bridges them to the page through `document::eval`.

pub mod dom;
pub mod focus;
pub mod gesture;
pub mod panel;
pub mod scroll_lock;
pub mod state;

pub use gesture::{DISMISS_THRESHOLD_PX, PanelStyle, SETTLE_DELAY, Side};
pub use panel::{PanelDriver, SettleTicket};
pub use state::{SheetController, Subscription};

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("sheet parts must be rendered inside a Sheet or given a controller")]
    OutsideSheet,
    #[error("page scroll is already locked by another overlay")]
    ScrollLocked,
    #[error("script bridge failed: {0}")]
    Dom(String),
}

/// Picks the controller a sheet part should use.
///
/// An explicitly passed controller wins over the one provided by an
/// enclosing `Sheet`. Having neither is a wiring mistake.
pub fn resolve_controller(
    explicit: Option<SheetController>,
    ambient: Option<SheetController>,
) -> Result<SheetController, SheetError> {
    explicit.or(ambient).ok_or(SheetError::OutsideSheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_controller_wins() {
        let explicit = SheetController::new(true);
        let ambient = SheetController::new(false);
        let got = resolve_controller(Some(explicit.clone()), Some(ambient)).unwrap();
        assert_eq!(got, explicit);
    }

    #[test]
    fn falls_back_to_enclosing_sheet() {
        let ambient = SheetController::new(false);
        let got = resolve_controller(None, Some(ambient.clone())).unwrap();
        assert_eq!(got, ambient);
    }

    #[test]
    fn missing_controller_is_a_configuration_error() {
        let err = resolve_controller(None, None).unwrap_err();
        assert!(matches!(err, SheetError::OutsideSheet));
    }
}
