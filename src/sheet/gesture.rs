//! Swipe-to-dismiss recognizer for the drawer panel.
//!
//! The recognizer only tracks state and produces the panel's inline style.
//! Scheduling the settle delay is left to the caller.

use std::{fmt, time::Duration};

use dioxus::logger::tracing::debug;

/// Horizontal travel, in logical pixels, past which a release dismisses the panel.
pub const DISMISS_THRESHOLD_PX: f64 = 80.0;

/// Time the commit/cancel animation is given before the gesture settles.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Screen edge the panel is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Limits a raw drag distance to the dismiss direction for this edge.
    fn clamp(self, diff: f64) -> f64 {
        match self {
            Side::Left => diff.min(0.0),
            Side::Right => diff.max(0.0),
        }
    }

    fn off_screen(self) -> &'static str {
        match self {
            Side::Left => "-100%",
            Side::Right => "100%",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    Tracking { start_x: f64, offset: f64 },
    Committing,
    Cancelling,
}

/// What a release decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Commit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transform {
    Resting,
    Dragged(f64),
    Dismissed(Side),
}

/// Inline style for the panel element.
///
/// The default value carries no transform, leaving the slide-in animation to
/// the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelStyle {
    transform: Option<Transform>,
    frozen: bool,
}

impl PanelStyle {
    /// Horizontal offset in pixels while dragging, zero otherwise.
    pub fn offset(&self) -> f64 {
        match self.transform {
            Some(Transform::Dragged(x)) => x,
            _ => 0.0,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        matches!(self.transform, Some(Transform::Dismissed(_)))
    }

    /// Whether CSS transitions are disabled for 1:1 finger tracking.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl fmt::Display for PanelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.transform {
            None => {}
            Some(Transform::Resting) => f.write_str("transform: translateX(0);")?,
            Some(Transform::Dragged(x)) => write!(f, "transform: translateX({x}px);")?,
            Some(Transform::Dismissed(side)) => {
                write!(f, "transform: translateX({});", side.off_screen())?
            }
        }
        if self.frozen {
            f.write_str(" transition: none;")?;
        }
        Ok(())
    }
}

/// Per-panel touch state machine: `Idle -> Tracking -> {Committing, Cancelling} -> Idle`.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    side: Side,
    phase: GesturePhase,
    style: PanelStyle,
}

impl SwipeRecognizer {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            phase: GesturePhase::Idle,
            style: PanelStyle::default(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn style(&self) -> PanelStyle {
        self.style
    }

    /// Begins a session. Ignored unless idle with exactly one contact.
    pub fn touch_start(&mut self, contacts: usize, x: f64) -> bool {
        if contacts != 1 || self.phase != GesturePhase::Idle {
            return false;
        }
        self.phase = GesturePhase::Tracking {
            start_x: x,
            offset: 0.0,
        };
        true
    }

    /// Follows the finger. Returns `false` when no session is active.
    pub fn touch_move(&mut self, x: f64) -> bool {
        let GesturePhase::Tracking { start_x, .. } = self.phase else {
            return false;
        };
        let offset = self.side.clamp(x - start_x);
        self.phase = GesturePhase::Tracking { start_x, offset };
        self.style = PanelStyle {
            transform: Some(Transform::Dragged(offset)),
            frozen: true,
        };
        true
    }

    /// Ends the session and decides between commit and cancel.
    pub fn touch_end(&mut self) -> Option<Release> {
        let GesturePhase::Tracking { offset, .. } = self.phase else {
            return None;
        };
        let release = if offset.abs() > DISMISS_THRESHOLD_PX {
            self.phase = GesturePhase::Committing;
            self.style = PanelStyle {
                transform: Some(Transform::Dismissed(self.side)),
                frozen: false,
            };
            Release::Commit
        } else {
            self.phase = GesturePhase::Cancelling;
            self.style = PanelStyle {
                transform: Some(Transform::Resting),
                frozen: false,
            };
            Release::Cancel
        };
        debug!("swipe released at {offset}px: {release:?}");
        Some(release)
    }

    /// The platform aborted the touch; never dismisses.
    pub fn touch_cancel(&mut self) -> bool {
        let GesturePhase::Tracking { .. } = self.phase else {
            return false;
        };
        self.phase = GesturePhase::Cancelling;
        self.style = PanelStyle {
            transform: Some(Transform::Resting),
            frozen: false,
        };
        true
    }

    /// Returns to idle once the commit/cancel animation has run.
    pub fn settle(&mut self) {
        if matches!(
            self.phase,
            GesturePhase::Committing | GesturePhase::Cancelling
        ) {
            self.phase = GesturePhase::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.style = PanelStyle::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(side: Side, from: f64, to: f64) -> (SwipeRecognizer, Option<Release>) {
        let mut r = SwipeRecognizer::new(side);
        assert!(r.touch_start(1, from));
        assert!(r.touch_move((from + to) / 2.0));
        assert!(r.touch_move(to));
        let release = r.touch_end();
        (r, release)
    }

    #[test]
    fn short_swipe_snaps_back() {
        let (r, release) = swipe(Side::Left, 200.0, 121.0);
        assert_eq!(release, Some(Release::Cancel));
        assert_eq!(r.phase(), GesturePhase::Cancelling);
        assert_eq!(r.style().offset(), 0.0);
        assert!(!r.style().is_frozen());
        assert_eq!(r.style().to_string(), "transform: translateX(0);");
    }

    #[test]
    fn long_swipe_commits_off_screen() {
        let (r, release) = swipe(Side::Left, 200.0, 119.0);
        assert_eq!(release, Some(Release::Commit));
        assert!(r.style().is_dismissed());
        assert_eq!(r.style().to_string(), "transform: translateX(-100%);");
    }

    #[test]
    fn exactly_threshold_does_not_commit() {
        let (_, release) = swipe(Side::Left, 200.0, 120.0);
        assert_eq!(release, Some(Release::Cancel));
    }

    #[test]
    fn drag_tracks_finger_without_transition() {
        let mut r = SwipeRecognizer::new(Side::Left);
        r.touch_start(1, 100.0);
        r.touch_move(58.5);
        assert_eq!(r.style().offset(), -41.5);
        assert!(r.style().is_frozen());
        assert_eq!(
            r.style().to_string(),
            "transform: translateX(-41.5px); transition: none;"
        );
    }

    #[test]
    fn rightward_drag_on_left_panel_stays_at_rest() {
        let mut r = SwipeRecognizer::new(Side::Left);
        r.touch_start(1, 100.0);
        for x in [110.0, 180.0, 260.0, 101.0] {
            r.touch_move(x);
            assert_eq!(r.style().offset(), 0.0);
        }
        assert_eq!(r.touch_end(), Some(Release::Cancel));
    }

    #[test]
    fn right_panel_mirrors_direction() {
        let (r, release) = swipe(Side::Right, 100.0, 190.0);
        assert_eq!(release, Some(Release::Commit));
        assert_eq!(r.style().to_string(), "transform: translateX(100%);");

        let mut r = SwipeRecognizer::new(Side::Right);
        r.touch_start(1, 100.0);
        r.touch_move(10.0);
        assert_eq!(r.style().offset(), 0.0);
    }

    #[test]
    fn events_without_session_are_ignored() {
        let mut r = SwipeRecognizer::new(Side::Left);
        assert!(!r.touch_move(10.0));
        assert_eq!(r.touch_end(), None);
        assert!(!r.touch_cancel());
        assert_eq!(r.phase(), GesturePhase::Idle);
        assert_eq!(r.style(), PanelStyle::default());
    }

    #[test]
    fn multi_touch_start_is_ignored() {
        let mut r = SwipeRecognizer::new(Side::Left);
        assert!(!r.touch_start(2, 10.0));
        assert!(!r.touch_start(0, 10.0));
        assert_eq!(r.phase(), GesturePhase::Idle);
    }

    #[test]
    fn new_session_waits_for_settle() {
        let (mut r, _) = swipe(Side::Left, 200.0, 100.0);
        assert!(!r.touch_start(1, 50.0), "started while committing");

        r.settle();
        assert_eq!(r.phase(), GesturePhase::Idle);
        assert!(r.touch_start(1, 50.0));
    }

    #[test]
    fn touch_cancel_never_dismisses() {
        let mut r = SwipeRecognizer::new(Side::Left);
        r.touch_start(1, 300.0);
        r.touch_move(0.0);
        assert!(r.touch_cancel());
        assert_eq!(r.phase(), GesturePhase::Cancelling);
        assert!(!r.style().is_dismissed());
    }

    #[test]
    fn settle_is_a_no_op_while_tracking() {
        let mut r = SwipeRecognizer::new(Side::Left);
        r.touch_start(1, 300.0);
        r.settle();
        assert!(matches!(r.phase(), GesturePhase::Tracking { .. }));
    }
}
