// SPDX-License-Identifier: MPL-2.0
//! Vertical swipe interpretation for brightness and volume.
//!
//! A touch sequence starts undetermined and is decided once, on the first
//! move that travels further than the threshold:
//!
//! ```text
//! Undetermined ──(vertical, controls hidden, unlocked)──▶ Vertical
//!      │
//!      └────────(anything else past the threshold)─────▶ Rejected
//! ```
//!
//! A touch that never leaves `Undetermined` is a tap. The side of the screen
//! (left: brightness, right: volume) comes from where the touch started and
//! does not change for the rest of the sequence.

use iced_core::{Point, Size};

/// Decision taken for the current touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// No move has passed the threshold yet.
    Undetermined,
    /// Claimed as a vertical drag.
    Vertical,
    /// Not ours; no brightness/volume change for this touch.
    Rejected,
}

/// Quantity a vertical drag controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Brightness,
    Volume,
}

/// Per-touch state, created on touch start and discarded on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub origin: Point,
    pub start_brightness: f32,
    pub start_volume: f32,
    pub axis: Axis,
}

/// What the surface knows at the time of a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    pub controls_hidden: bool,
    pub locked: bool,
    pub viewport: Size,
    pub brightness: f32,
    pub volume: f32,
}

/// New value for the dragged quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub target: DragTarget,
    pub value: f32,
}

/// How a touch sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Never moved past the threshold.
    Tap,
    /// A claimed drag on the given quantity ended.
    Drag(DragTarget),
    /// Rejected, cancelled before claim, or no touch active.
    Ignored,
}

/// Turns pointer positions into brightness/volume adjustments.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    threshold: f32,
    active: Option<GestureState>,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            active: None,
        }
    }

    /// Starts a touch sequence. Never claims, so taps fall through.
    pub fn touch_start(&mut self, position: Point) {
        self.active = Some(GestureState {
            origin: position,
            start_brightness: 0.0,
            start_volume: 0.0,
            axis: Axis::Undetermined,
        });
    }

    /// Feeds a pointer move and returns the adjustment to apply, if any.
    pub fn touch_move(&mut self, position: Point, ctx: GestureContext) -> Option<Adjustment> {
        let threshold = self.threshold;
        let gesture = self.active.as_mut()?;

        let dx = position.x - gesture.origin.x;
        let dy = position.y - gesture.origin.y;

        if gesture.axis == Axis::Undetermined {
            if dx.abs() <= threshold && dy.abs() <= threshold {
                return None;
            }

            let claimable = ctx.controls_hidden && !ctx.locked;
            if claimable && dy.abs() > threshold && dy.abs() > dx.abs() {
                gesture.axis = Axis::Vertical;
                gesture.start_brightness = ctx.brightness;
                gesture.start_volume = ctx.volume;
                log::debug!("vertical drag claimed at {:?}", gesture.origin);
            } else {
                gesture.axis = Axis::Rejected;
                return None;
            }
        }

        // Locking mid-drag freezes the value where it is
        if gesture.axis != Axis::Vertical || ctx.locked || ctx.viewport.height <= 0.0 {
            return None;
        }

        let target = target_for(gesture.origin, ctx.viewport);
        let start = match target {
            DragTarget::Brightness => gesture.start_brightness,
            DragTarget::Volume => gesture.start_volume,
        };
        // Pointer y grows downward; dragging up raises the value
        let delta = -dy / ctx.viewport.height;

        Some(Adjustment {
            target,
            value: (start + delta).clamp(0.0, 1.0),
        })
    }

    /// Ends the touch sequence.
    pub fn touch_end(&mut self, viewport: Size) -> Release {
        match self.active.take() {
            Some(gesture) => match gesture.axis {
                Axis::Undetermined => Release::Tap,
                Axis::Vertical => Release::Drag(target_for(gesture.origin, viewport)),
                Axis::Rejected => Release::Ignored,
            },
            None => Release::Ignored,
        }
    }

    /// Terminates the touch sequence without a tap.
    pub fn touch_cancel(&mut self, viewport: Size) -> Release {
        match self.touch_end(viewport) {
            Release::Tap => Release::Ignored,
            other => other,
        }
    }

    /// Returns the state of the active touch, if any.
    #[must_use]
    pub fn active(&self) -> Option<&GestureState> {
        self.active.as_ref()
    }

    /// Drops any active touch.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

fn target_for(origin: Point, viewport: Size) -> DragTarget {
    if origin.x < viewport.width / 2.0 {
        DragTarget::Brightness
    } else {
        DragTarget::Volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const VIEWPORT: Size = Size::new(400.0, 800.0);

    fn hidden() -> GestureContext {
        GestureContext {
            controls_hidden: true,
            locked: false,
            viewport: VIEWPORT,
            brightness: 0.5,
            volume: 0.5,
        }
    }

    #[test]
    fn small_motion_is_a_tap() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(100.0, 400.0));
        assert!(gestures
            .touch_move(Point::new(105.0, 408.0), hidden())
            .is_none());
        assert_eq!(gestures.touch_end(VIEWPORT), Release::Tap);
    }

    #[test]
    fn upward_drag_on_left_raises_brightness() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(50.0, 400.0));

        let adj = gestures
            .touch_move(Point::new(52.0, 240.0), hidden())
            .expect("claimed");

        assert_eq!(adj.target, DragTarget::Brightness);
        assert_abs_diff_eq!(adj.value, 0.7, epsilon = F32_EPSILON);
        assert_eq!(gestures.active().map(|g| g.axis), Some(Axis::Vertical));
        assert_eq!(
            gestures.touch_end(VIEWPORT),
            Release::Drag(DragTarget::Brightness)
        );
    }

    #[test]
    fn downward_drag_on_right_lowers_volume_and_clamps() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(300.0, 100.0));

        let adj = gestures
            .touch_move(Point::new(300.0, 900.0), hidden())
            .expect("claimed");

        assert_eq!(adj.target, DragTarget::Volume);
        assert_abs_diff_eq!(adj.value, 0.0);
    }

    #[test]
    fn horizontal_motion_is_rejected_for_the_whole_touch() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(100.0, 400.0));

        assert!(gestures.touch_move(Point::new(130.0, 405.0), hidden()).is_none());
        // Later vertical motion does not revive it
        assert!(gestures.touch_move(Point::new(130.0, 100.0), hidden()).is_none());
        assert_eq!(gestures.active().map(|g| g.axis), Some(Axis::Rejected));
        assert_eq!(gestures.touch_end(VIEWPORT), Release::Ignored);
    }

    #[test]
    fn visible_controls_prevent_claim() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(100.0, 400.0));
        let ctx = GestureContext {
            controls_hidden: false,
            ..hidden()
        };
        assert!(gestures.touch_move(Point::new(100.0, 300.0), ctx).is_none());
        assert_eq!(gestures.touch_end(VIEWPORT), Release::Ignored);
    }

    #[test]
    fn locked_screen_prevents_claim() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(100.0, 400.0));
        let ctx = GestureContext {
            locked: true,
            ..hidden()
        };
        assert!(gestures.touch_move(Point::new(100.0, 300.0), ctx).is_none());
    }

    #[test]
    fn claimed_drag_stops_once_locked() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(100.0, 400.0));
        assert!(gestures.touch_move(Point::new(100.0, 380.0), hidden()).is_some());

        let ctx = GestureContext {
            locked: true,
            ..hidden()
        };
        assert!(gestures.touch_move(Point::new(100.0, 100.0), ctx).is_none());
    }

    #[test]
    fn side_is_fixed_by_origin() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(10.0, 400.0));
        gestures.touch_move(Point::new(12.0, 380.0), hidden());

        // Drift far into the right half
        let adj = gestures
            .touch_move(Point::new(380.0, 320.0), hidden())
            .expect("still dragging");
        assert_eq!(adj.target, DragTarget::Brightness);
    }

    #[test]
    fn start_values_are_snapshotted_at_claim() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(300.0, 400.0));
        gestures.touch_move(Point::new(300.0, 380.0), hidden());

        // Later context changes do not move the baseline
        let ctx = GestureContext {
            volume: 0.9,
            ..hidden()
        };
        let adj = gestures
            .touch_move(Point::new(300.0, 320.0), ctx)
            .expect("dragging");
        assert_abs_diff_eq!(adj.value, 0.6, epsilon = F32_EPSILON);
    }

    #[test]
    fn cancel_never_taps() {
        let mut gestures = GestureInterpreter::new(10.0);
        gestures.touch_start(Point::new(100.0, 400.0));
        assert_eq!(gestures.touch_cancel(VIEWPORT), Release::Ignored);
        assert!(gestures.active().is_none());
    }

    #[test]
    fn move_without_touch_is_ignored() {
        let mut gestures = GestureInterpreter::new(10.0);
        assert!(gestures.touch_move(Point::new(1.0, 1.0), hidden()).is_none());
        assert_eq!(gestures.touch_end(VIEWPORT), Release::Ignored);
    }
}
