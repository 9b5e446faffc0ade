//! Tap-versus-drag classification for single-pointer input.
//!
//! A press becomes a tap when it is released without travelling further than
//! the threshold vertically. Horizontal travel is allowed so a slightly
//! sloppy tap still lands on a cell. A second pointer at any point turns the
//! interaction into a drag.

/// Phase of a pointer event, as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
    /// Contacts currently on the surface, including this one
    pub pointer_count: usize,
}

impl PointerEvent {
    pub const fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            x,
            y,
            pointer_count: 1,
        }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    #[must_use]
    pub const fn with_pointers(mut self, pointer_count: usize) -> Self {
        self.pointer_count = pointer_count;
        self
    }
}

/// A qualifying tap, at the release position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer is down and has stayed within the threshold
    Pressed { origin_x: f32, origin_y: f32 },
    /// No longer a tap candidate until the next press
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureClassifier {
    state: GestureState,
    threshold: f32,
}

impl GestureClassifier {
    /// `threshold` is the allowed vertical travel, in the same units as the
    /// event coordinates.
    pub const fn new(threshold: f32) -> Self {
        Self {
            state: GestureState::Idle,
            threshold,
        }
    }

    pub const fn state(&self) -> GestureState {
        self.state
    }

    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feeds one event; returns the tap completed by it, if any.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Tap> {
        let previous = self.state;
        let mut tap = None;

        self.state = match (self.state, event.action) {
            (_, PointerAction::Cancel) => GestureState::Idle,
            (GestureState::Pressed { origin_y, .. }, PointerAction::Up) => {
                if event.pointer_count <= 1 && self.within(origin_y, event.y) {
                    tap = Some(Tap {
                        x: event.x,
                        y: event.y,
                    });
                }
                GestureState::Idle
            }
            (_, PointerAction::Up) => GestureState::Idle,
            _ if event.pointer_count > 1 => GestureState::Dragging,
            (_, PointerAction::Down) => GestureState::Pressed {
                origin_x: event.x,
                origin_y: event.y,
            },
            (GestureState::Pressed { origin_y, .. }, PointerAction::Move)
                if !self.within(origin_y, event.y) =>
            {
                GestureState::Dragging
            }
            (state, PointerAction::Move) => state,
        };

        if previous != self.state {
            tracing::trace!(from = ?previous, to = ?self.state, action = ?event.action, "gesture transition");
        }
        tap
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    fn within(&self, origin_y: f32, y: f32) -> bool {
        (y - origin_y).abs() <= self.threshold
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_CLICK_THRESHOLD_DP)
    }
}
