//! Swipe classification.
//!
//! A drag shorter than the threshold is ignored. Longer drags resolve to the
//! dominant axis: horizontal when |dx| > |dy|, vertical otherwise. Screen
//! coordinates grow right and down, so positive dx is right and positive dy
//! is down.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, SWIPE_MIN_DISTANCE};

/// Classify a drag vector as a swipe direction.
///
/// # Examples
///
/// ```
/// use tui_2048_input::classify_swipe;
/// use tui_2048_input::types::Direction;
///
/// assert_eq!(classify_swipe(80.0, 10.0, 50.0), Some(Direction::Right));
/// assert_eq!(classify_swipe(0.0, -60.0, 50.0), Some(Direction::Up));
/// assert_eq!(classify_swipe(20.0, 20.0, 50.0), None);
/// ```
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    let abs_dx = dx.abs();
    let abs_dy = dy.abs();

    if abs_dx.max(abs_dy) <= threshold {
        return None;
    }

    if abs_dx > abs_dy {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

/// Turns left-button press/release pairs into swipes.
///
/// Terminal cells are roughly twice as tall as they are wide, so vertical
/// distance is doubled before classification.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: f32,
}

impl SwipeTracker {
    /// Create a tracker with a threshold measured in terminal columns
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed a mouse event; returns a direction when a drag completes.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                let dx = f32::from(event.column) - f32::from(x0);
                let dy = (f32::from(event.row) - f32::from(y0)) * 2.0;
                classify_swipe(dx, dy, self.threshold)
            }
            _ => None,
        }
    }

    /// Forget a drag in progress
    pub fn reset(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_MIN_DISTANCE)
    }
}
