//! Coyote-time jump buffering
//!
//! A jump press is remembered with its timestamp and honored when it lands
//! within `tolerance` seconds of the last grounded tick, in either order:
//! pressed just after running off a ledge, or just before touching down.
//! A consumed press is cleared so it fires at most once.

use serde::{Deserialize, Serialize};

/// Press/grounded timestamps for one actor (seconds on the actor's clock)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpBuffer {
    tolerance: f32,
    last_grounded: Option<f64>,
    last_pressed: Option<f64>,
}

impl JumpBuffer {
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance,
            last_grounded: None,
            last_pressed: None,
        }
    }

    #[inline]
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn last_grounded(&self) -> Option<f64> {
        self.last_grounded
    }

    pub fn last_pressed(&self) -> Option<f64> {
        self.last_pressed
    }

    pub fn record_grounded(&mut self, now: f64) {
        self.last_grounded = Some(now);
    }

    pub fn record_press(&mut self, now: f64) {
        self.last_pressed = Some(now);
    }

    /// Drop any pending press
    pub fn clear(&mut self) {
        self.last_pressed = None;
    }

    /// Check the pending press against the last grounded time.
    ///
    /// Returns true (and clears the press) when the gap is within tolerance.
    /// A press older than the window is discarded.
    pub fn try_consume(&mut self, now: f64) -> bool {
        let Some(pressed) = self.last_pressed else {
            return false;
        };
        let tolerance = f64::from(self.tolerance);

        if let Some(grounded) = self.last_grounded {
            let gap = (grounded - pressed).abs();
            if gap <= tolerance {
                if gap > 0.0 {
                    log::debug!("Coyote jump ({:.0} ms off the ground)", gap * 1000.0);
                }
                self.last_pressed = None;
                return true;
            }
        }

        if now - pressed > tolerance {
            self.last_pressed = None;
        }
        false
    }
}
