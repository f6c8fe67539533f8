//! Spinning stamp preview.

use kurbo::Point;
use std::f64::consts::TAU;
use std::time::Duration;

/// Default spin rate: one full turn per second.
pub const DEFAULT_TURNS_PER_SECOND: f64 = 1.0;

/// A stamp waiting to be committed while its angle advances with time.
///
/// The angle is a continuous function of the elapsed time, with no snapping.
/// The caller advances it once per frame; it stops when the caller stops.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationAnimation {
    /// Glyph that will be committed.
    pub glyph: String,
    /// Center of the pending stamp.
    pub anchor: Point,
    /// Font size of the pending stamp.
    pub size: f64,
    /// Angle at the moment the spin started.
    pub base_angle: f64,
    /// Spin rate.
    pub turns_per_second: f64,
    elapsed: Duration,
}

impl RotationAnimation {
    pub fn new(glyph: impl Into<String>, anchor: Point, size: f64, base_angle: f64, turns_per_second: f64) -> Self {
        Self {
            glyph: glyph.into(),
            anchor,
            size,
            base_angle,
            turns_per_second,
            elapsed: Duration::ZERO,
        }
    }

    /// Move the clock forward by one frame.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Current angle in radians, wrapped into `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        let turned = TAU * self.turns_per_second * self.elapsed.as_secs_f64();
        (self.base_angle + turned).rem_euclid(TAU)
    }
}
