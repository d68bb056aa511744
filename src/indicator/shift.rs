// SPDX-License-Identifier: MPL-2.0
//! Eased offset interpolation for window shifts.
//!
//! A shift is purely cosmetic: the dot window commits its final logical
//! state synchronously and this animation only describes where the drawn
//! row of dots sits between the old and new offset. Starting a new shift
//! replaces any in-flight one (last-writer-wins, no queueing).

use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// How long a window shift takes to settle.
pub const SHIFT_DURATION: Duration = Duration::from_millis(120);

/// Time-based interpolation between two offsets, in abstract offset units
/// (for the dot window, one unit is one small-dot step).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl OffsetAnimation {
    /// Starts an animation at `now` running for [`SHIFT_DURATION`].
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        Self::with_duration(from, to, now, SHIFT_DURATION)
    }

    pub fn with_duration(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    /// The offset this animation settles at.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Samples the eased offset at `now`, clamped to the target once the
    /// duration has elapsed.
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Accelerate/decelerate easing: slow at both ends, fastest in the middle.
fn ease_in_out(t: f32) -> f32 {
    0.5 - (PI * t).cos() * 0.5
}
