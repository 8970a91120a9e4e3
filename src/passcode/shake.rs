//! Shake effect parameters and motion.

use std::f32::consts::TAU;
use std::time::Duration;

pub const DEFAULT_SHAKE_COUNT: u32 = 3;
pub const DEFAULT_SHAKE_DURATION: Duration = Duration::from_millis(100);
pub const DEFAULT_SHAKE_TRANSLATION: f32 = 30.0;

/// Pause after the last oscillation before the widget resets.
pub const SHAKE_SETTLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeParams {
    /// Number of full left-right oscillations.
    pub count: u32,
    /// Length of one oscillation.
    pub duration: Duration,
    /// Peak horizontal displacement, in layout units.
    pub translation: f32,
}

impl Default for ShakeParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_SHAKE_COUNT,
            duration: DEFAULT_SHAKE_DURATION,
            translation: DEFAULT_SHAKE_TRANSLATION,
        }
    }
}

impl ShakeParams {
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_translation(mut self, translation: f32) -> Self {
        self.translation = translation;
        self
    }

    /// Time spent oscillating.
    pub fn motion_duration(&self) -> Duration {
        self.duration.saturating_mul(self.count)
    }

    /// Time from start until the widget resets.
    pub fn total_duration(&self) -> Duration {
        self.motion_duration().saturating_add(SHAKE_SETTLE_DELAY)
    }

    /// Horizontal displacement `elapsed` into the effect.
    ///
    /// Starts and ends at rest, swinging to `±translation` once per
    /// oscillation.
    pub fn offset_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.motion_duration() {
            return 0.0;
        }
        let phase = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.translation * (TAU * phase).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_total_includes_settle() {
        let params = ShakeParams::default();
        assert_eq!(params.motion_duration(), Duration::from_millis(300));
        assert_eq!(params.total_duration(), Duration::from_millis(800));
    }

    #[test]
    fn custom_params_scale_total() {
        let params = ShakeParams::default()
            .with_count(5)
            .with_duration(Duration::from_millis(40));
        assert_eq!(params.total_duration(), Duration::from_millis(700));
    }

    #[test]
    fn offset_peaks_at_quarter_oscillation() {
        let params = ShakeParams::default();
        let offset = params.offset_at(Duration::from_millis(25));
        assert!((offset - 30.0).abs() < 0.01, "offset was {offset}");

        let offset = params.offset_at(Duration::from_millis(75));
        assert!((offset + 30.0).abs() < 0.01, "offset was {offset}");
    }

    #[test]
    fn offset_rests_after_motion() {
        let params = ShakeParams::default().with_translation(12.0);
        assert_eq!(params.offset_at(Duration::from_millis(300)), 0.0);
        assert_eq!(params.offset_at(Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn zero_duration_never_moves() {
        let params = ShakeParams::default().with_duration(Duration::ZERO);
        assert_eq!(params.offset_at(Duration::ZERO), 0.0);
        assert_eq!(params.total_duration(), SHAKE_SETTLE_DELAY);
    }
}
