//! Infinite horizontal marquee.
//!
//! The track holds the content twice. Translating it by half its width over
//! one period and wrapping makes the loop seamless. Hovering freezes the
//! playhead where it is.

/// Scroll direction of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeDirection {
    /// Content moves left: offset runs 0 → -50%.
    #[default]
    Left,
    /// Content moves right: offset runs -50% → 0.
    Right,
}

/// A looping marquee track.
#[derive(Debug, Clone)]
pub struct Marquee {
    direction: MarqueeDirection,
    /// Loop length in seconds.
    period: f64,
    /// Time played within the current loop.
    playhead: f64,
    hovered: bool,
    last: Option<f64>,
}

impl Marquee {
    /// Default loop length.
    pub const DEFAULT_PERIOD: f64 = 40.0;

    /// Creates a marquee with a loop of `period` seconds.
    #[must_use]
    pub fn new(direction: MarqueeDirection, period: f64) -> Self {
        Self {
            direction,
            period: if period > 0.0 { period } else { Self::DEFAULT_PERIOD },
            playhead: 0.0,
            hovered: false,
            last: None,
        }
    }

    /// Pauses while hovered.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Returns true while paused by hover.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    /// Advances the playhead to `now`.
    pub fn advance(&mut self, now: f64) {
        let dt = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);
        if !self.hovered {
            self.playhead = (self.playhead + dt) % self.period;
        }
    }

    /// Loop progress in `[0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.playhead / self.period
    }

    /// Track translation as a fraction of the track width.
    #[must_use]
    pub fn offset_fraction(&self) -> f32 {
        let progress = self.progress() as f32;
        match self.direction {
            MarqueeDirection::Left => -0.5 * progress,
            MarqueeDirection::Right => -0.5 + 0.5 * progress,
        }
    }

    /// Track translation in pixels, given the width of one copy of the content.
    #[must_use]
    pub fn offset_px(&self, content_width: f32) -> f32 {
        self.offset_fraction() * content_width * 2.0
    }

    /// Scroll direction.
    #[must_use]
    pub fn direction(&self) -> MarqueeDirection {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_runs_to_minus_half() {
        let mut marquee = Marquee::new(MarqueeDirection::Left, 40.0);
        marquee.advance(0.0);
        assert_eq!(marquee.offset_fraction(), 0.0);
        marquee.advance(20.0);
        assert!((marquee.offset_fraction() + 0.25).abs() < 1e-6);
        assert!((marquee.offset_px(1000.0) + 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_runs_to_zero() {
        let mut marquee = Marquee::new(MarqueeDirection::Right, 40.0);
        marquee.advance(0.0);
        assert!((marquee.offset_fraction() + 0.5).abs() < 1e-6);
        marquee.advance(30.0);
        assert!((marquee.offset_fraction() + 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_wraps_each_period() {
        let mut marquee = Marquee::new(MarqueeDirection::Left, 40.0);
        marquee.advance(0.0);
        marquee.advance(50.0);
        assert!((marquee.progress() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_hover_pauses() {
        let mut marquee = Marquee::new(MarqueeDirection::Left, 40.0);
        marquee.advance(0.0);
        marquee.advance(10.0);
        marquee.set_hovered(true);
        marquee.advance(25.0);
        assert!((marquee.progress() - 0.25).abs() < 1e-9);

        marquee.set_hovered(false);
        marquee.advance(35.0);
        assert!((marquee.progress() - 0.5).abs() < 1e-9);
    }
}
