//! Easing curves and interpolated values.
//!
//! Reveals and the intro timeline use power ease-outs (fast start, soft
//! landing). Hover and glow transitions use [`Animation`], a single value
//! that retargets smoothly from wherever it currently is.

use serde::Deserialize;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (marquee, scrubbed parallax).
    Linear,
    /// Quadratic ease-out: `1 - (1-t)^2`.
    #[default]
    Power2Out,
    /// Cubic ease-out: `1 - (1-t)^3`.
    Power3Out,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(2),
            Self::Power3Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Visual state of an element: translation, opacity and scale.
///
/// Rest state is [`ElementStyle::REST`]; hosts render an element without a
/// style entry at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    /// Horizontal translation in pixels.
    pub x: f32,
    /// Vertical translation in pixels.
    pub y: f32,
    /// Opacity (0-1).
    pub opacity: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl ElementStyle {
    /// Untranslated, fully opaque, unscaled.
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Rest state with the given opacity and offsets.
    #[must_use]
    pub const fn offset(x: f32, y: f32, opacity: f32) -> Self {
        Self {
            x,
            y,
            opacity,
            scale: 1.0,
        }
    }

    /// Returns a copy with a different scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Interpolates every channel towards `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: vitrine_core::lerp(self.x, other.x, t),
            y: vitrine_core::lerp(self.y, other.y, t),
            opacity: vitrine_core::lerp(self.opacity, other.opacity, t),
            scale: vitrine_core::lerp(self.scale, other.scale, t),
        }
    }

    /// Returns true if the style is indistinguishable from rest.
    #[must_use]
    pub fn is_rest(&self) -> bool {
        const EPS: f32 = 1e-4;
        self.x.abs() < EPS
            && self.y.abs() < EPS
            && (self.opacity - 1.0).abs() < EPS
            && (self.scale - 1.0).abs() < EPS
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::REST
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration (CSS-style 0.3s transition).
    pub const DEFAULT_DURATION: f32 = 0.3;

    /// Creates a new animation at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Creates an animation with custom duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the value the animation is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, starting animation from current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.progress = 1.0;
    }

    /// Updates the animation.
    ///
    /// `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }

        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::Power2Out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::Power2Out, Easing::Power3Out] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_power3_out_front_loaded() {
        // Half way through, a cubic ease-out has covered 87.5%
        assert!((Easing::Power3Out.apply(0.5) - 0.875).abs() < 1e-6);
        assert!(Easing::Power3Out.apply(0.5) > Easing::Power2Out.apply(0.5));
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, Easing::Power2Out);
        anim.set_target(100.0);

        for _ in 0..20 {
            anim.update(0.016);
        }

        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_style_lerp() {
        let from = ElementStyle::offset(0.0, 40.0, 0.0).with_scale(0.95);
        let mid = from.lerp(ElementStyle::REST, 0.5);
        assert!((mid.y - 20.0).abs() < 1e-6);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.scale - 0.975).abs() < 1e-6);
        assert!(from.lerp(ElementStyle::REST, 1.0).is_rest());
    }
}
