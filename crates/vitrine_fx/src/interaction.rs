//! Hover lift and scroll-scrubbed parallax.

use vitrine_core::Rect;

use crate::animation::{Animation, Easing, ElementStyle};
use crate::viewport::Viewport;

/// Hover tween: grows (and optionally lifts) on enter, returns to rest on leave.
#[derive(Debug, Clone)]
pub struct Hover {
    hover_scale: f32,
    hover_y: f32,
    scale: Animation,
    y: Animation,
    hovered: bool,
}

impl Hover {
    /// Default enlargement.
    pub const DEFAULT_SCALE: f32 = 1.05;
    /// Default tween length.
    pub const DEFAULT_DURATION: f32 = 0.3;

    /// Creates a hover animation with the given target scale and lift.
    #[must_use]
    pub fn new(hover_scale: f32, hover_y: f32, duration: f32) -> Self {
        Self {
            hover_scale,
            hover_y,
            scale: Animation::new(1.0, Easing::Power2Out).with_duration(duration),
            y: Animation::new(0.0, Easing::Power2Out).with_duration(duration),
            hovered: false,
        }
    }

    /// Pointer entered the element.
    pub fn enter(&mut self) {
        self.hovered = true;
        self.scale.set_target(self.hover_scale);
        self.y.set_target(self.hover_y);
    }

    /// Pointer left the element.
    pub fn leave(&mut self) {
        self.hovered = false;
        self.scale.set_target(1.0);
        self.y.set_target(0.0);
    }

    /// Returns true between enter and leave.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Advances by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.scale.update(dt);
        self.y.update(dt);
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> ElementStyle {
        ElementStyle::offset(0.0, self.y.value(), 1.0).with_scale(self.scale.value())
    }
}

impl Default for Hover {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE, 0.0, Self::DEFAULT_DURATION)
    }
}

/// Vertical drift tied to scroll position.
///
/// Progress runs from 0 when the element's top meets the viewport bottom to
/// 1 when its bottom meets the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Drift factor; negative drifts up.
    pub speed: f32,
}

impl Parallax {
    /// Default drift factor.
    pub const DEFAULT_SPEED: f32 = -0.2;

    /// Creates a parallax with the given drift factor.
    #[must_use]
    pub const fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Scroll progress through the element's travel, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(rect: &Rect, viewport: &Viewport) -> f32 {
        let travel = viewport.height + rect.height;
        if travel <= 0.0 {
            return 0.0;
        }
        ((viewport.scroll_y + viewport.height - rect.y) / travel).clamp(0.0, 1.0)
    }

    /// Vertical offset in pixels.
    #[must_use]
    pub fn offset(&self, rect: &Rect, viewport: &Viewport) -> f32 {
        self.speed * 100.0 * Self::progress(rect, viewport)
    }

    /// Style for the current scroll position.
    #[must_use]
    pub fn style(&self, rect: &Rect, viewport: &Viewport) -> ElementStyle {
        ElementStyle::offset(0.0, self.offset(rect, viewport), 1.0)
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}
