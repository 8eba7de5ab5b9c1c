//! Pointer-following glow.
//!
//! A soft radial glow and a bright dot track the pointer. Both grow while
//! the pointer is over an interactive region. Hidden until the first pointer
//! move and after the pointer leaves the document. Touch devices never get
//! a glow.
//!
//! The pointer is viewport-relative while interactive regions are document
//! rects, so hit tests add the current scroll offset to the pointer and are
//! redone on every scroll.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{EventBus, EventKind, HostEvent, Rect, Subscription, Vec2};

use crate::animation::{Animation, Easing};
use crate::style::Color;

/// Glow diameter at rest.
pub const GLOW_SIZE: f32 = 250.0;
/// Glow diameter over an interactive region.
pub const GLOW_SIZE_HOVER: f32 = 350.0;
/// Dot diameter at rest.
pub const DOT_SIZE: f32 = 8.0;
/// Dot diameter over an interactive region.
pub const DOT_SIZE_HOVER: f32 = 14.0;

/// What the host should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowFrame {
    /// Center, in viewport pixels.
    pub position: Vec2,
    /// Glow diameter.
    pub glow_size: f32,
    /// Color at the glow center.
    pub glow_color: Color,
    /// Dot diameter.
    pub dot_size: f32,
    /// Dot color.
    pub dot_color: Color,
    /// Opacity of both layers.
    pub opacity: f32,
}

/// Cursor glow state.
pub struct CursorGlow {
    enabled: bool,
    /// Last viewport position, `None` before the first move.
    position: Option<Vec2>,
    scroll_y: f32,
    hovering: bool,
    interactive: Vec<Rect>,
    glow_size: Animation,
    glow_alpha: Animation,
    dot_size: Animation,
    opacity: Animation,
}

impl CursorGlow {
    /// Creates the glow; `touch_device` disables it for good.
    #[must_use]
    pub fn new(touch_device: bool) -> Self {
        if touch_device {
            tracing::debug!("cursor glow disabled on touch device");
        }
        Self {
            enabled: !touch_device,
            position: None,
            scroll_y: 0.0,
            hovering: false,
            interactive: Vec::new(),
            glow_size: Animation::new(GLOW_SIZE, Easing::Power2Out),
            glow_alpha: Animation::new(0.1, Easing::Power2Out),
            dot_size: Animation::new(DOT_SIZE, Easing::Power2Out).with_duration(0.2),
            opacity: Animation::new(0.0, Easing::Power2Out),
        }
    }

    /// Returns false on touch devices.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replaces the interactive regions (links, buttons, inputs, tech cards),
    /// in document coordinates.
    pub fn set_interactive_regions(&mut self, regions: Vec<Rect>) {
        self.interactive = regions;
        self.refresh_hover();
    }

    /// Returns true while the pointer is over an interactive region.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Feeds a host event.
    pub fn handle(&mut self, event: &HostEvent) {
        if !self.enabled {
            return;
        }
        match *event {
            HostEvent::PointerMove { x, y } => {
                self.position = Some(Vec2::new(x, y));
                self.opacity.set_target(1.0);
                self.refresh_hover();
            }
            HostEvent::PointerEnter => self.opacity.set_target(1.0),
            HostEvent::PointerLeave => self.opacity.set_target(0.0),
            HostEvent::Scroll { y } => {
                self.scroll_y = y;
                self.refresh_hover();
            }
            HostEvent::Resize { .. } => {}
        }
    }

    fn refresh_hover(&mut self) {
        let hovering = self.position.is_some_and(|p| {
            let pointer = Vec2::new(p.x, p.y + self.scroll_y);
            self.interactive.iter().any(|r| r.contains(pointer))
        });
        if hovering == self.hovering {
            return;
        }
        self.hovering = hovering;
        if hovering {
            self.glow_size.set_target(GLOW_SIZE_HOVER);
            self.glow_alpha.set_target(0.2);
            self.dot_size.set_target(DOT_SIZE_HOVER);
        } else {
            self.glow_size.set_target(GLOW_SIZE);
            self.glow_alpha.set_target(0.1);
            self.dot_size.set_target(DOT_SIZE);
        }
    }

    /// Advances the transitions by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.glow_size.update(dt);
        self.glow_alpha.update(dt);
        self.dot_size.update(dt);
        self.opacity.update(dt);
    }

    /// Current frame, `None` on touch devices.
    #[must_use]
    pub fn frame(&self) -> Option<GlowFrame> {
        if !self.enabled {
            return None;
        }
        Some(GlowFrame {
            position: self.position.unwrap_or(Vec2::ZERO),
            glow_size: self.glow_size.value(),
            glow_color: Color::ACCENT.with_alpha(self.glow_alpha.value()),
            dot_size: self.dot_size.value(),
            dot_color: Color::ACCENT,
            opacity: self.opacity.value(),
        })
    }

    /// Subscribes a shared glow to pointer events on `bus`.
    ///
    /// Nothing is subscribed on touch devices.
    #[must_use]
    pub fn listen(glow: &Arc<Mutex<Self>>, bus: &EventBus) -> Vec<Subscription> {
        if !glow.lock().enabled {
            return Vec::new();
        }
        [
            EventKind::PointerMove,
            EventKind::PointerEnter,
            EventKind::PointerLeave,
            EventKind::Scroll,
        ]
            .into_iter()
            .map(|kind| {
                let glow = Arc::clone(glow);
                bus.subscribe(kind, move |event| glow.lock().handle(event))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(glow: &mut CursorGlow) {
        for _ in 0..30 {
            glow.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_hidden_until_first_move() {
        let mut glow = CursorGlow::new(false);
        settle(&mut glow);
        assert_eq!(glow.frame().unwrap().opacity, 0.0);

        glow.handle(&HostEvent::PointerMove { x: 10.0, y: 20.0 });
        settle(&mut glow);
        let frame = glow.frame().unwrap();
        assert!((frame.opacity - 1.0).abs() < 1e-4);
        assert_eq!(frame.position, Vec2::new(10.0, 20.0));

        glow.handle(&HostEvent::PointerLeave);
        settle(&mut glow);
        assert!(glow.frame().unwrap().opacity.abs() < 1e-4);
    }

    #[test]
    fn test_grows_over_interactive() {
        let mut glow = CursorGlow::new(false);
        glow.set_interactive_regions(vec![Rect::new(0.0, 0.0, 100.0, 40.0)]);

        glow.handle(&HostEvent::PointerMove { x: 50.0, y: 20.0 });
        assert!(glow.is_hovering());
        settle(&mut glow);
        let frame = glow.frame().unwrap();
        assert!((frame.glow_size - GLOW_SIZE_HOVER).abs() < 1e-3);
        assert!((frame.dot_size - DOT_SIZE_HOVER).abs() < 1e-3);

        glow.handle(&HostEvent::PointerMove { x: 500.0, y: 500.0 });
        settle(&mut glow);
        assert!((glow.frame().unwrap().glow_size - GLOW_SIZE).abs() < 1e-3);
    }

    #[test]
    fn test_touch_device_never_shows() {
        let glow = Arc::new(Mutex::new(CursorGlow::new(true)));
        let bus = EventBus::new();
        assert!(CursorGlow::listen(&glow, &bus).is_empty());

        glow.lock().handle(&HostEvent::PointerMove { x: 1.0, y: 1.0 });
        assert!(glow.lock().frame().is_none());
    }

    #[test]
    fn test_listen_routes_events() {
        let glow = Arc::new(Mutex::new(CursorGlow::new(false)));
        let bus = EventBus::new();
        let subscriptions = CursorGlow::listen(&glow, &bus);
        assert_eq!(subscriptions.len(), 4);

        bus.dispatch(&HostEvent::PointerMove { x: 3.0, y: 4.0 });
        assert_eq!(glow.lock().frame().unwrap().position, Vec2::new(3.0, 4.0));

        drop(subscriptions);
        assert_eq!(bus.listener_count(EventKind::PointerMove), 0);
    }

    #[test]
    fn test_hover_follows_scroll() {
        let mut glow = CursorGlow::new(false);
        glow.set_interactive_regions(vec![Rect::new(0.0, 0.0, 200.0, 50.0), Rect::new(100.0, 1000.0, 200.0, 50.0)]);

        // No pointer yet, nothing to hover whatever the scroll
        glow.handle(&HostEvent::Scroll { y: 10.0 });
        assert!(!glow.is_hovering());

        // Button sits 50px below the viewport top after scrolling 950
        glow.handle(&HostEvent::Scroll { y: 950.0 });
        glow.handle(&HostEvent::PointerMove { x: 150.0, y: 70.0 });
        assert!(glow.is_hovering());
        settle(&mut glow);
        let frame = glow.frame().unwrap();
        assert!((frame.glow_size - GLOW_SIZE_HOVER).abs() < 1e-3);
        assert_eq!(frame.position, Vec2::new(150.0, 70.0));

        // Still pointer, content scrolls away underneath
        glow.handle(&HostEvent::Scroll { y: 1200.0 });
        assert!(!glow.is_hovering());
        settle(&mut glow);
        assert!((glow.frame().unwrap().glow_size - GLOW_SIZE).abs() < 1e-3);
    }
}
