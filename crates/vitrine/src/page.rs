//! # Page
//!
//! Owns the frame clock, the event bus, the shared reveal engine and every
//! mounted section. The host pushes events and calls [`Page::frame`] once
//! per display refresh; everything else happens inside.
//!
//! ## Frame order
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  1. drain queued host events → EventBus                           │
//! │  2. RevealEngine::observe(viewport) → fired ids → counters        │
//! │  3. RevealEngine::tick                                            │
//! │  4. FrameScheduler::run_frame (typewriter, marquees, scene, ...)  │
//! │  5. cursor glow, hover tweens, copy confirmation                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{EventBus, EventKind, EventQueue, FrameScheduler, HostEvent, Subscription};
use vitrine_fx::{CursorGlow, ElementId, ElementStyle, GlowFrame, RevealEngine, Surface, Viewport};

use crate::clipboard::Clipboard;
use crate::config::SiteConfig;
use crate::layout::Layout;
use crate::locale::{Language, LanguageContext};
use crate::sections::{About, Contact, Hero, MountContext, Navbar, ProjectFilter, Projects, Services, TechStack};

/// Elements the cursor glow grows over.
pub const INTERACTIVE: &str = ".interactive";

/// What the host hands over at mount.
pub struct HostContext<'a> {
    /// Document geometry.
    pub layout: &'a dyn Layout,
    /// Canvas behind the contact section, if the host has one.
    pub surface: Option<Arc<Mutex<dyn Surface>>>,
    /// Initial viewport.
    pub viewport: Viewport,
    /// Coarse pointer device; disables the cursor glow.
    pub touch_device: bool,
}

/// Every mounted section.
pub struct Sections {
    /// Top bar.
    pub navbar: Navbar,
    /// Intro, typewriter, scene.
    pub hero: Hero,
    /// Metrics and counters.
    pub about: About,
    /// Marquees.
    pub tech_stack: TechStack,
    /// Filterable cards.
    pub projects: Projects,
    /// Price cards.
    pub services: Services,
    /// Particle network and copy button.
    pub contact: Contact,
}

struct Mounted {
    sections: Sections,
    glow: Arc<Mutex<CursorGlow>>,
    _listeners: Vec<Subscription>,
}

/// A mounted portfolio page.
pub struct Page {
    // Declared first so sections release their loops and listeners before
    // the clock and bus go away
    mounted: Option<Mounted>,
    scheduler: FrameScheduler,
    bus: EventBus,
    queue: EventQueue,
    engine: Arc<Mutex<RevealEngine>>,
    viewport: Arc<Mutex<Viewport>>,
    language: LanguageContext,
    config: SiteConfig,
    last_frame: Option<f64>,
}

impl Page {
    /// Mounts every section against `host`.
    #[must_use]
    pub fn mount(config: SiteConfig, host: HostContext<'_>, language: LanguageContext, now: f64) -> Self {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let viewport = Arc::new(Mutex::new(host.viewport));

        let sections = {
            let ctx = MountContext {
                scheduler: &scheduler,
                bus: &bus,
                engine: &engine,
                layout: host.layout,
                language: &language,
                config: &config,
                now,
            };
            Sections {
                navbar: Navbar::mount(&ctx),
                hero: Hero::mount(&ctx),
                about: About::mount(&ctx),
                tech_stack: TechStack::mount(&ctx),
                projects: Projects::mount(&ctx),
                services: Services::mount(&ctx),
                contact: Contact::mount(&ctx, host.surface),
            }
        };

        let glow = Arc::new(Mutex::new(CursorGlow::new(host.touch_device)));
        glow.lock()
            .set_interactive_regions(host.layout.query_all(INTERACTIVE).into_iter().map(|(_, rect)| rect).collect());

        let mut listeners = CursorGlow::listen(&glow, &bus);
        listeners.push({
            let viewport = Arc::clone(&viewport);
            bus.subscribe(EventKind::Scroll, move |event| {
                if let HostEvent::Scroll { y } = *event {
                    viewport.lock().scroll_y = y;
                }
            })
        });
        listeners.push({
            let viewport = Arc::clone(&viewport);
            bus.subscribe(EventKind::Resize, move |event| {
                if let HostEvent::Resize { width, height } = *event {
                    let mut viewport = viewport.lock();
                    viewport.width = width;
                    viewport.height = height;
                }
            })
        });

        tracing::info!(
            "page mounted: {} reveals, language {}",
            engine.lock().len(),
            language.get()
        );

        Self {
            mounted: Some(Mounted {
                sections,
                glow,
                _listeners: listeners,
            }),
            scheduler,
            bus,
            queue: EventQueue::default(),
            engine,
            viewport,
            language,
            config,
            last_frame: None,
        }
    }

    /// Queues a host event for the next frame. Returns false if the queue
    /// is full and the event was dropped.
    pub fn push_event(&self, event: HostEvent) -> bool {
        self.queue.push(event)
    }

    /// Runs one frame at `now`.
    pub fn frame(&mut self, now: f64) {
        let dt = self.last_frame.map_or(0.0, |last| (now - last).max(0.0)) as f32;
        self.last_frame = Some(now);

        for event in self.queue.drain() {
            self.bus.dispatch(&event);
        }

        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        let viewport = *self.viewport.lock();
        let fired = self.engine.lock().observe(&viewport, now);
        if !fired.is_empty() {
            tracing::trace!("{} reveals fired at scroll {}", fired.len(), viewport.scroll_y);
        }
        mounted.sections.about.on_fired(&fired, &self.scheduler);
        self.engine.lock().tick(now);
        self.scheduler.run_frame(now);

        mounted.glow.lock().update(dt);
        mounted.sections.services.update(dt);
        mounted.sections.contact.update(now);
    }

    /// Current style of `element`. The hero intro wins over reveals.
    #[must_use]
    pub fn style(&self, element: ElementId, now: f64) -> Option<ElementStyle> {
        let mounted = self.mounted.as_ref()?;
        mounted
            .sections
            .hero
            .styles(now)
            .into_iter()
            .find_map(|(id, style)| (id == element).then_some(style))
            .or_else(|| self.engine.lock().style(element))
    }

    /// Cursor glow to draw, if any.
    #[must_use]
    pub fn glow(&self) -> Option<GlowFrame> {
        self.mounted.as_ref().and_then(|mounted| mounted.glow.lock().frame())
    }

    /// Pushes new element geometry after the host reflowed the document.
    pub fn relayout(&mut self, layout: &dyn Layout) {
        let Some(mounted) = self.mounted.as_ref() else {
            return;
        };
        {
            let mut engine = self.engine.lock();
            for (element, rect) in layout.elements() {
                engine.update_geometry(element, rect);
            }
        }
        mounted
            .glow
            .lock()
            .set_interactive_regions(layout.query_all(INTERACTIVE).into_iter().map(|(_, rect)| rect).collect());
    }

    /// Switches the project filter. `layout` must already show the new
    /// card set.
    pub fn set_filter(&mut self, filter: ProjectFilter, layout: &dyn Layout, now: f64) {
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.sections.projects.set_filter(filter, layout, now);
        }
    }

    /// Copies the contact email.
    pub fn copy_email(&mut self, clipboard: &mut dyn Clipboard, now: f64) -> bool {
        self.mounted
            .as_mut()
            .is_some_and(|mounted| mounted.sections.contact.copy_email(clipboard, now))
    }

    /// Flips the page language.
    pub fn toggle_language(&self) -> Language {
        self.language.toggle()
    }

    /// Current language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Tears every section down. Idempotent.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            tracing::info!(
                "page unmounted: {} frames pending, {} reveals left",
                self.scheduler.pending(),
                self.engine.lock().len()
            );
        }
    }

    /// Returns true until [`Page::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Mounted sections.
    #[must_use]
    pub fn sections(&self) -> Option<&Sections> {
        self.mounted.as_ref().map(|mounted| &mounted.sections)
    }

    /// Mounted sections, mutably.
    pub fn sections_mut(&mut self) -> Option<&mut Sections> {
        self.mounted.as_mut().map(|mounted| &mut mounted.sections)
    }

    /// Viewport as last reported by the host.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *self.viewport.lock()
    }

    /// Frame clock.
    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Event bus.
    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Shared reveal engine.
    #[must_use]
    pub fn engine(&self) -> &Arc<Mutex<RevealEngine>> {
        &self.engine
    }

    /// Configuration the page was mounted with.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;
    use vitrine_core::Rect;

    fn mount(layout: &StaticLayout, touch_device: bool) -> Page {
        Page::mount(
            SiteConfig::default(),
            HostContext {
                layout,
                surface: None,
                viewport: Viewport::new(1280.0, 800.0),
                touch_device,
            },
            LanguageContext::default(),
            0.0,
        )
    }

    #[test]
    fn test_queued_events_reach_viewport() {
        let mut page = mount(&StaticLayout::new(), false);
        assert!(page.push_event(HostEvent::Scroll { y: 420.0 }));
        assert!(page.push_event(HostEvent::Resize { width: 800.0, height: 600.0 }));
        assert!((page.viewport().scroll_y).abs() < f32::EPSILON);

        page.frame(0.016);
        let viewport = page.viewport();
        assert!((viewport.scroll_y - 420.0).abs() < f32::EPSILON);
        assert!((viewport.width - 800.0).abs() < f32::EPSILON);
        assert!(page.sections().is_some_and(|s| s.navbar.is_scrolled()));
    }

    #[test]
    fn test_glow_follows_pointer() {
        let mut layout = StaticLayout::new();
        layout.insert(INTERACTIVE, Rect::new(100.0, 100.0, 200.0, 50.0));
        let mut page = mount(&layout, false);
        assert!(page.glow().is_some_and(|g| g.opacity.abs() < f32::EPSILON));

        page.push_event(HostEvent::PointerMove { x: 150.0, y: 120.0 });
        page.frame(0.0);
        page.frame(1.0);
        let glow = page.glow().unwrap();
        assert!((glow.opacity - 1.0).abs() < 1e-3);
        assert!((glow.glow_size - vitrine_fx::glow::GLOW_SIZE_HOVER).abs() < 1e-2);

        let mut touch = mount(&layout, true);
        touch.push_event(HostEvent::PointerMove { x: 150.0, y: 120.0 });
        touch.frame(0.0);
        assert!(touch.glow().is_none());
    }

    #[test]
    fn test_glow_hover_below_the_fold() {
        let mut layout = StaticLayout::new();
        layout.insert(INTERACTIVE, Rect::new(100.0, 1000.0, 200.0, 50.0));
        let mut page = mount(&layout, false);

        // Viewport y 70 at scroll 950 lands on document y 1020
        page.push_event(HostEvent::Scroll { y: 950.0 });
        page.push_event(HostEvent::PointerMove { x: 150.0, y: 70.0 });
        let mut now = 0.0;
        while now < 1.0 {
            page.frame(now);
            now += 1.0 / 60.0;
        }
        let glow = page.glow().unwrap();
        assert!((glow.glow_size - vitrine_fx::glow::GLOW_SIZE_HOVER).abs() < 1e-2);
        assert!((glow.position.y - 70.0).abs() < 1e-2);
    }

    #[test]
    fn test_unmount_is_idempotent() {
        let mut page = mount(&StaticLayout::new(), false);
        assert!(page.is_mounted());
        page.unmount();
        page.unmount();
        assert!(!page.is_mounted());
        assert_eq!(page.scheduler().pending(), 0);
        assert_eq!(page.bus().listener_count(EventKind::Scroll), 0);
        page.frame(1.0);
    }
}
