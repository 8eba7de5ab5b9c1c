//! Tech stack: two marquees running in opposite directions, each paused
//! while the pointer is over it.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{EventKind, FrameLoop, HostEvent, LoopControl, Rect, Subscription, Vec2};
use vitrine_fx::{Direction, Easing, Marquee, MarqueeDirection, RevealId, RevealScope, TriggerStart};

use super::{heading, subtitle, MountContext};
use crate::content::{Tech, BACKEND, FRONTEND, TECH_BACKEND_LABEL, TECH_FRONTEND_LABEL, TECH_SUBTITLE, TECH_TITLE};
use crate::locale::Language;

/// Heading.
pub const TITLE: &str = ".tech-title";
/// Subtitle.
pub const SUBTITLE: &str = ".tech-subtitle";
/// Wrapper of both rows; triggers the labels.
pub const MARQUEE_SECTION: &str = ".marquee-section";
/// Row captions.
pub const CATEGORY_LABEL: &str = ".category-label";
/// The two marquee rows, frontend first. Pointer hit areas.
pub const MARQUEE_ROW: &str = ".marquee-row";

struct Rows {
    marquees: [Marquee; 2],
    /// Document-space hit areas.
    areas: Vec<Rect>,
    /// Viewport-relative pointer, `None` once it left.
    pointer: Option<Vec2>,
    scroll_y: f32,
}

impl Rows {
    fn refresh_hover(&mut self) {
        let pointer = self.pointer.map(|p| Vec2::new(p.x, p.y + self.scroll_y));
        for (index, marquee) in self.marquees.iter_mut().enumerate() {
            let inside = pointer.is_some_and(|p| self.areas.get(index).is_some_and(|area| area.contains(p)));
            marquee.set_hovered(inside);
        }
    }
}

/// Tech stack section.
pub struct TechStack {
    scope: RevealScope,
    rows: Arc<Mutex<Rows>>,
    scroll_loop: FrameLoop,
    _pointer: Vec<Subscription>,
}

impl TechStack {
    /// Mounts the section, its reveals and both marquees.
    #[must_use]
    pub fn mount(ctx: &MountContext<'_>) -> Self {
        let layout = ctx.layout;
        let now = ctx.now;
        let mut scope = RevealScope::new(ctx.engine);

        scope.reveal(layout.query(TITLE), heading(ctx.config), now);
        scope.reveal(layout.query(SUBTITLE), subtitle(ctx.config), now);

        let labels: Vec<_> = layout.query_all(CATEGORY_LABEL).into_iter().map(|(id, _)| id).collect();
        let label_config = ctx
            .config
            .reveal
            .clone()
            .direction(Direction::Right)
            .distance(30.0)
            .duration(0.6)
            .with_stagger(0.2)
            .easing(Easing::Power3Out)
            .start(TriggerStart::TOP_80);
        scope.reveal_group(layout.query(MARQUEE_SECTION), &labels, label_config, now);

        let rows = Arc::new(Mutex::new(Rows {
            marquees: [
                Marquee::new(MarqueeDirection::Left, Marquee::DEFAULT_PERIOD),
                Marquee::new(MarqueeDirection::Right, Marquee::DEFAULT_PERIOD),
            ],
            areas: layout.query_all(MARQUEE_ROW).into_iter().map(|(_, rect)| rect).collect(),
            pointer: None,
            scroll_y: 0.0,
        }));

        let scroll_loop = {
            let rows = Arc::clone(&rows);
            FrameLoop::start(ctx.scheduler, move |now| {
                for marquee in &mut rows.lock().marquees {
                    marquee.advance(now);
                }
                LoopControl::Continue
            })
        };

        // Rows under a still pointer change as the page scrolls
        let pointer = [EventKind::PointerMove, EventKind::PointerLeave, EventKind::Scroll]
            .into_iter()
            .map(|kind| {
                let rows = Arc::clone(&rows);
                ctx.bus.subscribe(kind, move |event| {
                    let mut rows = rows.lock();
                    match *event {
                        HostEvent::PointerMove { x, y } => rows.pointer = Some(Vec2::new(x, y)),
                        HostEvent::PointerLeave => rows.pointer = None,
                        HostEvent::Scroll { y } => rows.scroll_y = y,
                        _ => return,
                    }
                    rows.refresh_hover();
                })
            })
            .collect();

        Self {
            scope,
            rows,
            scroll_loop,
            _pointer: pointer,
        }
    }

    /// Marks a row hovered or not, for hosts that report hover directly.
    pub fn set_row_hovered(&self, row: usize, hovered: bool) {
        if let Some(marquee) = self.rows.lock().marquees.get_mut(row) {
            marquee.set_hovered(hovered);
        }
    }

    /// Returns true while `row` is paused.
    #[must_use]
    pub fn is_row_paused(&self, row: usize) -> bool {
        self.rows.lock().marquees.get(row).is_some_and(Marquee::is_paused)
    }

    /// Track translation of `row` as a fraction of its width, in `[-0.5, 0]`.
    #[must_use]
    pub fn row_offset(&self, row: usize) -> Option<f32> {
        self.rows.lock().marquees.get(row).map(Marquee::offset_fraction)
    }

    /// Caption and badges of both rows. Each badge list is rendered twice
    /// by the host so the loop is seamless.
    #[must_use]
    pub fn rows(&self, language: Language) -> [(&'static str, &'static [Tech]); 2] {
        [
            (TECH_FRONTEND_LABEL.get(language), &FRONTEND[..]),
            (TECH_BACKEND_LABEL.get(language), &BACKEND[..]),
        ]
    }

    /// Heading and subtitle.
    #[must_use]
    pub fn labels(&self, language: Language) -> [&'static str; 2] {
        [TECH_TITLE.get(language), TECH_SUBTITLE.get(language)]
    }

    /// Registrations owned by this section.
    #[must_use]
    pub fn reveals(&self) -> &[RevealId] {
        self.scope.ids()
    }

    /// Returns true while the marquees run.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scroll_loop.is_running()
    }
}
