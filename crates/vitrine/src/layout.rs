//! Element lookup.
//!
//! The host owns the document; sections find their elements by selector and
//! get back a handle plus document-space geometry. A selector that matches
//! nothing is not an error: the section simply skips that effect.

use std::collections::HashMap;

use vitrine_core::Rect;
use vitrine_fx::ElementId;

use crate::content::{FRONTEND, PROJECTS, SERVICES};
use crate::page::INTERACTIVE;
use crate::sections::{about, hero, projects, services, tech_stack, ProjectFilter};

/// Host document geometry.
pub trait Layout {
    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<(ElementId, Rect)>;

    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Option<(ElementId, Rect)> {
        self.query_all(selector).into_iter().next()
    }

    /// Every known element, for refreshing trigger geometry after a resize.
    fn elements(&self) -> Vec<(ElementId, Rect)>;
}

/// Fixed layout built up front; used by tests and the preview binary.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    next_id: u32,
    by_selector: HashMap<String, Vec<ElementId>>,
    rects: HashMap<ElementId, Rect>,
    order: Vec<ElementId>,
}

impl StaticLayout {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element under `selector` and returns its handle.
    pub fn insert(&mut self, selector: &str, rect: Rect) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.by_selector.entry(selector.to_string()).or_default().push(id);
        self.rects.insert(id, rect);
        self.order.push(id);
        id
    }

    /// Adds several elements under one selector.
    pub fn insert_all(&mut self, selector: &str, rects: impl IntoIterator<Item = Rect>) -> Vec<ElementId> {
        rects.into_iter().map(|rect| self.insert(selector, rect)).collect()
    }

    /// Moves an existing element. Unknown handles are ignored.
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(slot) = self.rects.get_mut(&id) {
            *slot = rect;
        }
    }

    /// Geometry of `id`.
    #[must_use]
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }
}

/// Height of one project card row, gap included.
const PROJECT_ROW: f32 = 440.0;

impl StaticLayout {
    /// A complete single-column portfolio page at `width` x `height`, with
    /// the project cards `filter` shows.
    ///
    /// Section blocks keep their place and their handles whatever the
    /// filter; only the cards change between calls.
    #[must_use]
    pub fn portfolio(width: f32, height: f32, filter: ProjectFilter) -> Self {
        let mut layout = Self::new();
        let inner = (width - 80.0).max(0.0);

        // Hero fills the first screen
        layout.insert("#hero", Rect::new(0.0, 0.0, width, height));
        layout.insert(hero::SCENE, Rect::new(0.0, 0.0, width, height));
        layout.insert(hero::TITLE, Rect::new(40.0, height * 0.3, inner, 80.0));
        layout.insert(hero::TYPEWRITER, Rect::new(40.0, height * 0.3 + 100.0, inner, 40.0));
        for (index, rect) in [0.0, 220.0]
            .into_iter()
            .map(|x| Rect::new(40.0 + x, height * 0.3 + 180.0, 200.0, 48.0))
            .enumerate()
        {
            layout.insert(hero::BUTTON, rect);
            if index == 0 {
                layout.insert(INTERACTIVE, rect);
            }
        }
        layout.insert(hero::SCROLL_INDICATOR, Rect::new(width / 2.0 - 15.0, height - 80.0, 30.0, 50.0));

        let about = height + 100.0;
        layout.insert("#about", Rect::new(0.0, about, width, 1000.0));
        layout.insert(about::TITLE, Rect::new(40.0, about + 80.0, inner, 60.0));
        layout.insert(about::DESCRIPTION, Rect::new(40.0, about + 160.0, inner, 200.0));
        layout.insert(about::METRICS_CONTAINER, Rect::new(40.0, about + 400.0, inner, 300.0));
        let card = inner / 4.0;
        layout.insert_all(
            about::METRIC_CARD,
            (0..4).map(|i| Rect::new(40.0 + i as f32 * card, about + 400.0, card - 20.0, 140.0)),
        );
        layout.insert(about::FOOTER, Rect::new(40.0, about + 750.0, inner, 60.0));

        let tech = about + 1100.0;
        layout.insert("#tech-stack", Rect::new(0.0, tech, width, 800.0));
        layout.insert(tech_stack::TITLE, Rect::new(40.0, tech + 80.0, inner, 60.0));
        layout.insert(tech_stack::SUBTITLE, Rect::new(40.0, tech + 150.0, inner, 40.0));
        layout.insert(tech_stack::MARQUEE_SECTION, Rect::new(0.0, tech + 250.0, width, 450.0));
        layout.insert_all(
            tech_stack::CATEGORY_LABEL,
            [Rect::new(40.0, tech + 250.0, 300.0, 30.0), Rect::new(40.0, tech + 480.0, 300.0, 30.0)],
        );
        layout.insert_all(
            tech_stack::MARQUEE_ROW,
            [Rect::new(0.0, tech + 290.0, width, 140.0), Rect::new(0.0, tech + 520.0, width, 140.0)],
        );
        let badge = width / FRONTEND.len() as f32;
        layout.insert_all(
            INTERACTIVE,
            (0..FRONTEND.len()).map(|i| Rect::new(i as f32 * badge, tech + 290.0, badge - 16.0, 140.0)),
        );

        let work = tech + 900.0;
        let rows = PROJECTS.len().div_ceil(3);
        layout.insert("#projects", Rect::new(0.0, work, width, 400.0 + rows as f32 * PROJECT_ROW));
        layout.insert(projects::TITLE, Rect::new(40.0, work + 80.0, inner, 60.0));
        layout.insert(projects::SUBTITLE, Rect::new(40.0, work + 150.0, inner, 40.0));
        layout.insert(projects::FILTERS_CONTAINER, Rect::new(40.0, work + 220.0, inner, 48.0));
        layout.insert_all(
            projects::FILTER_BUTTON,
            (0..ProjectFilter::ALL.len()).map(|i| Rect::new(40.0 + i as f32 * 160.0, work + 220.0, 150.0, 48.0)),
        );
        let grid = work + 300.0;
        layout.insert(projects::GRID, Rect::new(40.0, grid, inner, rows as f32 * PROJECT_ROW));
        let offer = grid + rows as f32 * PROJECT_ROW + 100.0;
        let card_rows = SERVICES.len().div_ceil(4);
        layout.insert("#services", Rect::new(0.0, offer, width, 400.0 + card_rows as f32 * 340.0));
        layout.insert(services::TITLE, Rect::new(40.0, offer + 80.0, inner, 60.0));
        layout.insert(services::SUBTITLE, Rect::new(40.0, offer + 150.0, inner, 40.0));
        layout.insert(services::GRID, Rect::new(40.0, offer + 250.0, inner, card_rows as f32 * 340.0));
        let column = inner / 4.0;
        layout.insert_all(
            services::CARD,
            (0..SERVICES.len()).map(|i| {
                Rect::new(
                    40.0 + (i % 4) as f32 * column,
                    offer + 250.0 + (i / 4) as f32 * 340.0,
                    column - 20.0,
                    320.0,
                )
            }),
        );

        let contact = offer + 400.0 + card_rows as f32 * 340.0 + 100.0;
        layout.insert("#contact", Rect::new(0.0, contact, width, height));

        // Cards go last so every other element keeps its handle across filters
        let column = inner / 3.0;
        for (index, project) in PROJECTS.iter().filter(|p| filter.matches(p)).enumerate() {
            let rect = Rect::new(
                40.0 + (index % 3) as f32 * column,
                grid + (index / 3) as f32 * PROJECT_ROW,
                column - 20.0,
                PROJECT_ROW - 20.0,
            );
            layout.insert(&projects::card_selector(project), rect);
        }

        layout
    }

    /// Total document height.
    #[must_use]
    pub fn document_height(&self) -> f32 {
        self.rects.values().map(|rect| rect.y + rect.height).fold(0.0, f32::max)
    }
}

impl Layout for StaticLayout {
    fn query_all(&self, selector: &str) -> Vec<(ElementId, Rect)> {
        self.by_selector
            .get(selector)
            .map(|ids| ids.iter().filter_map(|id| Some((*id, self.rect(*id)?))).collect())
            .unwrap_or_default()
    }

    fn elements(&self) -> Vec<(ElementId, Rect)> {
        self.order.iter().filter_map(|id| Some((*id, self.rect(*id)?))).collect()
    }
}
