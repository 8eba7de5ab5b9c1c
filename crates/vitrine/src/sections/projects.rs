//! Projects: category filter and the card grid.
//!
//! Cards are not scroll-gated. Mounting and every filter change dispose the
//! previous card reveal and play a fresh staggered one over the cards the
//! host now shows.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_fx::{Easing, ElementId, RevealConfig, RevealEngine, RevealId, RevealScope, TriggerStart};

use super::{heading, subtitle, MountContext};
use crate::config::SiteConfig;
use crate::content::{
    Category, Project, FILTER_ALL, FILTER_EDUCATIONAL, FILTER_REAL, PROJECTS, PROJECTS_SUBTITLE, PROJECTS_TITLE,
    PROJECTS_VIEW,
};
use crate::layout::Layout;
use crate::locale::Language;

/// Heading.
pub const TITLE: &str = ".projects-title";
/// Subtitle.
pub const SUBTITLE: &str = ".projects-subtitle";
/// Filter button row.
pub const FILTERS_CONTAINER: &str = ".filters-container";
/// Filter buttons.
pub const FILTER_BUTTON: &str = ".filter-button";
/// Card grid.
pub const GRID: &str = ".projects-grid";

/// Selector of the card for `project`.
#[must_use]
pub fn card_selector(project: &Project) -> String {
    format!("#project-{}", project.id)
}

/// Which projects are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    /// Every project.
    #[default]
    All,
    /// One category.
    Only(Category),
}

impl ProjectFilter {
    /// Filters in button order.
    pub const ALL: [Self; 3] = [Self::All, Self::Only(Category::Real), Self::Only(Category::Educational)];

    /// Returns true if `project` passes.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match self {
            Self::All => FILTER_ALL.get(language),
            Self::Only(Category::Real) => FILTER_REAL.get(language),
            Self::Only(Category::Educational) => FILTER_EDUCATIONAL.get(language),
        }
    }
}

fn card_reveal(config: &SiteConfig) -> RevealConfig {
    heading(config)
        .distance(40.0)
        .duration(0.6)
        .from_scale(0.95)
        .with_stagger(0.1)
        .easing(Easing::Power3Out)
        .scroll_trigger(false)
}

/// Projects section.
pub struct Projects {
    engine: Arc<Mutex<RevealEngine>>,
    config: SiteConfig,
    filter: ProjectFilter,
    scope: RevealScope,
    cards: RevealScope,
}

impl Projects {
    /// Mounts the section and plays the card entrance for the default filter.
    #[must_use]
    pub fn mount(ctx: &MountContext<'_>) -> Self {
        let layout = ctx.layout;
        let now = ctx.now;
        let mut scope = RevealScope::new(ctx.engine);

        scope.reveal(layout.query(TITLE), heading(ctx.config), now);
        scope.reveal(layout.query(SUBTITLE), subtitle(ctx.config), now);

        let buttons: Vec<ElementId> = layout.query_all(FILTER_BUTTON).into_iter().map(|(id, _)| id).collect();
        let button_config = heading(ctx.config)
            .distance(20.0)
            .duration(0.6)
            .with_stagger(0.1)
            .start(TriggerStart::TOP_85);
        scope.reveal_group(layout.query(FILTERS_CONTAINER), &buttons, button_config, now);

        let mut projects = Self {
            engine: Arc::clone(ctx.engine),
            config: ctx.config.clone(),
            filter: ProjectFilter::All,
            scope,
            cards: RevealScope::new(ctx.engine),
        };
        projects.replay_cards(layout, now);
        projects
    }

    /// Switches the filter and replays the card entrance.
    ///
    /// `layout` must already reflect the new card set. Selecting the current
    /// filter replays too.
    pub fn set_filter(&mut self, filter: ProjectFilter, layout: &dyn Layout, now: f64) {
        self.filter = filter;
        tracing::debug!("project filter set to {:?}", filter);
        self.replay_cards(layout, now);
    }

    fn replay_cards(&mut self, layout: &dyn Layout, now: f64) {
        self.cards.dispose();
        self.cards = RevealScope::new(&self.engine);

        let cards: Vec<ElementId> = self
            .visible()
            .filter_map(|project| layout.query(&card_selector(project)))
            .map(|(id, _)| id)
            .collect();
        self.cards.reveal_group(layout.query(GRID), &cards, card_reveal(&self.config), now);
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    /// Projects passing the active filter, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &'static Project> + '_ {
        let filter = self.filter;
        PROJECTS.iter().filter(move |project| filter.matches(project))
    }

    /// The card reveal currently playing, if any card is shown.
    #[must_use]
    pub fn card_reveal(&self) -> Option<RevealId> {
        self.cards.ids().first().copied()
    }

    /// Heading, subtitle and card link label.
    #[must_use]
    pub fn labels(&self, language: Language) -> [&'static str; 3] {
        [
            PROJECTS_TITLE.get(language),
            PROJECTS_SUBTITLE.get(language),
            PROJECTS_VIEW.get(language),
        ]
    }

    /// Registrations owned by this section, cards included.
    #[must_use]
    pub fn reveals(&self) -> Vec<RevealId> {
        self.scope.ids().iter().chain(self.cards.ids()).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;
    use crate::locale::LanguageContext;
    use vitrine_core::{EventBus, FrameScheduler, Rect};
    use vitrine_fx::TriggerState;

    fn layout_for(filter: ProjectFilter) -> StaticLayout {
        let mut layout = StaticLayout::new();
        layout.insert(TITLE, Rect::new(0.0, 4000.0, 600.0, 60.0));
        layout.insert(GRID, Rect::new(0.0, 4300.0, 1200.0, 2000.0));
        let mut y = 4300.0;
        for project in PROJECTS.iter().filter(|p| filter.matches(p)) {
            layout.insert(&card_selector(project), Rect::new(0.0, y, 380.0, 420.0));
            y += 440.0;
        }
        layout
    }

    #[test]
    fn test_filter_counts() {
        let real = PROJECTS.iter().filter(|p| ProjectFilter::Only(Category::Real).matches(p)).count();
        let educational = PROJECTS
            .iter()
            .filter(|p| ProjectFilter::Only(Category::Educational).matches(p))
            .count();
        assert_eq!(real, 9);
        assert_eq!(educational, 6);
        assert_eq!(ProjectFilter::ALL[2].label(Language::Es), "Educativos");
    }

    #[test]
    fn test_filter_change_replays_cards() {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let language = LanguageContext::default();
        let config = SiteConfig::default();
        let layout = layout_for(ProjectFilter::All);

        let mut projects = Projects::mount(&MountContext {
            scheduler: &scheduler,
            bus: &bus,
            engine: &engine,
            layout: &layout,
            language: &language,
            config: &config,
            now: 0.0,
        });

        // Cards play immediately even though they are far below the fold
        let first = projects.card_reveal().unwrap();
        assert!(engine.lock().state(first).is_some_and(|s| s.has_fired()));
        assert_eq!(engine.lock().len(), 2);

        let layout = layout_for(ProjectFilter::Only(Category::Educational));
        projects.set_filter(ProjectFilter::Only(Category::Educational), &layout, 5.0);
        let second = projects.card_reveal().unwrap();
        assert_ne!(first, second);
        assert_eq!(engine.lock().state(first), None);
        assert_eq!(engine.lock().state(second), Some(TriggerState::Triggered { at: 5.0 }));
        assert_eq!(projects.visible().count(), 6);
        let last = engine.lock().start_time(second, 5).unwrap();
        assert!((last - 5.5).abs() < 1e-6);

        drop(projects);
        assert!(engine.lock().is_empty());
    }
}
