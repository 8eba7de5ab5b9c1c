//! Services: staggered card grid and WhatsApp quote links.

use vitrine_fx::{Easing, ElementId, ElementStyle, Hover, RevealId, RevealScope, TriggerStart};

use super::{heading, subtitle, MountContext};
use crate::content::{Service, PHONE, SERVICES, SERVICES_MESSAGE, SERVICES_QUOTE, SERVICES_SUBTITLE, SERVICES_TITLE};
use crate::locale::Language;
use crate::utils::whatsapp_link;

/// Heading.
pub const TITLE: &str = ".services-title";
/// Subtitle.
pub const SUBTITLE: &str = ".services-subtitle";
/// Card grid; triggers the cards.
pub const GRID: &str = ".services-grid";
/// Cards, in `SERVICES` order.
pub const CARD: &str = ".service-card";

/// Services section.
pub struct Services {
    scope: RevealScope,
    hovers: Vec<Hover>,
}

impl Services {
    /// Mounts the section and registers its reveals.
    #[must_use]
    pub fn mount(ctx: &MountContext<'_>) -> Self {
        let layout = ctx.layout;
        let now = ctx.now;
        let mut scope = RevealScope::new(ctx.engine);

        scope.reveal(layout.query(TITLE), heading(ctx.config), now);
        scope.reveal(layout.query(SUBTITLE), subtitle(ctx.config), now);

        let cards: Vec<ElementId> = layout.query_all(CARD).into_iter().map(|(id, _)| id).collect();
        let card_config = heading(ctx.config)
            .distance(40.0)
            .duration(0.6)
            .from_scale(0.95)
            .with_stagger(0.1)
            .easing(Easing::Power3Out)
            .start(TriggerStart::TOP_85);
        scope.reveal_group(layout.query(GRID), &cards, card_config, now);

        Self {
            scope,
            hovers: cards.iter().map(|_| Hover::new(1.02, -6.0, Hover::DEFAULT_DURATION)).collect(),
        }
    }

    /// Pointer entered or left card `index`.
    pub fn set_card_hovered(&mut self, index: usize, hovered: bool) {
        if let Some(hover) = self.hovers.get_mut(index) {
            if hovered {
                hover.enter();
            } else {
                hover.leave();
            }
        }
    }

    /// Advances the hover tweens by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for hover in &mut self.hovers {
            hover.update(dt);
        }
    }

    /// Hover lift of card `index`, layered over its reveal style by the host.
    #[must_use]
    pub fn card_hover_style(&self, index: usize) -> Option<ElementStyle> {
        self.hovers.get(index).map(Hover::style)
    }

    /// Every service in display order.
    #[must_use]
    pub fn services(&self) -> &'static [Service] {
        &SERVICES
    }

    /// Quote link for `service` with a prefilled message.
    #[must_use]
    pub fn quote_link(&self, service: &Service, language: Language) -> String {
        let message = SERVICES_MESSAGE
            .get(language)
            .replace("{title}", service.title.get(language));
        whatsapp_link(PHONE, &message)
    }

    /// Heading, subtitle and quote button label.
    #[must_use]
    pub fn labels(&self, language: Language) -> [&'static str; 3] {
        [
            SERVICES_TITLE.get(language),
            SERVICES_SUBTITLE.get(language),
            SERVICES_QUOTE.get(language),
        ]
    }

    /// Registrations owned by this section.
    #[must_use]
    pub fn reveals(&self) -> &[RevealId] {
        self.scope.ids()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::SiteConfig;
    use crate::layout::StaticLayout;
    use crate::locale::LanguageContext;
    use parking_lot::Mutex;
    use vitrine_core::{EventBus, FrameScheduler, Rect};
    use vitrine_fx::{RevealEngine, Viewport};

    fn mount(engine: &Arc<Mutex<RevealEngine>>, layout: &StaticLayout) -> Services {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let language = LanguageContext::default();
        let config = SiteConfig::default();
        Services::mount(&MountContext {
            scheduler: &scheduler,
            bus: &bus,
            engine,
            layout,
            language: &language,
            config: &config,
            now: 0.0,
        })
    }

    #[test]
    fn test_quote_link() {
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let services = mount(&engine, &StaticLayout::new());
        assert!(services.reveals().is_empty());

        let landing = &services.services()[0];
        assert_eq!(
            services.quote_link(landing, Language::En),
            "https://wa.me/584145116337?text=Hi%2C%20I%27m%20interested%20in%20the%20Landing%20Page%20service.%20Could%20you%20give%20me%20more%20information%3F"
        );
        assert!(services
            .quote_link(&services.services()[6], Language::Es)
            .contains("Mantenimiento"));
    }

    #[test]
    fn test_cards_stagger_from_grid() {
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let mut layout = StaticLayout::new();
        layout.insert(GRID, Rect::new(0.0, 6000.0, 1200.0, 800.0));
        let cards = layout.insert_all(CARD, (0..8).map(|i| Rect::new(0.0, 6000.0 + i as f32 * 100.0, 280.0, 90.0)));
        let services = mount(&engine, &layout);

        let group = services.reveals()[0];
        let viewport = Viewport { scroll_y: 5400.0, width: 1280.0, height: 800.0 };
        assert_eq!(engine.lock().observe(&viewport, 1.0), vec![group]);

        let style = engine.lock().style(cards[0]).unwrap();
        assert!((style.scale - 0.95).abs() < 1e-6);
        assert!((style.y - 40.0).abs() < 1e-6);

        engine.lock().tick(2.5);
        assert!(cards.iter().all(|c| engine.lock().style(*c).is_some_and(|s| s.is_rest())));
    }

    #[test]
    fn test_card_hover() {
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let mut layout = StaticLayout::new();
        layout.insert(GRID, Rect::new(0.0, 6000.0, 1200.0, 800.0));
        layout.insert_all(CARD, (0..2).map(|i| Rect::new(i as f32 * 300.0, 6000.0, 280.0, 300.0)));
        let mut services = mount(&engine, &layout);

        services.set_card_hovered(1, true);
        for _ in 0..30 {
            services.update(1.0 / 60.0);
        }
        let lifted = services.card_hover_style(1).unwrap();
        assert!((lifted.scale - 1.02).abs() < 1e-4);
        assert!((lifted.y + 6.0).abs() < 1e-3);
        assert!(services.card_hover_style(0).unwrap().is_rest());
        assert!(services.card_hover_style(2).is_none());

        services.set_card_hovered(1, false);
        for _ in 0..30 {
            services.update(1.0 / 60.0);
        }
        assert!(services.card_hover_style(1).unwrap().is_rest());
    }
}
