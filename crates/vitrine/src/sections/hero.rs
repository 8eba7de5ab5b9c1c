//! Hero: intro timeline, typewriter, floating scene behind it.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{FrameLoop, LoopControl};
use vitrine_fx::{ElementId, ElementStyle, Scene, SceneHost, Timeline, Typewriter};

use super::MountContext;
use crate::content::{hero_phrases, HERO_CTA, HERO_SECONDARY, HERO_TITLE};
use crate::locale::Language;

/// Headline.
pub const TITLE: &str = ".hero-title";
/// Typewriter line.
pub const TYPEWRITER: &str = ".hero-typewriter";
/// Call-to-action buttons.
pub const BUTTON: &str = ".hero-button";
/// Scroll hint at the bottom.
pub const SCROLL_INDICATOR: &str = ".scroll-indicator";
/// Canvas hosting the 3D scene.
pub const SCENE: &str = "#hero .scene-canvas";

/// Hero section.
pub struct Hero {
    timeline: Option<Timeline>,
    typewriter: Arc<Mutex<Typewriter>>,
    typing: FrameLoop,
    scene: Option<SceneHost>,
}

impl Hero {
    /// Mounts the hero and plays the intro.
    ///
    /// The intro is skipped when one of its elements is missing; the scene
    /// is skipped when there is no canvas for it.
    #[must_use]
    pub fn mount(ctx: &MountContext<'_>) -> Self {
        let layout = ctx.layout;
        let timeline = match (layout.query(TITLE), layout.query(TYPEWRITER), layout.query(SCROLL_INDICATOR)) {
            (Some((title, _)), Some((typewriter, _)), Some((indicator, _))) => {
                let buttons: Vec<ElementId> = layout.query_all(BUTTON).into_iter().map(|(id, _)| id).collect();
                let mut timeline = Timeline::hero_intro(title, typewriter, &buttons, indicator);
                timeline.play(ctx.now);
                Some(timeline)
            }
            _ => {
                tracing::debug!("hero intro skipped: elements missing");
                None
            }
        };

        let language = ctx.language.clone();
        let typewriter = Arc::new(Mutex::new(Typewriter::new(
            hero_phrases(language.get()).iter().copied(),
            ctx.config.typewriter,
        )));
        let typing = {
            let typewriter = Arc::clone(&typewriter);
            let mut revision = language.revision();
            FrameLoop::start(ctx.scheduler, move |now| {
                let mut typewriter = typewriter.lock();
                if language.revision() != revision {
                    revision = language.revision();
                    typewriter.set_phrases(hero_phrases(language.get()).iter().copied());
                }
                typewriter.advance(now);
                LoopControl::Continue
            })
        };

        let scene = layout.query(SCENE).map(|(_, rect)| {
            SceneHost::mount(ctx.scheduler, ctx.bus, Scene::portfolio(), rect.width, rect.height)
        });

        Self {
            timeline,
            typewriter,
            typing,
            scene,
        }
    }

    /// Intro styles at `now`. Empty when the intro was skipped.
    #[must_use]
    pub fn styles(&self, now: f64) -> Vec<(ElementId, ElementStyle)> {
        self.timeline.as_ref().map(|t| t.sample(now)).unwrap_or_default()
    }

    /// Returns true once the intro has played through (or never ran).
    #[must_use]
    pub fn is_intro_complete(&self, now: f64) -> bool {
        self.timeline.as_ref().is_none_or(|t| t.is_complete(now))
    }

    /// Visible typewriter text.
    #[must_use]
    pub fn typed_text(&self) -> String {
        self.typewriter.lock().text().to_string()
    }

    /// Index of the phrase being typed.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.typewriter.lock().phrase_index()
    }

    /// Headline and button labels.
    #[must_use]
    pub fn labels(&self, language: Language) -> [&'static str; 3] {
        [HERO_TITLE.get(language), HERO_CTA.get(language), HERO_SECONDARY.get(language)]
    }

    /// The floating scene, if mounted.
    #[must_use]
    pub fn scene(&self) -> Option<&SceneHost> {
        self.scene.as_ref()
    }

    /// Returns true while the typewriter runs.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::layout::StaticLayout;
    use crate::locale::LanguageContext;
    use vitrine_core::{EventBus, FrameScheduler, Rect};
    use vitrine_fx::RevealEngine;

    fn layout() -> StaticLayout {
        let mut layout = StaticLayout::new();
        layout.insert(SCENE, Rect::new(0.0, 0.0, 1280.0, 800.0));
        layout.insert(TITLE, Rect::new(340.0, 440.0, 600.0, 60.0));
        layout.insert(TYPEWRITER, Rect::new(340.0, 520.0, 600.0, 60.0));
        layout.insert_all(BUTTON, [Rect::new(400.0, 620.0, 200.0, 56.0), Rect::new(680.0, 620.0, 200.0, 56.0)]);
        layout.insert(SCROLL_INDICATOR, Rect::new(630.0, 740.0, 20.0, 40.0));
        layout
    }

    #[test]
    fn test_intro_and_typing() {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let language = LanguageContext::default();
        let config = SiteConfig::default();
        let layout = layout();
        let hero = Hero::mount(&MountContext {
            scheduler: &scheduler,
            bus: &bus,
            engine: &engine,
            layout: &layout,
            language: &language,
            config: &config,
            now: 0.0,
        });

        assert_eq!(hero.styles(0.0).len(), 5);
        assert!(hero.scene().is_some_and(SceneHost::is_running));

        let mut now = 0.0;
        while now < 1.0 {
            scheduler.run_frame(now);
            now += 1.0 / 60.0;
        }
        assert!(hero.typed_text().starts_with("Creo"));

        language.set(Language::En);
        scheduler.run_frame(now);
        assert_eq!(hero.phrase_index(), 0);
        assert!(!hero.typed_text().starts_with("Creo"));

        assert!(hero.is_intro_complete(2.81));
        assert!(hero.styles(2.81).iter().all(|(_, s)| s.is_rest()));
    }

    #[test]
    fn test_missing_elements() {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let language = LanguageContext::default();
        let config = SiteConfig::default();
        let layout = StaticLayout::new();
        let hero = Hero::mount(&MountContext {
            scheduler: &scheduler,
            bus: &bus,
            engine: &engine,
            layout: &layout,
            language: &language,
            config: &config,
            now: 0.0,
        });

        assert!(hero.styles(1.0).is_empty());
        assert!(hero.is_intro_complete(0.0));
        assert!(hero.scene().is_none());
        assert!(hero.is_typing());

        drop(hero);
        assert_eq!(scheduler.pending(), 0);
    }
}
