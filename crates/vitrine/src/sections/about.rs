//! About: heading reveals, metric cards, counters started by the metrics
//! container crossing 80% of the viewport.

use vitrine_core::FrameScheduler;
use vitrine_fx::viewport::{Edge, ViewportLine};
use vitrine_fx::{AnimatedCounter, Direction, Easing, RevealId, RevealScope, TriggerStart};

use super::{heading, subtitle, MountContext};
use crate::content::{MetricValue, ABOUT_DESCRIPTION, ABOUT_FAVORITES, ABOUT_TITLE, METRICS};
use crate::locale::Language;

/// Heading.
pub const TITLE: &str = ".about-title";
/// Paragraph.
pub const DESCRIPTION: &str = ".about-description";
/// Favorites footer.
pub const FOOTER: &str = ".about-footer";
/// Metric cards, in `METRICS` order.
pub const METRIC_CARD: &str = ".metric-card";
/// Counter trigger.
pub const METRICS_CONTAINER: &str = ".metrics-container";

/// Counter run time in seconds.
pub const COUNTER_DURATION: f64 = 2.0;

/// About section.
pub struct About {
    scope: RevealScope,
    counter_signal: Option<RevealId>,
    counters: Vec<Option<AnimatedCounter>>,
}

impl About {
    /// Mounts the section and registers its reveals.
    #[must_use]
    pub fn mount(ctx: &MountContext<'_>) -> Self {
        let layout = ctx.layout;
        let now = ctx.now;
        let mut scope = RevealScope::new(ctx.engine);

        scope.reveal(layout.query(TITLE), heading(ctx.config), now);
        scope.reveal(layout.query(DESCRIPTION), heading(ctx.config).delay(0.2), now);
        scope.reveal(
            layout.query(FOOTER),
            subtitle(ctx.config).delay(0.6).start(TriggerStart {
                edge: Edge::Top,
                line: ViewportLine::Fraction(0.9),
            }),
            now,
        );

        // Each card watches itself; later cards wait a little longer
        let card = ctx
            .config
            .reveal
            .clone()
            .direction(Direction::Up)
            .distance(50.0)
            .duration(0.8)
            .easing(Easing::Power3Out)
            .start(TriggerStart::TOP_85);
        for (index, element) in layout.query_all(METRIC_CARD).into_iter().enumerate() {
            scope.reveal(Some(element), card.clone().delay(index as f32 * 0.1), now);
        }

        let counter_signal = scope.signal(layout.query(METRICS_CONTAINER), TriggerStart::TOP_80, now);
        let counters = METRICS
            .iter()
            .map(|metric| match metric.value {
                MetricValue::Count(target) => Some(AnimatedCounter::new(target, COUNTER_DURATION)),
                MetricValue::Label(_) => None,
            })
            .collect();

        Self {
            scope,
            counter_signal,
            counters,
        }
    }

    /// Starts the counters if their signal is among `fired`.
    pub fn on_fired(&mut self, fired: &[RevealId], scheduler: &FrameScheduler) {
        let Some(signal) = self.counter_signal else {
            return;
        };
        if !fired.contains(&signal) {
            return;
        }
        tracing::debug!("metrics in view, starting counters");
        for counter in self.counters.iter_mut().flatten() {
            counter.start(scheduler);
        }
    }

    /// Returns true once the counters have been started.
    #[must_use]
    pub fn counters_started(&self) -> bool {
        self.counters.iter().flatten().all(AnimatedCounter::is_started)
    }

    /// Card values and captions: fixed text, or the live count with a `+`.
    #[must_use]
    pub fn metrics(&self, language: Language) -> Vec<(String, &'static str)> {
        METRICS
            .iter()
            .zip(&self.counters)
            .map(|(metric, counter)| {
                let value = match (metric.value, counter) {
                    (_, Some(counter)) => format!("{}+", counter.value()),
                    (MetricValue::Label(text), None) => text.to_string(),
                    (MetricValue::Count(target), None) => format!("{target}+"),
                };
                (value, metric.label.get(language))
            })
            .collect()
    }

    /// Heading, paragraph and favorites caption.
    #[must_use]
    pub fn labels(&self, language: Language) -> [&'static str; 3] {
        [
            ABOUT_TITLE.get(language),
            ABOUT_DESCRIPTION.get(language),
            ABOUT_FAVORITES.get(language),
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
    use vitrine_core::{EventBus, Rect};
    use vitrine_fx::{RevealEngine, Viewport};

    #[test]
    fn test_counters_follow_container() {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let language = LanguageContext::default();
        let config = SiteConfig::default();

        let mut layout = StaticLayout::new();
        layout.insert(TITLE, Rect::new(0.0, 900.0, 600.0, 60.0));
        layout.insert(METRICS_CONTAINER, Rect::new(0.0, 1400.0, 1200.0, 300.0));
        layout.insert_all(METRIC_CARD, (0..4).map(|i| Rect::new(i as f32 * 300.0, 1400.0, 280.0, 140.0)));

        let mut about = About::mount(&MountContext {
            scheduler: &scheduler,
            bus: &bus,
            engine: &engine,
            layout: &layout,
            language: &language,
            config: &config,
            now: 0.0,
        });
        // title + four cards + signal; description and footer are missing
        assert_eq!(about.reveals().len(), 6);
        assert_eq!(about.metrics(Language::En)[1], ("0+".to_string(), "Completed Projects"));

        // 1400 - 0.8 * 800 = 760
        let fired = engine.lock().observe(&Viewport { scroll_y: 700.0, width: 1280.0, height: 800.0 }, 0.0);
        about.on_fired(&fired, &scheduler);
        assert!(!about.counters_started());

        let fired = engine.lock().observe(&Viewport { scroll_y: 760.0, width: 1280.0, height: 800.0 }, 0.1);
        about.on_fired(&fired, &scheduler);
        assert!(about.counters_started());

        let mut now = 0.1;
        while now < 2.5 {
            scheduler.run_frame(now);
            now += 1.0 / 60.0;
        }
        let values: Vec<String> = about.metrics(Language::Es).into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["SaaS", "15+", "785+", "10+"]);
        assert_eq!(scheduler.pending(), 0);

        drop(about);
        assert!(engine.lock().is_empty());
    }
}
