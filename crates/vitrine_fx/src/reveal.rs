//! # Reveal Engine
//!
//! One-shot, scroll-triggered entrance animations.
//!
//! ```text
//!  register ──> Unarmed ──(trigger line crossed)──> Triggered{at} ──(all done)──> Complete
//!                  │                                     ▲
//!                  └──── scroll gate off: fires at registration
//! ```
//!
//! A registration owns one trigger (the element itself, or its container for
//! staggered groups) and zero or more animated targets. Target `i` of a
//! group starts at `at + delay + i * stagger`. Registrations never re-arm:
//! scrolling away after the fire leaves the element at rest.
//!
//! A registration without targets is a bare signal; the about section uses
//! one to start its counters.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Deserialize;
use vitrine_core::Rect;

use crate::animation::{Easing, ElementStyle};
use crate::viewport::{ElementId, TriggerStart, Viewport};

/// Side the element enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Rises from below.
    #[default]
    Up,
    /// Drops from above.
    Down,
    /// Slides in from the right, moving left.
    Left,
    /// Slides in from the left, moving right.
    Right,
}

/// Per-registration animation parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Entry direction.
    pub direction: Direction,
    /// Tween length in seconds.
    pub duration: f32,
    /// Delay after the trigger fires, in seconds.
    pub delay: f32,
    /// Travel distance in pixels.
    pub distance: f32,
    /// Extra delay per group member, in seconds.
    pub stagger: f32,
    /// Wait for the trigger line; when false the reveal plays immediately.
    pub scroll_trigger: bool,
    /// Trigger threshold.
    pub start: TriggerStart,
    /// Easing curve.
    pub easing: Easing,
    /// Scale at the start of the tween.
    pub from_scale: f32,
}

impl RevealConfig {
    /// Single-element fade-in: up, 0.6s, 40px.
    #[must_use]
    pub fn fade_in() -> Self {
        Self {
            direction: Direction::Up,
            duration: 0.6,
            delay: 0.0,
            distance: 40.0,
            stagger: 0.0,
            scroll_trigger: true,
            start: TriggerStart::TOP_85,
            easing: Easing::Power2Out,
            from_scale: 1.0,
        }
    }

    /// Container stagger: up, 0.5s, 0.1s apart, 30px.
    #[must_use]
    pub fn stagger() -> Self {
        Self {
            duration: 0.5,
            distance: 30.0,
            stagger: 0.1,
            ..Self::fade_in()
        }
    }

    /// Sets the direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the delay.
    #[must_use]
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the travel distance.
    #[must_use]
    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the per-member stagger.
    #[must_use]
    pub fn with_stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    /// Enables or disables the scroll gate.
    #[must_use]
    pub fn scroll_trigger(mut self, enabled: bool) -> Self {
        self.scroll_trigger = enabled;
        self
    }

    /// Sets the trigger threshold.
    #[must_use]
    pub fn start(mut self, start: TriggerStart) -> Self {
        self.start = start;
        self
    }

    /// Sets the easing.
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the starting scale.
    #[must_use]
    pub fn from_scale(mut self, scale: f32) -> Self {
        self.from_scale = scale;
        self
    }

    /// Style applied before the reveal plays.
    #[must_use]
    pub fn start_style(&self) -> ElementStyle {
        let d = self.distance;
        let (x, y) = match self.direction {
            Direction::Up => (0.0, d),
            Direction::Down => (0.0, -d),
            Direction::Left => (d, 0.0),
            Direction::Right => (-d, 0.0),
        };
        ElementStyle::offset(x, y, 0.0).with_scale(self.from_scale)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::fade_in()
    }
}

/// One-shot trigger lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerState {
    /// Waiting for the trigger line.
    Unarmed,
    /// Fired at `at`; tweens in progress.
    Triggered {
        /// Fire time in seconds.
        at: f64,
    },
    /// Every target has reached rest.
    Complete,
}

impl TriggerState {
    /// Returns true once the trigger has fired.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        !matches!(self, Self::Unarmed)
    }
}

/// Handle to a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(u64);

impl RevealId {
    /// Raw id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

struct Registration {
    /// Trigger element and its document rect; `None` when ungated.
    trigger: Option<(ElementId, Rect)>,
    targets: Vec<ElementId>,
    config: RevealConfig,
    state: TriggerState,
}

impl Registration {
    fn start_time(&self, at: f64, index: usize) -> f64 {
        at + f64::from(self.config.delay) + index as f64 * f64::from(self.config.stagger)
    }
}

/// Holds every live registration and the styles they produce.
#[derive(Default)]
pub struct RevealEngine {
    next_id: u64,
    registrations: BTreeMap<u64, Registration>,
    styles: HashMap<ElementId, ElementStyle>,
}

impl RevealEngine {
    /// Creates an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single-element reveal.
    ///
    /// `element` is `None` when the host has no such element; nothing is
    /// registered in that case.
    pub fn reveal(
        &mut self,
        element: Option<(ElementId, Rect)>,
        config: RevealConfig,
        now: f64,
    ) -> Option<RevealId> {
        let Some((id, rect)) = element else {
            tracing::debug!("reveal skipped: target element missing");
            return None;
        };
        Some(self.register(Some((id, rect)), vec![id], config, now))
    }

    /// Registers a staggered reveal of `children`, triggered by `container`.
    ///
    /// Returns `None` if the container is missing or has no children.
    pub fn reveal_group(
        &mut self,
        container: Option<(ElementId, Rect)>,
        children: &[ElementId],
        config: RevealConfig,
        now: f64,
    ) -> Option<RevealId> {
        let Some(container) = container else {
            tracing::debug!("staggered reveal skipped: container missing");
            return None;
        };
        if children.is_empty() {
            tracing::debug!("staggered reveal skipped: container {:?} has no children", container.0);
            return None;
        }
        Some(self.register(Some(container), children.to_vec(), config, now))
    }

    /// Registers a bare signal that fires when `trigger` crosses `start`.
    pub fn signal(
        &mut self,
        trigger: Option<(ElementId, Rect)>,
        start: TriggerStart,
        now: f64,
    ) -> Option<RevealId> {
        let Some(trigger) = trigger else {
            tracing::debug!("signal skipped: trigger element missing");
            return None;
        };
        let config = RevealConfig::fade_in().start(start);
        Some(self.register(Some(trigger), Vec::new(), config, now))
    }

    fn register(
        &mut self,
        trigger: Option<(ElementId, Rect)>,
        targets: Vec<ElementId>,
        config: RevealConfig,
        now: f64,
    ) -> RevealId {
        self.next_id += 1;
        let id = self.next_id;

        let hidden = config.start_style();
        for target in &targets {
            self.styles.insert(*target, hidden);
        }

        let (trigger, state) = if config.scroll_trigger {
            (trigger, TriggerState::Unarmed)
        } else {
            (None, TriggerState::Triggered { at: now })
        };

        self.registrations.insert(
            id,
            Registration {
                trigger,
                targets,
                config,
                state,
            },
        );
        RevealId(id)
    }

    /// Fires every armed registration whose trigger line has been crossed.
    ///
    /// Returns the ids fired by this call, in registration order.
    pub fn observe(&mut self, viewport: &Viewport, now: f64) -> Vec<RevealId> {
        let mut fired = Vec::new();
        for (id, registration) in &mut self.registrations {
            if registration.state != TriggerState::Unarmed {
                continue;
            }
            let Some((element, rect)) = registration.trigger else {
                continue;
            };
            if registration.config.start.is_crossed(&rect, viewport) {
                registration.state = TriggerState::Triggered { at: now };
                tracing::debug!("reveal {} fired by {:?} at {:.3}s", id, element, now);
                fired.push(RevealId(*id));
            }
        }
        fired
    }

    /// Fires a registration directly. Returns false if it already fired or
    /// does not exist.
    pub fn fire(&mut self, id: RevealId, now: f64) -> bool {
        match self.registrations.get_mut(&id.0) {
            Some(registration) if registration.state == TriggerState::Unarmed => {
                registration.state = TriggerState::Triggered { at: now };
                true
            }
            _ => false,
        }
    }

    /// Advances every running tween to `now`.
    pub fn tick(&mut self, now: f64) {
        for registration in self.registrations.values_mut() {
            let TriggerState::Triggered { at } = registration.state else {
                continue;
            };

            let from = registration.config.start_style();
            let duration = f64::from(registration.config.duration);
            let mut done = true;

            for (index, target) in registration.targets.iter().enumerate() {
                let begin = registration.start_time(at, index);
                let t = if duration > 0.0 {
                    ((now - begin) / duration) as f32
                } else if now >= begin {
                    1.0
                } else {
                    0.0
                };
                if t < 1.0 {
                    done = false;
                }
                let eased = registration.config.easing.apply(t);
                self.styles.insert(*target, from.lerp(ElementStyle::REST, eased));
            }

            if done {
                for target in &registration.targets {
                    self.styles.insert(*target, ElementStyle::REST);
                }
                registration.state = TriggerState::Complete;
            }
        }
    }

    /// Updates the trigger rect of every registration triggered by `element`.
    pub fn update_geometry(&mut self, element: ElementId, rect: Rect) {
        for registration in self.registrations.values_mut() {
            if let Some((trigger, old)) = registration.trigger.as_mut() {
                if *trigger == element {
                    *old = rect;
                }
            }
        }
    }

    /// Removes a registration; its targets go back to rest.
    pub fn remove(&mut self, id: RevealId) -> bool {
        let Some(registration) = self.registrations.remove(&id.0) else {
            return false;
        };
        for target in registration.targets {
            let shared = self
                .registrations
                .values()
                .any(|other| other.targets.contains(&target));
            if !shared {
                self.styles.remove(&target);
            }
        }
        true
    }

    /// Lifecycle state of a registration.
    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<TriggerState> {
        self.registrations.get(&id.0).map(|r| r.state)
    }

    /// Current style of an element, `None` if no reveal touches it.
    #[must_use]
    pub fn style(&self, element: ElementId) -> Option<ElementStyle> {
        self.styles.get(&element).copied()
    }

    /// Tween start time of target `index`, once the registration fired.
    #[must_use]
    pub fn start_time(&self, id: RevealId, index: usize) -> Option<f64> {
        let registration = self.registrations.get(&id.0)?;
        match registration.state {
            TriggerState::Triggered { at } => Some(registration.start_time(at, index)),
            _ => None,
        }
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Returns true if no tween is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self
            .registrations
            .values()
            .any(|r| matches!(r.state, TriggerState::Triggered { .. }))
    }
}

/// Registrations made by one component mount.
///
/// Dropping the scope removes every registration it made.
pub struct RevealScope {
    engine: Arc<Mutex<RevealEngine>>,
    ids: Vec<RevealId>,
}

impl RevealScope {
    /// Opens a scope on a shared engine.
    #[must_use]
    pub fn new(engine: &Arc<Mutex<RevealEngine>>) -> Self {
        Self {
            engine: Arc::clone(engine),
            ids: Vec::new(),
        }
    }

    /// See [`RevealEngine::reveal`].
    pub fn reveal(
        &mut self,
        element: Option<(ElementId, Rect)>,
        config: RevealConfig,
        now: f64,
    ) -> Option<RevealId> {
        let id = self.engine.lock().reveal(element, config, now)?;
        self.ids.push(id);
        Some(id)
    }

    /// See [`RevealEngine::reveal_group`].
    pub fn reveal_group(
        &mut self,
        container: Option<(ElementId, Rect)>,
        children: &[ElementId],
        config: RevealConfig,
        now: f64,
    ) -> Option<RevealId> {
        let id = self.engine.lock().reveal_group(container, children, config, now)?;
        self.ids.push(id);
        Some(id)
    }

    /// See [`RevealEngine::signal`].
    pub fn signal(
        &mut self,
        trigger: Option<(ElementId, Rect)>,
        start: TriggerStart,
        now: f64,
    ) -> Option<RevealId> {
        let id = self.engine.lock().signal(trigger, start, now)?;
        self.ids.push(id);
        Some(id)
    }

    /// Registrations owned by this scope.
    #[must_use]
    pub fn ids(&self) -> &[RevealId] {
        &self.ids
    }

    /// Removes every registration now, leaving the scope empty.
    pub fn dispose(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        let mut engine = self.engine.lock();
        for id in self.ids.drain(..) {
            engine.remove(id);
        }
    }
}

impl Drop for RevealScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EL: ElementId = ElementId(1);

    fn below_fold() -> Option<(ElementId, Rect)> {
        Some((EL, Rect::new(0.0, 1200.0, 400.0, 300.0)))
    }

    fn viewport(scroll_y: f32) -> Viewport {
        Viewport {
            scroll_y,
            ..Viewport::new(1280.0, 800.0)
        }
    }

    #[test]
    fn test_start_styles_per_direction() {
        let base = RevealConfig::fade_in();
        assert_eq!(base.start_style(), ElementStyle::offset(0.0, 40.0, 0.0));
        assert_eq!(
            base.clone().direction(Direction::Down).start_style(),
            ElementStyle::offset(0.0, -40.0, 0.0)
        );
        assert_eq!(
            base.clone().direction(Direction::Left).start_style(),
            ElementStyle::offset(40.0, 0.0, 0.0)
        );
        assert_eq!(
            base.direction(Direction::Right).start_style(),
            ElementStyle::offset(-40.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_hidden_until_crossed() {
        let mut engine = RevealEngine::new();
        let id = engine.reveal(below_fold(), RevealConfig::fade_in(), 0.0).unwrap();

        assert_eq!(engine.style(EL).unwrap().opacity, 0.0);
        assert!(engine.observe(&viewport(0.0), 0.1).is_empty());
        assert_eq!(engine.state(id), Some(TriggerState::Unarmed));

        // 85% of 800 = 680; element top 1200 needs scroll >= 520
        assert_eq!(engine.observe(&viewport(520.0), 1.0), vec![id]);
        assert_eq!(engine.state(id), Some(TriggerState::Triggered { at: 1.0 }));
    }

    #[test]
    fn test_fires_once() {
        let mut engine = RevealEngine::new();
        let id = engine.reveal(below_fold(), RevealConfig::fade_in(), 0.0).unwrap();

        assert_eq!(engine.observe(&viewport(600.0), 1.0).len(), 1);
        engine.tick(2.0);
        assert_eq!(engine.state(id), Some(TriggerState::Complete));

        // Scroll away and back
        assert!(engine.observe(&viewport(0.0), 3.0).is_empty());
        assert!(engine.observe(&viewport(600.0), 4.0).is_empty());
        assert!(!engine.fire(id, 5.0));
        assert!(engine.style(EL).unwrap().is_rest());
    }

    #[test]
    fn test_tween_progress() {
        let mut engine = RevealEngine::new();
        let config = RevealConfig::fade_in().easing(Easing::Linear);
        engine.reveal(below_fold(), config, 0.0).unwrap();
        engine.observe(&viewport(600.0), 1.0);

        engine.tick(1.3);
        let style = engine.style(EL).unwrap();
        assert!((style.opacity - 0.5).abs() < 1e-4);
        assert!((style.y - 20.0).abs() < 1e-3);
        assert!(!engine.is_idle());

        engine.tick(1.7);
        assert!(engine.style(EL).unwrap().is_rest());
        assert!(engine.is_idle());
    }

    #[test]
    fn test_stagger_start_times() {
        let mut engine = RevealEngine::new();
        let children = [ElementId(10), ElementId(11), ElementId(12)];
        let container = Some((ElementId(9), Rect::new(0.0, 100.0, 800.0, 400.0)));
        let id = engine
            .reveal_group(container, &children, RevealConfig::stagger().delay(0.2), 0.0)
            .unwrap();

        assert_eq!(engine.observe(&viewport(0.0), 2.0), vec![id]);
        for (i, expected) in [2.2, 2.3, 2.4].iter().enumerate() {
            let start = engine.start_time(id, i).unwrap();
            assert!((start - expected).abs() < 1e-6, "child {i}: {start}");
        }

        // Before the third child's start it is still hidden
        engine.tick(2.35);
        assert_eq!(engine.style(ElementId(12)).unwrap().opacity, 0.0);
        assert!(engine.style(ElementId(10)).unwrap().opacity > 0.0);
    }

    #[test]
    fn test_ungated_plays_immediately() {
        let mut engine = RevealEngine::new();
        let config = RevealConfig::fade_in().scroll_trigger(false);
        let id = engine.reveal(below_fold(), config, 5.0).unwrap();
        assert_eq!(engine.state(id), Some(TriggerState::Triggered { at: 5.0 }));
        assert!(engine.observe(&viewport(0.0), 5.0).is_empty());
    }

    #[test]
    fn test_missing_elements_not_registered() {
        let mut engine = RevealEngine::new();
        assert!(engine.reveal(None, RevealConfig::fade_in(), 0.0).is_none());
        assert!(engine
            .reveal_group(None, &[ElementId(1)], RevealConfig::stagger(), 0.0)
            .is_none());
        assert!(engine
            .reveal_group(below_fold(), &[], RevealConfig::stagger(), 0.0)
            .is_none());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_signal_has_no_targets() {
        let mut engine = RevealEngine::new();
        let id = engine.signal(below_fold(), TriggerStart::TOP_80, 0.0).unwrap();
        // 80% of 800 = 640; needs scroll >= 560
        assert!(engine.observe(&viewport(550.0), 0.5).is_empty());
        assert_eq!(engine.observe(&viewport(560.0), 0.6), vec![id]);
        engine.tick(0.6);
        assert_eq!(engine.state(id), Some(TriggerState::Complete));
    }

    #[test]
    fn test_update_geometry_moves_trigger() {
        let mut engine = RevealEngine::new();
        let id = engine.reveal(below_fold(), RevealConfig::fade_in(), 0.0).unwrap();
        engine.update_geometry(EL, Rect::new(0.0, 100.0, 400.0, 300.0));
        assert_eq!(engine.observe(&viewport(0.0), 0.1), vec![id]);
    }

    #[test]
    fn test_scope_drop_removes_registrations() {
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        {
            let mut scope = RevealScope::new(&engine);
            scope.reveal(below_fold(), RevealConfig::fade_in(), 0.0);
            scope.signal(below_fold(), TriggerStart::TOP_80, 0.0);
            assert_eq!(scope.ids().len(), 2);
            assert_eq!(engine.lock().len(), 2);
        }
        let engine = engine.lock();
        assert!(engine.is_empty());
        assert!(engine.style(EL).is_none());
    }
}
