//! Sequenced entrance tweens.
//!
//! ```text
//! delay ──> [title        ]
//!                [typewriter     ]        "-=0.4"
//!                     [button 0   ]         "-=0.3", stagger 0.2
//!                         [button 1   ]
//!                             [indicator          ]   "-=0.2"
//! ```
//!
//! Each entry starts at the current end of the timeline, shifted by its
//! position offset. Every element sits at its `from` style until its tween
//! starts.

use std::str::FromStr;

use vitrine_core::VitrineError;

use crate::animation::{Easing, ElementStyle};
use crate::viewport::ElementId;

/// Where an entry is placed relative to the end of the timeline so far.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimelinePosition {
    /// Right after the current end.
    #[default]
    Sequential,
    /// Shifted from the current end by this many seconds (negative overlaps).
    Offset(f32),
}

impl FromStr for TimelinePosition {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Sequential);
        }
        let invalid = || VitrineError::InvalidPosition(s.to_string());
        let (sign, amount) = if let Some(rest) = s.strip_prefix("-=") {
            (-1.0, rest)
        } else if let Some(rest) = s.strip_prefix("+=") {
            (1.0, rest)
        } else {
            return Err(invalid());
        };
        let amount: f32 = amount.trim().parse().map_err(|_| invalid())?;
        Ok(Self::Offset(sign * amount))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    elements: Vec<ElementId>,
    from: ElementStyle,
    duration: f64,
    stagger: f64,
    easing: Easing,
    /// Offset from the timeline start, after the delay.
    start: f64,
}

/// An ordered set of `from` tweens.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    delay: f64,
    entries: Vec<Entry>,
    end: f64,
    started_at: Option<f64>,
}

impl Timeline {
    /// Creates an empty timeline that waits `delay` seconds once played.
    #[must_use]
    pub fn new(delay: f64) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Appends a tween of `elements` from `from` to rest.
    pub fn add(
        &mut self,
        elements: &[ElementId],
        from: ElementStyle,
        duration: f32,
        stagger: f32,
        easing: Easing,
        position: TimelinePosition,
    ) -> &mut Self {
        let start = match position {
            TimelinePosition::Sequential => self.end,
            TimelinePosition::Offset(offset) => (self.end + f64::from(offset)).max(0.0),
        };
        let spread = f64::from(stagger) * elements.len().saturating_sub(1) as f64;
        let duration = f64::from(duration.max(0.0));
        self.end = self.end.max(start + duration + spread);

        self.entries.push(Entry {
            elements: elements.to_vec(),
            from,
            duration,
            stagger: f64::from(stagger),
            easing,
            start,
        });
        self
    }

    /// Starts playback at `now`. Later calls do nothing.
    pub fn play(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Entry start offsets relative to the end of the delay.
    #[must_use]
    pub fn entry_starts(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.start).collect()
    }

    /// Length without the delay.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end
    }

    /// Returns true once every tween has finished.
    #[must_use]
    pub fn is_complete(&self, now: f64) -> bool {
        self.started_at
            .is_some_and(|at| now >= at + self.delay + self.end)
    }

    /// Styles of every element at `now`.
    #[must_use]
    pub fn sample(&self, now: f64) -> Vec<(ElementId, ElementStyle)> {
        let local = self.started_at.map(|at| now - at - self.delay);
        let mut styles = Vec::new();
        for entry in &self.entries {
            for (index, element) in entry.elements.iter().enumerate() {
                let style = match local {
                    None => entry.from,
                    Some(local) => {
                        let begin = entry.start + index as f64 * entry.stagger;
                        let t = if entry.duration > 0.0 {
                            ((local - begin) / entry.duration) as f32
                        } else if local >= begin {
                            1.0
                        } else {
                            0.0
                        };
                        entry.from.lerp(ElementStyle::REST, entry.easing.apply(t))
                    }
                };
                styles.push((*element, style));
            }
        }
        styles
    }

    /// The hero intro: title, typewriter line, the two buttons, the scroll hint.
    #[must_use]
    pub fn hero_intro(title: ElementId, typewriter: ElementId, buttons: &[ElementId], indicator: ElementId) -> Self {
        let mut timeline = Self::new(0.3);
        timeline
            .add(
                &[title],
                ElementStyle::offset(0.0, 30.0, 0.0),
                0.8,
                0.0,
                Easing::Power3Out,
                TimelinePosition::Sequential,
            )
            .add(
                &[typewriter],
                ElementStyle::offset(0.0, 20.0, 0.0),
                0.8,
                0.0,
                Easing::Power3Out,
                TimelinePosition::Offset(-0.4),
            )
            .add(
                buttons,
                ElementStyle::offset(0.0, 20.0, 0.0),
                0.6,
                0.2,
                Easing::Power3Out,
                TimelinePosition::Offset(-0.3),
            )
            .add(
                &[indicator],
                ElementStyle::offset(0.0, 0.0, 0.0),
                1.0,
                0.0,
                Easing::Power2Out,
                TimelinePosition::Offset(-0.2),
            );
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Timeline {
        Timeline::hero_intro(ElementId(1), ElementId(2), &[ElementId(3), ElementId(4)], ElementId(5))
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("-=0.4".parse::<TimelinePosition>().unwrap(), TimelinePosition::Offset(-0.4));
        assert_eq!("+=0.2".parse::<TimelinePosition>().unwrap(), TimelinePosition::Offset(0.2));
        assert_eq!("".parse::<TimelinePosition>().unwrap(), TimelinePosition::Sequential);
        assert!("0.4".parse::<TimelinePosition>().is_err());
    }

    #[test]
    fn test_hero_intro_layout() {
        let timeline = hero();
        let starts = timeline.entry_starts();
        for (actual, expected) in starts.iter().zip([0.0, 0.4, 0.9, 1.5]) {
            assert!((actual - expected).abs() < 1e-6, "{actual} vs {expected}");
        }
        assert!((timeline.duration() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_hidden_before_play() {
        let timeline = hero();
        for (_, style) in timeline.sample(100.0) {
            assert_eq!(style.opacity, 0.0);
        }
    }

    #[test]
    fn test_playback() {
        let mut timeline = hero();
        timeline.play(10.0);
        timeline.play(20.0);

        // Still in the delay
        let styles = timeline.sample(10.2);
        assert!(styles.iter().all(|(_, s)| s.opacity == 0.0));

        // Second button starts 0.2s after the first
        let styles = timeline.sample(10.3 + 1.0);
        assert!(styles[2].1.opacity > 0.0);
        assert_eq!(styles[3].1.opacity, 0.0);

        assert!(!timeline.is_complete(12.7));
        assert!(timeline.is_complete(12.81));
        assert!(timeline.sample(12.81).iter().all(|(_, s)| s.is_rest()));
    }
}
