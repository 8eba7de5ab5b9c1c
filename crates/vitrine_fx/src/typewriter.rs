//! Typewriter phrase cycler for the hero headline.
//!
//! Types a phrase one character per tick, holds it, deletes it, moves on to
//! the next phrase modulo the count. Driven by timestamps: [`Typewriter::advance`]
//! catches up on every tick that fell due since the last call.

use serde::Deserialize;

/// Tick intervals in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Delay between typed characters.
    pub typing: f64,
    /// Delay between deleted characters.
    pub deleting: f64,
    /// Hold time once a phrase is fully typed.
    pub pause: f64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing: 0.08,
            deleting: 0.05,
            pause: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Smallest tick, so zeroed intervals cannot spin the catch-up loop.
const MIN_INTERVAL: f64 = 0.001;

/// Cycles through phrases.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrases: Vec<String>,
    index: usize,
    /// Visible prefix length in characters.
    visible: usize,
    phase: Phase,
    next_at: Option<f64>,
}

impl Typewriter {
    /// Creates a typewriter showing nothing.
    #[must_use]
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config,
            phrases: phrases.into_iter().map(Into::into).collect(),
            index: 0,
            visible: 0,
            phase: Phase::Typing,
            next_at: None,
        }
    }

    /// Replaces the phrase set (locale switch).
    ///
    /// The phrase index is kept modulo the new count and the visible prefix
    /// is clamped to the new phrase.
    pub fn set_phrases<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        if self.phrases.is_empty() {
            self.index = 0;
            self.visible = 0;
            return;
        }
        self.index %= self.phrases.len();
        self.visible = self.visible.min(self.phrase_len());
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map_or(0, |phrase| phrase.chars().count())
    }

    fn interval(&self) -> f64 {
        let interval = match self.phase {
            Phase::Typing => self.config.typing,
            Phase::Holding => self.config.pause,
            Phase::Deleting => self.config.deleting,
        };
        interval.max(MIN_INTERVAL)
    }

    /// Time to type, hold and delete the current phrase.
    fn cycle(&self) -> f64 {
        let ticks = (self.phrase_len() + 1) as f64;
        ticks * self.config.typing.max(MIN_INTERVAL)
            + self.config.pause.max(MIN_INTERVAL)
            + ticks * self.config.deleting.max(MIN_INTERVAL)
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.visible < self.phrase_len() {
                    self.visible += 1;
                } else {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                if self.visible > 0 {
                    self.visible -= 1;
                } else {
                    self.phase = Phase::Typing;
                    self.index = (self.index + 1) % self.phrases.len();
                }
            }
        }
    }

    /// Runs every tick due at or before `now`. Returns true if the text changed.
    ///
    /// A gap longer than a whole cycle (a backgrounded tab resuming) is not
    /// replayed: the cycler resumes from where it stopped.
    pub fn advance(&mut self, now: f64) -> bool {
        if self.phrases.is_empty() || !now.is_finite() {
            return false;
        }
        let mut next_at = match self.next_at {
            Some(at) => at,
            None => now + self.interval(),
        };
        if now - next_at > self.cycle() {
            tracing::debug!("typewriter skipped {:.1}s of ticks", now - next_at);
            next_at = now;
        }

        let before = (self.index, self.visible);
        while next_at <= now {
            self.step();
            next_at += self.interval();
        }
        self.next_at = Some(next_at);
        before != (self.index, self.visible)
    }

    /// Text currently shown.
    #[must_use]
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.visible) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Index of the current phrase.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Returns true while characters are being removed.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }
}
