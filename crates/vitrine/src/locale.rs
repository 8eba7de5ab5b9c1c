//! Locale selection.
//!
//! Two locales, Spanish by default. [`LanguageContext`] is passed explicitly
//! to whatever needs it; clones share the same selection.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use vitrine_core::VitrineError;

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// English.
    En,
}

impl Language {
    /// Two-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// The other locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }
}

impl FromStr for Language {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            _ => Err(VitrineError::UnknownLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = VitrineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug)]
struct LanguageState {
    language: Language,
    /// Bumped on every change.
    revision: u64,
}

/// Shared locale selection.
#[derive(Debug, Clone)]
pub struct LanguageContext {
    state: Arc<RwLock<LanguageState>>,
}

impl LanguageContext {
    /// Creates a context with an initial locale.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            state: Arc::new(RwLock::new(LanguageState { language, revision: 0 })),
        }
    }

    /// Current locale.
    #[must_use]
    pub fn get(&self) -> Language {
        self.state.read().language
    }

    /// Selects a locale.
    pub fn set(&self, language: Language) {
        let mut state = self.state.write();
        if state.language != language {
            state.language = language;
            state.revision += 1;
            tracing::info!("language set to {}", language);
        }
    }

    /// Switches to the other locale and returns it.
    pub fn toggle(&self) -> Language {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Change counter; differs from an earlier reading once the locale changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!(matches!("fr".parse::<Language>(), Err(VitrineError::UnknownLocale(_))));
    }

    #[test]
    fn test_context_shared_between_clones() {
        let context = LanguageContext::default();
        let other = context.clone();
        assert_eq!(context.get(), Language::Es);

        assert_eq!(other.toggle(), Language::En);
        assert_eq!(context.get(), Language::En);
        assert_eq!(context.revision(), 1);

        context.set(Language::En);
        assert_eq!(context.revision(), 1);
    }
}
