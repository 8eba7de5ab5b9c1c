//! Copy-to-clipboard.
//!
//! The host clipboard sits behind [`Clipboard`]. [`CopyButton`] swallows
//! failures after logging them; the page never sees a clipboard error.

use vitrine_core::{VitrineError, VitrineResult};

use crate::content::CONTACT_COPIED;
use crate::locale::Language;

/// How long the confirmation stays visible, in seconds.
pub const COPIED_DURATION: f64 = 2.0;

/// Host clipboard.
pub trait Clipboard {
    /// Replaces the clipboard text.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::ClipboardDenied`] if the host refuses.
    fn write_text(&mut self, text: &str) -> VitrineResult<()>;
}

/// In-memory clipboard for tests and the preview binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: Option<String>,
}

impl MemoryClipboard {
    /// An empty clipboard that accepts writes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write with `reason`.
    #[must_use]
    pub fn denying(reason: impl Into<String>) -> Self {
        Self {
            contents: None,
            denied: Some(reason.into()),
        }
    }

    /// Current contents.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> VitrineResult<()> {
        if let Some(reason) = &self.denied {
            return Err(VitrineError::ClipboardDenied { reason: reason.clone() });
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copy button with a transient confirmation state.
#[derive(Debug, Clone)]
pub struct CopyButton {
    text: String,
    copied_until: Option<f64>,
}

impl CopyButton {
    /// A button that copies `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            copied_until: None,
        }
    }

    /// Copies the text at `now`. Returns true on success.
    ///
    /// A repeated click restarts the confirmation window.
    pub fn click(&mut self, clipboard: &mut dyn Clipboard, now: f64) -> bool {
        match clipboard.write_text(&self.text) {
            Ok(()) => {
                self.copied_until = Some(now + COPIED_DURATION);
                true
            }
            Err(err) => {
                tracing::error!("Failed to copy email: {}", err);
                false
            }
        }
    }

    /// Clears the confirmation once it has expired.
    pub fn update(&mut self, now: f64) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    /// Returns true while the confirmation is showing.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// What the button shows: the confirmation, or the text itself.
    #[must_use]
    pub fn label(&self, language: Language) -> &str {
        if self.is_copied() {
            CONTACT_COPIED.get(language)
        } else {
            &self.text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_and_reset() {
        let mut clipboard = MemoryClipboard::new();
        let mut button = CopyButton::new("herasidesweb@gmail.com");

        assert!(button.click(&mut clipboard, 1.0));
        assert_eq!(clipboard.contents(), Some("herasidesweb@gmail.com"));
        assert_eq!(button.label(Language::En), "Copied!");
        assert_eq!(button.label(Language::Es), "¡Copiado!");

        button.update(2.9);
        assert!(button.is_copied());
        button.update(3.0);
        assert!(!button.is_copied());
        assert_eq!(button.label(Language::En), "herasidesweb@gmail.com");
    }

    #[test]
    fn test_denied_clipboard_is_swallowed() {
        let mut clipboard = MemoryClipboard::denying("NotAllowedError");
        let mut button = CopyButton::new("x@y.z");

        assert!(!button.click(&mut clipboard, 0.0));
        assert!(!button.is_copied());
        assert_eq!(clipboard.contents(), None);
    }
}
