//! Contact: particle network backdrop, copy-email button, social links.
//! Also carries the footer lines.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_fx::{ParticleNetworkHost, Surface};

use super::MountContext;
use crate::clipboard::{Clipboard, CopyButton};
use crate::content::{
    Social, CONTACT_SUBTITLE, CONTACT_TITLE, EMAIL, FOOTER_COPYRIGHT, FOOTER_RIGHTS, SOCIALS,
};
use crate::locale::Language;

/// Opacity the host applies to the particle canvas.
pub const CANVAS_OPACITY: f32 = 0.9;

/// Contact section.
pub struct Contact {
    particles: Option<ParticleNetworkHost>,
    copy: CopyButton,
}

impl Contact {
    /// Mounts the section. The particle network runs only if `surface` is
    /// given and has a paint context.
    #[must_use]
    pub fn mount(ctx: &MountContext<'_>, surface: Option<Arc<Mutex<dyn Surface>>>) -> Self {
        let particles = surface.and_then(|surface| {
            ParticleNetworkHost::mount(ctx.scheduler, ctx.bus, surface, ctx.config.particles.clone())
        });
        Self {
            particles,
            copy: CopyButton::new(EMAIL),
        }
    }

    /// Copies the email address. Failures are logged and reported as false.
    pub fn copy_email(&mut self, clipboard: &mut dyn Clipboard, now: f64) -> bool {
        self.copy.click(clipboard, now)
    }

    /// Expires the "copied" confirmation.
    pub fn update(&mut self, now: f64) {
        self.copy.update(now);
    }

    /// Text on the copy button.
    #[must_use]
    pub fn copy_label(&self, language: Language) -> &str {
        self.copy.label(language)
    }

    /// Returns true while the confirmation shows.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.copy.is_copied()
    }

    /// The running particle network, if mounted.
    #[must_use]
    pub fn particles(&self) -> Option<&ParticleNetworkHost> {
        self.particles.as_ref()
    }

    /// Social links in display order.
    #[must_use]
    pub fn socials(&self) -> &'static [Social] {
        &SOCIALS
    }

    /// Heading and subtitle.
    #[must_use]
    pub fn labels(&self, language: Language) -> [&'static str; 2] {
        [CONTACT_TITLE.get(language), CONTACT_SUBTITLE.get(language)]
    }

    /// Footer signature and rights line.
    #[must_use]
    pub fn footer(&self, language: Language) -> [&'static str; 2] {
        [FOOTER_COPYRIGHT, FOOTER_RIGHTS.get(language)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::SiteConfig;
    use crate::layout::StaticLayout;
    use crate::locale::LanguageContext;
    use vitrine_core::{EventBus, EventKind, FrameScheduler};
    use vitrine_fx::{RecordingSurface, RevealEngine};

    #[test]
    fn test_mount_copy_unmount() {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let language = LanguageContext::default();
        let config = SiteConfig::default();
        let layout = StaticLayout::new();
        let ctx = MountContext {
            scheduler: &scheduler,
            bus: &bus,
            engine: &engine,
            layout: &layout,
            language: &language,
            config: &config,
            now: 0.0,
        };

        let surface: Arc<Mutex<dyn Surface>> = Arc::new(Mutex::new(RecordingSurface::new(1280.0, 600.0)));
        let mut contact = Contact::mount(&ctx, Some(surface));
        assert!(contact.particles().is_some_and(ParticleNetworkHost::is_running));
        assert_eq!(bus.listener_count(EventKind::Resize), 1);

        let mut clipboard = MemoryClipboard::new();
        assert!(contact.copy_email(&mut clipboard, 1.0));
        assert_eq!(clipboard.contents(), Some(EMAIL));
        assert_eq!(contact.copy_label(Language::Es), "¡Copiado!");
        contact.update(3.0);
        assert_eq!(contact.copy_label(Language::Es), EMAIL);

        assert_eq!(contact.footer(Language::En)[1], "All rights reserved");
        drop(contact);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(bus.listener_count(EventKind::Resize), 0);
    }

    #[test]
    fn test_no_surface() {
        let scheduler = FrameScheduler::new();
        let bus = EventBus::new();
        let engine = Arc::new(Mutex::new(RevealEngine::new()));
        let language = LanguageContext::default();
        let config = SiteConfig::default();
        let layout = StaticLayout::new();
        let ctx = MountContext {
            scheduler: &scheduler,
            bus: &bus,
            engine: &engine,
            layout: &layout,
            language: &language,
            config: &config,
            now: 0.0,
        };

        let contact = Contact::mount(&ctx, None);
        assert!(contact.particles().is_none());
        assert_eq!(scheduler.pending(), 0);
    }
}
