//! Page sections.
//!
//! Each section mounts against a [`MountContext`], registers its reveals in
//! its own scope and owns whatever loops and listeners it starts. Dropping a
//! section releases all of it.

pub mod about;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod services;
pub mod tech_stack;

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{EventBus, FrameScheduler};
use vitrine_fx::{Direction, Easing, RevealConfig, RevealEngine};

use crate::config::SiteConfig;
use crate::layout::Layout;
use crate::locale::LanguageContext;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::{ProjectFilter, Projects};
pub use services::Services;
pub use tech_stack::TechStack;

/// Everything a section needs while mounting.
pub struct MountContext<'a> {
    /// Frame clock.
    pub scheduler: &'a FrameScheduler,
    /// Host events.
    pub bus: &'a EventBus,
    /// Shared reveal engine.
    pub engine: &'a Arc<Mutex<RevealEngine>>,
    /// Host document.
    pub layout: &'a dyn Layout,
    /// Current locale.
    pub language: &'a LanguageContext,
    /// Site configuration.
    pub config: &'a SiteConfig,
    /// Mount time.
    pub now: f64,
}

/// Section heading entrance: rises 30px over 0.8s.
pub(crate) fn heading(config: &SiteConfig) -> RevealConfig {
    config
        .reveal
        .clone()
        .direction(Direction::Up)
        .distance(30.0)
        .duration(0.8)
        .easing(Easing::Power3Out)
}

/// Section subtitle entrance: rises 20px over 0.8s, 0.2s after the heading.
pub(crate) fn subtitle(config: &SiteConfig) -> RevealConfig {
    heading(config).distance(20.0).delay(0.2)
}
