//! # VITRINE Effects
//!
//! Every moving part of the portfolio page, independent of any host:
//! - Particle network behind the contact section
//! - One-shot scroll reveals, staggered groups, animated counters
//! - Hero intro timeline and typewriter
//! - Cursor glow, floating 3D scene, marquee, parallax, hover
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                       EFFECT PIPELINE                             │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  Host events → Subscriptions → effect state                       │
//! │  Viewport    → RevealEngine::observe → Unarmed → Triggered        │
//! │  Frame clock → FrameLoops → tick/step → ElementStyle / Paint      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Effects never see text content: they only move, fade and scale whatever
//! element handles they are given.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod counter;
pub mod glow;
pub mod interaction;
pub mod marquee;
pub mod particles;
pub mod reveal;
pub mod scene;
pub mod style;
pub mod surface;
pub mod timeline;
pub mod typewriter;
pub mod viewport;

pub use animation::{Animation, Easing, ElementStyle};
pub use counter::{AnimatedCounter, Counter};
pub use glow::{CursorGlow, GlowFrame};
pub use interaction::{Hover, Parallax};
pub use marquee::{Marquee, MarqueeDirection};
pub use particles::{NetworkConfig, Particle, ParticleNetwork, ParticleNetworkHost};
pub use reveal::{Direction, RevealConfig, RevealEngine, RevealId, RevealScope, TriggerState};
pub use scene::{FloatingShape, Scene, SceneHost, ShapeKind};
pub use style::Color;
pub use surface::{CommandBuffer, DrawCommand, Paint, RecordingSurface, Surface};
pub use timeline::{Timeline, TimelinePosition};
pub use typewriter::{Typewriter, TypewriterConfig};
pub use viewport::{ElementId, TriggerStart, Viewport};
