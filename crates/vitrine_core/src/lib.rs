//! # VITRINE Core
//!
//! Host-agnostic primitives every visual effect is built on:
//! - A frame scheduler (the "next frame" primitive) with cancellable handles
//! - Scoped frame loops that cancel themselves when dropped
//! - A host event bus (resize, scroll, pointer) with listener subscriptions
//! - Geometry types
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         HOST                                  │
//! │   frame clock ──┐      resize/scroll/pointer ──┐              │
//! └─────────────────┼──────────────────────────────┼──────────────┘
//!                   ↓                              ↓
//!            FrameScheduler                   EventQueue
//!                   ↓                              ↓
//!         FrameLoop guards                  Subscriptions
//!                   ↓                              ↓
//!              effects (particles, reveal, counters, ...)
//! ```
//!
//! Everything runs cooperatively on one thread. Guards are `Send` so a host
//! may still park them wherever it likes.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod events;
pub mod math;
pub mod schedule;

pub use error::{VitrineError, VitrineResult};
pub use events::{EventBus, EventKind, EventQueue, HostEvent, Subscription};
pub use math::{lerp, Rect, Vec2, Vec3};
pub use schedule::{FrameHandle, FrameLoop, FrameScheduler, LoopControl};
