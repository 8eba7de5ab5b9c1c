//! # VITRINE
//!
//! The portfolio page: bilingual content, section wiring and the page
//! lifecycle on top of the effects in `vitrine_fx`.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                             PAGE                                  │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  Navbar   scroll state, mobile menu, anchor navigation            │
//! │  Hero     intro timeline, typewriter, floating scene              │
//! │  About    heading reveals, metric cards, counters                 │
//! │  Tech     category labels, two hover-paused marquees              │
//! │  Projects category filter, replayed card stagger                  │
//! │  Services staggered cards, hover lift, quote links                │
//! │  Contact  particle network, copy-email button, socials            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns the document. It describes geometry through
//! [`layout::Layout`], forwards input as `HostEvent`s and reads element
//! styles back once per frame.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod clipboard;
pub mod config;
pub mod content;
pub mod layout;
pub mod locale;
pub mod page;
pub mod sections;
pub mod utils;

pub use clipboard::{Clipboard, CopyButton, MemoryClipboard};
pub use config::{PreviewConfig, SiteConfig};
pub use layout::{Layout, StaticLayout};
pub use locale::{Language, LanguageContext};
pub use page::{HostContext, Page, Sections};
pub use sections::ProjectFilter;
