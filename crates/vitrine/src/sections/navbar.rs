//! Fixed navbar: background once the page scrolls, mobile menu.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::{EventKind, HostEvent, Subscription};

use super::MountContext;
use crate::content::{BRAND, NAV_ITEMS};
use crate::layout::Layout;
use crate::locale::Language;
use crate::utils::{class_names, scroll_target, SCROLL_OFFSET};

/// Page offset past which the navbar gets its background.
pub const SCROLLED_THRESHOLD: f32 = 20.0;

#[derive(Debug, Default)]
struct NavbarState {
    scrolled: bool,
    menu_open: bool,
}

/// Navbar state.
pub struct Navbar {
    state: Arc<Mutex<NavbarState>>,
    _scroll: Subscription,
}

impl Navbar {
    /// Mounts the navbar and starts following the page scroll.
    #[must_use]
    pub fn mount(ctx: &MountContext<'_>) -> Self {
        let state = Arc::new(Mutex::new(NavbarState::default()));
        let scroll = {
            let state = Arc::clone(&state);
            ctx.bus.subscribe(EventKind::Scroll, move |event| {
                if let HostEvent::Scroll { y } = *event {
                    state.lock().scrolled = y > SCROLLED_THRESHOLD;
                }
            })
        };
        Self { state, _scroll: scroll }
    }

    /// Returns true once the page has scrolled past the threshold.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.state.lock().scrolled
    }

    /// Opens or closes the mobile menu.
    pub fn toggle_menu(&self) {
        let mut state = self.state.lock();
        state.menu_open = !state.menu_open;
    }

    /// Closes the mobile menu.
    pub fn close_menu(&self) {
        self.state.lock().menu_open = false;
    }

    /// Returns true while the mobile menu is open.
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.state.lock().menu_open
    }

    /// The body must not scroll while the menu covers it.
    #[must_use]
    pub fn body_scroll_locked(&self) -> bool {
        self.is_menu_open()
    }

    /// Root element classes.
    #[must_use]
    pub fn class_list(&self) -> String {
        let state = self.state.lock();
        class_names([
            Some("navbar"),
            state.scrolled.then_some("navbar-scrolled"),
            state.menu_open.then_some("menu-open"),
        ])
    }

    /// Brand text.
    #[must_use]
    pub fn brand(&self) -> &'static str {
        BRAND
    }

    /// `(href, label)` pairs in display order.
    #[must_use]
    pub fn links(&self, language: Language) -> Vec<(&'static str, &'static str)> {
        NAV_ITEMS.iter().map(|item| (item.href, item.label.get(language))).collect()
    }

    /// Label of the language switch: the current code in capitals.
    #[must_use]
    pub fn language_label(&self, language: Language) -> String {
        language.code().to_uppercase()
    }

    /// Follows a link: closes the menu and returns the page offset to scroll
    /// to, if the section exists.
    pub fn navigate(&self, layout: &dyn Layout, href: &str, scroll_y: f32) -> Option<f32> {
        self.close_menu();
        let (_, rect) = layout.query(href)?;
        // Rect is in document space; scroll_target expects viewport space
        Some(scroll_target(rect.y - scroll_y, scroll_y, SCROLL_OFFSET).max(0.0))
    }
}
