//! Small site helpers: class lists, prices, contact links, validation.

use std::sync::LazyLock;

use regex::Regex;

/// Smooth-scroll targets stop this far above the section (fixed navbar).
pub const SCROLL_OFFSET: f32 = 80.0;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static MOBILE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini").ok());

/// Joins the non-empty class names with single spaces.
///
/// `None` and empty entries are skipped.
#[must_use]
pub fn class_names<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    classes
        .into_iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a USD amount the way `en-US` does: `$1,500` or `$1,500.00`.
#[must_use]
pub fn format_price(price: f64, show_decimals: bool) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let abs = price.abs();

    let (whole, cents) = if show_decimals {
        let total = (abs * 100.0).round() as u64;
        (total / 100, Some(total % 100))
    } else {
        (abs.round() as u64, None)
    };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match cents {
        Some(cents) => format!("{sign}${grouped}.{cents:02}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Keeps only the ASCII digits of a phone number.
#[must_use]
pub fn phone_for_whatsapp(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Builds a `wa.me` link with a prefilled, URL-encoded message.
#[must_use]
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone_for_whatsapp(phone),
        urlencoding::encode(message)
    )
}

/// Loose `local@domain.tld` check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// True if anything but whitespace remains.
#[must_use]
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True for phone and tablet user agents.
#[must_use]
pub fn is_mobile(user_agent: &str) -> bool {
    MOBILE_RE.as_ref().is_some_and(|re| re.is_match(user_agent))
}

/// Page offset to scroll to so an element whose top is `element_top`
/// (relative to the viewport) lands `offset` px below the top edge.
#[must_use]
pub fn scroll_target(element_top: f32, scroll_y: f32, offset: f32) -> f32 {
    element_top + scroll_y - offset
}

/// Trailing-edge debouncer driven by the frame clock.
///
/// Each [`call`](Self::call) replaces the pending value and restarts the
/// wait; [`poll`](Self::poll) hands the value out once the wait elapsed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer that waits `wait` seconds after the last call.
    #[must_use]
    pub const fn new(wait: f64) -> Self {
        Self { wait, pending: None }
    }

    /// Records a call at `now`.
    pub fn call(&mut self, value: T, now: f64) {
        self.pending = Some((value, now + self.wait));
    }

    /// Returns the last value if the wait has elapsed by `now`.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        match self.pending {
            Some((_, due)) if now >= due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Returns true while a call is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(class_names([Some("navbar"), None, Some(""), Some("scrolled")]), "navbar scrolled");
        assert_eq!(class_names([None, None]), "");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(150.0, false), "$150");
        assert_eq!(format_price(1500.0, false), "$1,500");
        assert_eq!(format_price(1_234_567.891, true), "$1,234,567.89");
        assert_eq!(format_price(49.5, false), "$50");
        assert_eq!(format_price(-20.0, true), "-$20.00");
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(phone_for_whatsapp("+58 (414) 511-6337"), "584145116337");
        assert_eq!(
            whatsapp_link("+584145116337", "Hi, I'm here"),
            "https://wa.me/584145116337?text=Hi%2C%20I%27m%20here"
        );
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_email("herasidesweb@gmail.com"));
        assert!(!is_valid_email("no at sign.com"));
        assert!(!is_valid_email("a@b"));
        assert!(is_not_empty("  x "));
        assert!(!is_not_empty(" \t\n"));
    }

    #[test]
    fn test_is_mobile() {
        assert!(is_mobile("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"));
        assert!(is_mobile("mozilla/5.0 (linux; android 14)"));
        assert!(!is_mobile("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0"));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(300.0, 1000.0, SCROLL_OFFSET), 1220.0);
    }

    #[test]
    fn test_debouncer_trailing_edge() {
        let mut debounce = Debouncer::new(0.3);
        debounce.call(1, 0.0);
        debounce.call(2, 0.2);
        assert_eq!(debounce.poll(0.4), None);
        assert_eq!(debounce.poll(0.5), Some(2));
        assert_eq!(debounce.poll(0.6), None);
        assert!(!debounce.is_pending());
    }
}
