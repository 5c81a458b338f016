//! Display formatting and clock decisions.

use chrono::Timelike;

use crate::config;

/// Format an `H:M` time string for display: `"9:5"` becomes `"9:5h"`.
///
/// Anything that does not look like `H:M` is returned unchanged, as a safe
/// fallback for strings assembled elsewhere.
pub fn format_time(raw: &str) -> String {
    match raw.split_once(':') {
        Some((hours, minutes))
            if !hours.is_empty() && !minutes.is_empty() && !minutes.contains(':') =>
        {
            format!("{}:{}h", hours, minutes)
        }
        _ => raw.to_string(),
    }
}

/// Compose a page title carrying a notification count.
///
/// The base title is whatever precedes the first `" - "` separator; a
/// positive count is shown as a `(n)` prefix.
pub fn compose_title(current: &str, count: u32) -> String {
    let base = current.split(" - ").next().unwrap_or(current);
    if count > 0 {
        format!("({}) {}", count, base)
    } else {
        base.to_string()
    }
}

/// Cancellation window decision for a given local hour.
pub fn cancel_open_at(hour: u32) -> bool {
    hour < config::CANCEL_CUTOFF_HOUR
}

/// Whether slot cancellation is still open on the local clock.
pub fn can_cancel() -> bool {
    cancel_open_at(chrono::Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_appends_hour_suffix() {
        assert_eq!(format_time("9:5"), "9:5h");
        assert_eq!(format_time("18:00"), "18:00h");
    }

    #[test]
    fn test_format_time_leaves_unparseable_input_alone() {
        assert_eq!(format_time("bad-input"), "bad-input");
        assert_eq!(format_time(""), "");
        assert_eq!(format_time(":30"), ":30");
        assert_eq!(format_time("12:"), "12:");
    }

    #[test]
    fn test_compose_title_with_count() {
        assert_eq!(compose_title("Check-in - Galpão TM", 3), "(3) Check-in");
    }

    #[test]
    fn test_compose_title_without_count_strips_suffix() {
        assert_eq!(compose_title("Check-in - Galpão TM", 0), "Check-in");
        assert_eq!(compose_title("Check-in", 0), "Check-in");
    }

    #[test]
    fn test_cancel_window_boundary() {
        assert!(cancel_open_at(0));
        assert!(cancel_open_at(14));
        assert!(!cancel_open_at(15));
        assert!(!cancel_open_at(23));
    }
}
