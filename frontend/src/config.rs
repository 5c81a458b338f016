//! Application configuration.
//!
//! Centralized constants for the check-in UI layer. The pages carry no
//! runtime configuration; everything the layer needs is fixed at build time.

/// Minimum accepted length of a trimmed display name.
pub const MIN_NAME_LEN: usize = 2;

/// Inclusive lower bound of the credit range accepted on registration.
pub const CREDITS_MIN: i32 = 0;

/// Inclusive upper bound of the credit range.
pub const CREDITS_MAX: i32 = 20;

/// How long a programmatic or success banner stays on screen (ms).
pub const ALERT_DISMISS_MS: u32 = 3_000;

/// How long a server-rendered error banner stays on screen (ms).
pub const ERROR_DISMISS_MS: u32 = 5_000;

/// Fallback delay before a busy submit button is re-enabled (ms).
///
/// Covers the case where the server answers without a full page reload.
pub const SUBMIT_RESET_MS: u32 = 5_000;

/// Busy label shown on a submit button while a submission is in flight.
pub const BUSY_LABEL: &str = "Processando...";

/// Interval of the cosmetic slot-status refresh cue (ms).
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

/// How long a badge stays dimmed during the refresh cue (ms).
pub const BADGE_PULSE_MS: u32 = 500;

/// Path fragment of the page showing the user's own slot status.
pub const USER_PANEL_PATH: &str = "painel_usuario";

/// Local-storage key holding the last used display name.
pub const LAST_NAME_KEY: &str = "lastUserName";

/// Hour of day (local clock) from which cancellation is closed.
pub const CANCEL_CUTOFF_HOUR: u32 = 15;

/// Selector of the container that receives programmatic banners.
pub const ALERT_CONTAINER_SELECTOR: &str = ".container";

/// Selector of the badges pulsed by the refresh cue.
pub const STATUS_BADGE_SELECTOR: &str = ".card .badge";

/// Locale used for formatted clock strings.
pub const DISPLAY_LOCALE: &str = "pt-BR";
