//! Shared selectors, timings, and colors for the page enhancements.

// ── Selectors ───────────────────────────────────────────────────

/// Flash messages rendered by the server.
pub const ALERT_SELECTOR: &str = ".alert";

/// The upload field whose file name gets previewed.
pub const FILE_INPUT_SELECTOR: &str = "input[type='file']";

/// Primary password field.
pub const PASSWORD_SELECTOR: &str = "input[name='password']";

/// Password confirmation field.
pub const CONFIRM_SELECTOR: &str = "input[name='confirm_password']";

/// Same-page anchor links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Button-styled elements that get the ripple.
pub const BUTTON_SELECTOR: &str = ".btn";

// ── Element ids, classes, attributes ────────────────────────────

/// Id of the file name label, reused if the server already rendered one.
pub const FILE_LABEL_ID: &str = "file-name";

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "hub-fx-styles";

/// Body class that switches the page to the light palette.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Class of the transient ripple overlay.
pub const RIPPLE_CLASS: &str = "ripple";

/// Classes of the floating theme toggle button.
pub const TOGGLE_BUTTON_CLASS: &str = "btn btn-outline-light position-fixed";

/// Body attribute holding optional JSON configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-hub-fx-config";

/// Body attribute marking the document as already enhanced.
pub const INSTALLED_ATTRIBUTE: &str = "data-hub-fx-installed";

// ── Timing (milliseconds) ───────────────────────────────────────

/// How long an alert stays fully visible.
pub const ALERT_DELAY_MS: u32 = 4000;

/// Time between fading an alert and removing it.
pub const ALERT_FADE_MS: u32 = 600;

/// Lifetime of a ripple overlay.
pub const RIPPLE_MS: u32 = 600;

/// Duration of the `ripple-effect` CSS animation. A ripple must live at least this long.
pub const RIPPLE_ANIMATION_MS: u32 = 600;

// ── Password strength ───────────────────────────────────────────

/// Number of strength predicates, and so the maximum score.
pub const MAX_STRENGTH: u8 = 5;

/// Minimum length that earns the length point.
pub const STRONG_LENGTH: usize = 8;

/// Characters that count as symbols.
pub const STRENGTH_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Bar colors from weakest to strongest.
pub const STRENGTH_PALETTE: [&str; 5] = ["#ff4e4e", "#ff8c00", "#fcd307", "#8efc7d", "#00e676"];

/// Bar background when no palette entry applies.
pub const TRANSPARENT: &str = "transparent";

// ── Confirm password ────────────────────────────────────────────

/// Border color when the confirmation matches.
pub const VALID_COLOR: &str = "#4caf50";

/// Border color when the confirmation differs.
pub const INVALID_COLOR: &str = "#ff6b6b";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Toggle icon shown in light mode.
pub const LIGHT_ICON: &str = "☀️";

/// Toggle icon shown in dark mode.
pub const DARK_ICON: &str = "🌙";

/// Default console log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
