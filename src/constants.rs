// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants used by the logger and the progress widgets.
// - RESET / TIME_* codes: fixed escapes around the colorized time prefix
// - DELIMITER: separates the rendered prefix from the streamed text
// - ENV_*: environment keys read by the configuration layer

/// Resets every SGR attribute.
pub const RESET: &str = "\x1b[0;0m";

/// Color of the `D` / `T` markers inside a colorized time prefix.
pub const TIME_MARKER: &str = "\x1b[0;34m";

/// Color of the date and clock values inside a colorized time prefix.
pub const TIME_VALUE: &str = "\x1b[0;96m";

/// Color of the call-site and thread segments.
pub const LOCATION: &str = "\x1b[0;34m";

/// Placed between the prefix segments and the streamed text.
pub const DELIMITER: &str = "‣ ";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

pub const DEFAULT_BAR_WIDTH: u64 = 30;
pub const DEFAULT_SIMPLE_BAR_WIDTH: u64 = 60;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

pub const ENV_LEVEL: &str = "CONKIT_LEVEL";
pub const ENV_TIME: &str = "CONKIT_TIME";
pub const ENV_STATUS: &str = "CONKIT_STATUS";
pub const ENV_LOCATION: &str = "CONKIT_LOCATION";
pub const ENV_THREAD: &str = "CONKIT_THREAD";
pub const ENV_PALETTE: &str = "CONKIT_PALETTE";
pub const ENV_SINK: &str = "CONKIT_SINK";
