//! Centralized constants for the application
//!
//! This module contains all magic numbers and configuration constants
//! used throughout the application, making them easy to find and modify.

// ============================================================================
// Application Info
// ============================================================================

/// Application name displayed in header
pub const DISPLAY_NAME: &str = "Dry Kitchen Ingredient Tracker";

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name used under the platform config dir
pub const CONFIG_DIR_NAME: &str = "spice-tracker";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file written when a log directory is configured
pub const LOG_FILE_NAME: &str = "spice_tracker.log";

// ============================================================================
// Gauge Bounds (grams)
// ============================================================================

/// Weight that fills the gauge completely
pub const MAX_WEIGHT: f64 = 500.0;

/// Weight at the left edge of the gauge
pub const MIN_WEIGHT: f64 = 0.0;

/// Space kept free at the right edge for the tracked-weight label
pub const LABEL_RESERVE_PX: f64 = 50.0;

/// Shown when a threshold fails validation
pub const THRESHOLD_ERROR_MESSAGE: &str =
    "Threshold must be a whole number between 0 and 500 grams.";

// ============================================================================
// Terminal Geometry
// ============================================================================

/// Virtual pixels per terminal cell when mapping gauge geometry to columns
pub const PIXELS_PER_CELL: f64 = 8.0;

/// Smallest gauge width in cells that still renders usefully
pub const MIN_BAR_CELLS: usize = 10;

/// Largest configurable gauge width in cells
pub const MAX_BAR_CELLS: usize = 500;

/// Columns left of the gauge (indent)
pub const BAR_LEFT_MARGIN: usize = 2;

/// Screen rows consumed by a single ingredient block
pub const ROWS_PER_INGREDIENT: usize = 4;

/// Lines taken by header and footer
pub const VISIBLE_ROWS_OVERHEAD: usize = 4;

/// Input poll interval for the main loop in milliseconds
pub const POLL_INTERVAL_MS: u64 = 250;

// ============================================================================
// UI Dialog Dimensions
// ============================================================================

/// Width of the help dialog box
pub const HELP_DIALOG_WIDTH: usize = 52;

/// Width of the key column in help dialog
pub const HELP_KEY_COL_WIDTH: usize = 14;
