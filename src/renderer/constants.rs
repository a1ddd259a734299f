//! Default parameters and layout ratios for chord diagrams.

// ── Board ───────────────────────────────────────────────────────────
pub const DEFAULT_NUM_STRINGS: u32 = 6;
pub const DEFAULT_NUM_FRETS: u32 = 5;
pub const DEFAULT_WIDTH: f64 = 100.0;
pub const DEFAULT_HEIGHT: f64 = 120.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Share of the box used by the fretboard itself; the rest holds tuning
/// labels, position numbers and markers hanging over the edges.
pub(super) const BOARD_SCALE: f64 = 0.75;
pub(super) const BOARD_MARGIN: f64 = 0.15;

// ── Derived metrics (divisors of the board width/height) ─────────────
pub(super) const CIRCLE_RADIUS_DIV: f64 = 20.0;
pub(super) const BARRE_RADIUS_DIV: f64 = 25.0;
pub(super) const FONT_SIZE_DIV: f64 = 8.0;
pub(super) const BAR_SHIFT_DIV: f64 = 28.0;
pub(super) const BRIDGE_STROKE_DIV: f64 = 36.0;

// ── Finger labels ───────────────────────────────────────────────────
pub(super) const LABEL_FONT_SCALE: f64 = 0.55;
pub(super) const LABEL_Y_SHIFT: f64 = 0.66;
pub(super) const LABEL_STROKE_WIDTH: f64 = 0.7;
pub(super) const TEXT_STROKE_WIDTH: f64 = 1.0;

// ── Colors & fonts ──────────────────────────────────────────────────
pub const DEFAULT_COLOR: &str = "#666";
pub const DEFAULT_BG_COLOR: &str = "#fff";
pub const DEFAULT_LABEL_COLOR: &str = "#fff";
pub const DEFAULT_FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\"";
pub const DEFAULT_FONT_STYLE: &str = "light";
pub const DEFAULT_FONT_WEIGHT: &str = "100";
pub const DEFAULT_LABEL_WEIGHT: &str = "100";

/// Mark drawn above a muted string.
pub(super) const MUTE_GLYPH: &str = "X";
