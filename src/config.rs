//! Form-level matrix configuration and input coercion.

pub const MAX_ROWS: u32 = 100;
pub const MAX_COLS: u32 = 100;
pub const MAX_HIGHLIGHT: u32 = 10_000;

/// Smallest accepted value for every field; also the fallback for junk input.
pub const MIN_VALUE: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixConfig {
    pub rows: u32,
    pub cols: u32,
    /// How many nearest cells light up when a cell is hovered.
    pub highlight_amount: u32,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            highlight_amount: 10,
        }
    }
}

impl MatrixConfig {
    /// Builds a config from raw form text.
    pub fn from_inputs(rows: &str, cols: &str, highlight_amount: &str) -> Self {
        Self {
            rows: parse_bounded(rows, MAX_ROWS),
            cols: parse_bounded(cols, MAX_COLS),
            highlight_amount: parse_bounded(highlight_amount, MAX_HIGHLIGHT),
        }
    }
}

/// Caps the text of a live input at `max`, leaving anything else untouched so
/// the user can keep typing.
pub fn cap_input(raw: &str, max: u32) -> String {
    match raw.trim().parse::<f64>() {
        Ok(v) if v > max as f64 => max.to_string(),
        _ => raw.to_string(),
    }
}

/// Coerces raw input text into `MIN_VALUE..=max`.
///
/// Decimals are truncated, values above `max` are capped, and empty or
/// unparsable text falls back to `MIN_VALUE`.
pub fn parse_bounded(raw: &str, max: u32) -> u32 {
    let Ok(v) = raw.trim().parse::<f64>() else {
        return MIN_VALUE;
    };
    if !v.is_finite() {
        return if v > 0.0 { max } else { MIN_VALUE };
    }
    let v = v.trunc().clamp(MIN_VALUE as f64, max as f64);
    v as u32
}
