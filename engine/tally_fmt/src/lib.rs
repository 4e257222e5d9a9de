//! Tally Fmt - Numeric formatting for the Tally calculator display.
//!
//! Two responsibilities, both pure:
//!
//! - [`format_number`]: project a finite `f64` into a bounded-length
//!   display string, falling back from the natural decimal form to
//!   12-fraction rounding and finally to exponential notation.
//! - [`parse_display`]: read the display text back as a number. The
//!   display is host-controlled and always well-formed in practice, so
//!   malformed text defensively reads as `0` rather than failing.
//!
//! The projection `format_number ∘ parse_display` is idempotent on its
//! own image; `tests/property_tests.rs` pins that down.

/// Maximum number of characters the display holds, sign excluded.
pub const MAX_DISPLAY_LEN: usize = 16;

/// Error text produced when a non-finite value reaches the formatter.
///
/// Evaluation classifies non-finite results before formatting, so this
/// is a defensive backstop, not a normal code path.
pub const NON_FINITE_TEXT: &str = "Error";

/// Formats a value for the display.
///
/// Fallback chain: natural decimal form, then rounding to 12 fractional
/// digits with trailing zeros trimmed, then exponential notation with 8
/// fractional digits. Each step is taken only when the previous one
/// exceeds [`MAX_DISPLAY_LEN`] characters (sign excluded).
pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return NON_FINITE_TEXT.to_string();
    }
    if x == 0.0 {
        // Normalizes -0.0; the display never shows a signed zero.
        return "0".to_string();
    }

    let natural = format!("{x}");
    if significant_len(&natural) <= MAX_DISPLAY_LEN {
        return natural;
    }

    // The fixed form loses when it overflows the display, and also when
    // 12-fraction rounding collapses a tiny magnitude to zero outright.
    let rounded = trim_fraction(format!("{x:.12}"));
    if significant_len(&rounded) <= MAX_DISPLAY_LEN && parse_display(&rounded) != 0.0 {
        return rounded;
    }

    // Rust's `{:e}` never emits an explicit `+` on the exponent, which
    // is exactly the normalized form the display wants.
    format!("{x:.8e}")
}

/// Reads display text back as a number.
///
/// Partial scientific entry (`"5E"`, `"5E-"`) reads as its mantissa;
/// anything else that fails to parse, and any non-finite parse, reads
/// as `0`.
pub fn parse_display(text: &str) -> f64 {
    trim_partial_exponent(text)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Length of the numeral, not counting a leading sign.
fn significant_len(text: &str) -> usize {
    text.strip_prefix('-').unwrap_or(text).len()
}

/// Drops a trailing exponent marker (and a bare exponent sign after it)
/// left over from interrupted scientific entry.
fn trim_partial_exponent(text: &str) -> &str {
    if let Some(head) = text.strip_suffix(['+', '-']) {
        if let Some(mantissa) = head.strip_suffix(['E', 'e']) {
            return mantissa;
        }
        return text;
    }
    text.strip_suffix(['E', 'e']).unwrap_or(text)
}

/// Trims trailing zeros (and a then-dangling point) from a fixed-point
/// rendering.
fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
