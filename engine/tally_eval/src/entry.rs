//! Raw display entry: digits, decimal point, sign, backspace, and
//! scientific-notation entry.
//!
//! These edit the display buffer as literal keystrokes. Normalization
//! through the formatter happens only at commit points, so the exact
//! typed text survives until evaluation.

use tally_fmt::MAX_DISPLAY_LEN;

use crate::state::Calculator;

/// The scientific-notation entry marker.
pub(crate) const EXPONENT_MARKER: char = 'E';

impl Calculator {
    pub(crate) fn press_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        let ch = char::from(b'0' + digit);
        if self.overwrite {
            self.display.clear();
            self.display.push(ch);
            self.overwrite = false;
            return;
        }
        if self.significant_len() >= MAX_DISPLAY_LEN {
            return;
        }
        if self.display == "0" {
            self.display.clear();
        }
        self.display.push(ch);
    }

    /// Inserts the decimal point. No-op if the mantissa already has
    /// one, or during exponent entry (exponents are integral).
    pub(crate) fn press_decimal(&mut self) {
        if self.overwrite {
            self.display.clear();
            self.display.push_str("0.");
            self.overwrite = false;
            return;
        }
        if self.display.contains('.') || self.display.contains(EXPONENT_MARKER) {
            return;
        }
        self.display.push('.');
    }

    /// Flips the sign: the mantissa's leading `-` normally, the
    /// exponent's sign once an exponent marker is present. No-op on
    /// `"0"`.
    pub(crate) fn press_toggle_sign(&mut self) {
        if self.display == "0" {
            return;
        }
        if let Some(marker) = self.display.find(EXPONENT_MARKER) {
            if self.display[marker + 1..].starts_with('-') {
                self.display.remove(marker + 1);
            } else {
                self.display.insert(marker + 1, '-');
            }
            return;
        }
        if self.display.starts_with('-') {
            self.display.remove(0);
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Deletes the last character. Under overwrite the buffer holds a
    /// committed result, not keystrokes, so the display resets to `"0"`
    /// instead of editing stale text.
    pub(crate) fn press_backspace(&mut self) {
        if self.overwrite {
            self.reset_display();
            self.overwrite = false;
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.reset_display();
        }
    }

    /// Begins scientific-notation entry: appends the exponent marker,
    /// or seeds `"1E"` under overwrite. No-op if a marker is already
    /// present.
    pub(crate) fn press_exponent(&mut self) {
        if self.overwrite {
            self.display.clear();
            self.display.push_str("1E");
            self.overwrite = false;
            return;
        }
        if self.display.contains(EXPONENT_MARKER) {
            return;
        }
        self.display.push(EXPONENT_MARKER);
    }

    pub(crate) fn reset_display(&mut self) {
        self.display.clear();
        self.display.push('0');
    }
}
