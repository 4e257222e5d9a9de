//! The read-only projection a host renders after each event.

use tally_ir::AngleMode;

use crate::state::Calculator;

/// Snapshot of everything a presentation layer needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    /// The display line: the current numeral, or the error message
    /// while [`ViewModel::is_error`] is set.
    pub display_text: String,
    pub is_error: bool,
    pub angle_mode: AngleMode,
    pub inverse_active: bool,
    pub has_memory: bool,
    /// Cosmetic `"operand operator"` echo of the pending chain.
    pub history: String,
}

impl Calculator {
    /// Projects the current state for rendering.
    pub fn view(&self) -> ViewModel {
        ViewModel {
            display_text: match self.error {
                Some(kind) => kind.message().to_string(),
                None => self.display.clone(),
            },
            is_error: self.error.is_some(),
            angle_mode: self.angle_mode,
            inverse_active: self.inverse_active,
            has_memory: self.memory.is_some(),
            history: self.history.clone(),
        }
    }
}
