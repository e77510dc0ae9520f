//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet die aktive Face weiter.
pub fn cycle(state: &mut AppState) {
    use_cases::selection::cycle_selection(state);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
