//! Handler für Face-Befehle.

use crate::app::use_cases;
use crate::app::AppState;

/// Schließt die offene Face.
pub fn close(state: &mut AppState) {
    use_cases::shapes::close_shape(state);
}

/// Beginnt eine neue Face.
pub fn new_shape(state: &mut AppState) {
    use_cases::shapes::new_shape(state);
}

/// Löscht den aktiven Punkt bzw. die aktive Face.
pub fn delete_active(state: &mut AppState) {
    let faces_before = state.face_count();
    use_cases::shapes::delete_active(state);
    if state.face_count() < faces_before {
        log::info!("{} Faces verbleibend", state.face_count());
    }
}

/// Verwirft alle Faces.
pub fn reset(state: &mut AppState) {
    use_cases::shapes::reset(state);
}
