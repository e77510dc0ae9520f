//! Use-Cases für die aktive Auswahl ohne Geometrie-Änderung.

use crate::AppState;

/// Schaltet die aktive Face zyklisch auf den nächsten Index weiter.
///
/// Ohne aktive Face beginnt der Zyklus bei Face 0. Bei leerem Store wirkungslos.
pub fn cycle_selection(state: &mut AppState) {
    let count = state.face_count();
    if count == 0 {
        return;
    }

    let next = state
        .selection
        .active
        .face()
        .map_or(0, |face| (face + 1) % count);
    state.selection.active.set_face(next);
    log::debug!("Auswahl weitergeschaltet auf Face {}", next);
}

/// Hebt Hover und aktive Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
    state.editor.edge_target = None;
}
