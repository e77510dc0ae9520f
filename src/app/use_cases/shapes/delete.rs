//! Use-Case: aktiven Punkt bzw. aktive Face löschen.

use crate::core::Face;
use crate::AppState;

/// Löscht den aktiven Punkt oder, ohne aktiven Punkt, die aktive Face.
///
/// Nach dem Löschen einer Face wandert die Auswahl (und der Hover) auf den
/// vorherigen Index; bei Face 0 bleibt nichts ausgewählt.
pub fn delete_active(state: &mut AppState) {
    let active = state.selection.active;
    let Some(face) = active.face() else {
        log::debug!("Löschen ignoriert: keine aktive Auswahl");
        return;
    };

    if let Some(vert) = active.vert() {
        delete_vertex(state, face, vert);
        return;
    }

    match state.shapes_mut().delete_face(face) {
        Ok(_) => {
            let retarget = face.checked_sub(1);
            state.selection.active.set_face_opt(retarget);
            state.selection.hover.set_face_opt(retarget);
            state.editor.edge_target = None;
        }
        Err(e) => {
            log::warn!("Face konnte nicht gelöscht werden: {}", e);
            state.selection.sanitize(&state.shapes);
        }
    }
}

fn delete_vertex(state: &mut AppState, face: usize, vert: usize) {
    if let Err(e) = state.shapes_mut().delete_point(face, vert) {
        log::warn!("Punkt konnte nicht gelöscht werden: {}", e);
        state.selection.sanitize(&state.shapes);
        return;
    }

    state.selection.active.clear_vert_edge();
    state.selection.hover.clear();
    state.editor.edge_target = None;

    // Eine Face ohne Punkte hat keinen Bestand
    if state.shapes.face(face).is_some_and(Face::is_empty) {
        if let Err(e) = state.shapes_mut().delete_face(face) {
            log::warn!("Leere Face konnte nicht entfernt werden: {}", e);
        }
        state.selection.active.clear();
    }
}
