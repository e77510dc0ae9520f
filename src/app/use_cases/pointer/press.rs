//! Use-Case: Hover-Ziel beim Drücken in die aktive Auswahl übernehmen.

use crate::AppState;

/// Übernimmt das Hover-Ziel in die aktive Auswahl und setzt den Drag-Anker.
///
/// Eine andere Face ersetzt die Auswahl komplett; innerhalb der aktiven Face wird
/// ein anderer Punkt oder eine andere Kante übernommen. Ein Druck ins Leere ändert
/// nichts, die Deselektion passiert erst beim Loslassen.
pub fn select_hovered(state: &mut AppState, plane_pos: glam::Vec2) {
    state.editor.dragging = false;
    state.editor.drag_anchor = Some(state.snap(plane_pos));

    let hover = state.selection.hover;
    let active = &mut state.selection.active;

    let Some(face) = hover.face() else {
        return;
    };

    if active.face() != Some(face) {
        active.set_face(face);
        log::debug!("Face {} aktiv", face);
    } else if let Some(vert) = hover.vert().filter(|&v| active.vert() != Some(v)) {
        active.set_vert(vert);
        log::debug!("Punkt {} in Face {} aktiv", vert, face);
    } else if let Some(edge) = hover.edge().filter(|&e| active.edge() != Some(e)) {
        active.set_edge(edge);
        log::debug!("Kante {} in Face {} aktiv", edge, face);
    }
}
