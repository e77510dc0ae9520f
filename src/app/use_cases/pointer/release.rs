//! Use-Cases beim Loslassen der Maustaste (ohne vorangegangenen Drag).

use crate::AppState;

/// Hängt den (eingerasteten) Punkt an die offene Face an.
pub fn append_point(state: &mut AppState, plane_pos: glam::Vec2) {
    state.editor.cursor = Some(plane_pos);
    let point = state.snap(plane_pos);
    if state.shapes_mut().append_point(point) {
        log::debug!("Punkt ({}, {}) angehängt", point.x, point.y);
    }
}

/// Teilt die gehoverte Kante am zwischengespeicherten Zielpunkt.
///
/// Der neue Punkt wird sofort aktiv, damit er ohne zweiten Klick gezogen werden kann.
pub fn split_hovered_edge(state: &mut AppState) {
    let hover = state.selection.hover;
    let (Some(face), Some(edge)) = (hover.face(), hover.edge()) else {
        return;
    };
    let Some(target) = state.editor.edge_target.take() else {
        log::debug!("Kante {} ohne Zielpunkt, nichts eingefügt", edge);
        return;
    };

    // Eingerastetes Ziel auf einem Endpunkt: vorhandenen Punkt übernehmen statt duplizieren
    let existing = state
        .shapes
        .face(face)
        .and_then(|f| f.edge_endpoints(edge).map(|(start, end)| (f, start, end)))
        .and_then(|(f, start, end)| {
            [start, end]
                .into_iter()
                .find(|&vert| f.points.get(vert) == Some(&target))
        });
    if let Some(vert) = existing {
        log::debug!("Zielpunkt liegt auf Punkt {}, nichts eingefügt", vert);
        promote_vert(state, face, vert);
        return;
    }

    match state
        .shapes_mut()
        .insert_point_before_edge(face, edge, target)
    {
        Ok(()) => promote_vert(state, face, edge),
        Err(e) => {
            log::warn!("Kante konnte nicht geteilt werden: {}", e);
            state.selection.sanitize(&state.shapes);
        }
    }
}

fn promote_vert(state: &mut AppState, face: usize, vert: usize) {
    let selection = &mut state.selection;
    if selection.active.face() != Some(face) {
        selection.active.set_face(face);
    }
    selection.active.set_vert(vert);
    selection.hover.set_vert(vert);
}

/// Hebt die aktive Auswahl auf (Klick ins Leere).
pub fn clear_active(state: &mut AppState) {
    if state.selection.active.has_face() {
        log::debug!("Auswahl aufgehoben");
    }
    state.selection.active.clear();
}
