//! Use-Case: Hover-Ziel unter dem Cursor bestimmen.

use crate::core::{geometry, Focus};
use crate::AppState;

/// Berechnet das Hover-Ziel an `plane_pos` komplett neu.
///
/// Priorität: Punkt der aktiven Face > Kante der aktiven Face > erste enthaltende Face.
/// Im Erstellungsmodus bleibt der Hover leer.
pub fn update_hover(state: &mut AppState, plane_pos: glam::Vec2) {
    state.editor.cursor = Some(plane_pos);

    let mut hover = Focus::new();
    let mut edge_target = None;

    if !state.is_appending() {
        let radius = state.options.hover_radius;

        if let Some((face_index, face)) = state
            .selection
            .active
            .face()
            .and_then(|index| state.shapes.face(index).map(|face| (index, face)))
        {
            if let Some(vert) = geometry::nearest_vertex(&face.points, plane_pos, radius) {
                hover.set_face(face_index);
                hover.set_vert(vert);
            } else if let Some(hit) =
                geometry::nearest_edge_point(&face.points, plane_pos, radius, face.closed)
            {
                hover.set_face(face_index);
                hover.set_edge(hit.edge);
                edge_target = Some(state.snap(hit.point));
            }
        }

        if !hover.has_face() {
            if let Some(face_index) = geometry::contains_first(plane_pos, state.shapes.faces()) {
                hover.set_face(face_index);
            }
        }
    }

    if hover != state.selection.hover {
        log::debug!("Hover: {:?}", hover);
    }
    state.selection.hover = hover;
    state.editor.edge_target = edge_target;
}
