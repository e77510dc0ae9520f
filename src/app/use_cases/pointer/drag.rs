//! Use-Case: aktives Ziel mit der Maus ziehen.

use crate::core::ShapeError;
use crate::AppState;
use glam::Vec2;

/// Zieht das aktive Ziel um die (eingerastete) Cursor-Differenz seit dem letzten Event.
///
/// Punkt: einzelner Punkt, eingerastet. Kante: beide Endpunkte. Face: alle Punkte.
/// Ohne aktives Ziel wird nur der Drag-Zustand gesetzt.
pub fn drag_active(state: &mut AppState, plane_pos: Vec2) {
    state.editor.dragging = true;
    state.editor.cursor = Some(plane_pos);

    let target = state.snap(plane_pos);
    let Some(anchor) = state.editor.drag_anchor.replace(target) else {
        return;
    };

    let delta = target - anchor;
    if delta == Vec2::ZERO {
        return;
    }

    if let Err(e) = move_active(state, target, delta) {
        log::warn!("Drag verworfen: {}", e);
        state.selection.sanitize(&state.shapes);
    }
}

fn move_active(state: &mut AppState, target: Vec2, delta: Vec2) -> Result<(), ShapeError> {
    let active = state.selection.active;
    let Some(face) = active.face() else {
        return Ok(());
    };

    if let Some(vert) = active.vert() {
        let moved = state.snap(state.shapes.point(face, vert)? + delta);
        state.shapes_mut().move_point(face, vert, moved)?;
    } else if let Some(edge) = active.edge() {
        let (start, end) = state
            .shapes
            .face(face)
            .and_then(|f| f.edge_endpoints(edge))
            .ok_or_else(|| ShapeError::EdgeIndexOutOfRange {
                face,
                index: edge,
                len: state.shapes.face(face).map_or(0, |f| f.len()),
            })?;
        let start_pos = state.shapes.point(face, start)?;
        let end_pos = state.shapes.point(face, end)?;

        let shapes = state.shapes_mut();
        shapes.move_point(face, start, start_pos + delta)?;
        shapes.move_point(face, end, end_pos + delta)?;

        // Vorschau-Punkt folgt dem Cursor statt an der alten Stelle zu bleiben
        state.editor.edge_target = Some(target);
    } else {
        state.shapes_mut().move_face_points(face, delta)?;
    }

    Ok(())
}

/// Beendet den Drag: Punkt/Kante werden abgewählt, die Face bleibt aktiv.
pub fn end_drag(state: &mut AppState) {
    state.selection.active.clear_vert_edge();
    state.editor.end_drag();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::fixtures::{square_at, state_with_faces};
    use crate::core::Focus;

    fn start_drag(state: &mut AppState, at: Vec2) {
        state.editor.drag_anchor = Some(state.snap(at));
    }

    #[test]
    fn drag_active_edge_moves_both_endpoints_only() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.selection.active.set_face(0);
        state.selection.active.set_edge(2);
        start_drag(&mut state, Vec2::new(100.0, 50.0));

        drag_active(&mut state, Vec2::new(110.0, 55.0));

        assert_eq!(
            state.shapes.faces()[0].points,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(110.0, 5.0),
                Vec2::new(110.0, 105.0),
                Vec2::new(0.0, 100.0),
            ]
        );
        assert_eq!(state.editor.edge_target, Some(Vec2::new(110.0, 55.0)));
        assert!(state.editor.dragging);
    }

    #[test]
    fn drag_closing_edge_moves_last_and_first_point() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.selection.active.set_face(0);
        state.selection.active.set_edge(0);
        start_drag(&mut state, Vec2::ZERO);

        drag_active(&mut state, Vec2::new(-10.0, 0.0));

        let points = &state.shapes.faces()[0].points;
        assert_eq!(points[0], Vec2::new(-10.0, 0.0));
        assert_eq!(points[3], Vec2::new(-10.0, 100.0));
        assert_eq!(points[1], Vec2::new(100.0, 0.0));
    }

    #[test]
    fn drag_vertex_snaps_to_grid() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.editor.snap_to_grid = true;
        state.selection.active.set_face(0);
        state.selection.active.set_vert(2);
        start_drag(&mut state, Vec2::new(100.0, 100.0));

        drag_active(&mut state, Vec2::new(121.0, 96.0));

        assert_eq!(state.shapes.faces()[0].points[2], Vec2::new(125.0, 100.0));
    }

    #[test]
    fn drag_face_translates_whole_face_by_literal_delta() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.selection.active = Focus::on_face(0);
        start_drag(&mut state, Vec2::new(50.0, 50.0));

        drag_active(&mut state, Vec2::new(57.0, 41.0));
        drag_active(&mut state, Vec2::new(60.0, 40.0));

        assert_eq!(state.shapes.faces()[0].points[0], Vec2::new(10.0, -10.0));
        assert_eq!(state.shapes.faces()[0].points[2], Vec2::new(110.0, 90.0));
    }

    #[test]
    fn drag_without_target_or_delta_changes_nothing() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        let before = state.shapes.clone();

        start_drag(&mut state, Vec2::new(50.0, 50.0));
        drag_active(&mut state, Vec2::new(80.0, 80.0));
        assert_eq!(state.shapes, before);

        state.selection.active = Focus::on_face(0);
        drag_active(&mut state, Vec2::new(80.0, 80.0));
        assert_eq!(state.shapes, before);
    }

    #[test]
    fn drag_with_stale_vertex_clears_it() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.selection.active.set_face(0);
        state.selection.active.set_vert(9);
        start_drag(&mut state, Vec2::ZERO);

        drag_active(&mut state, Vec2::new(5.0, 5.0));

        assert_eq!(state.selection.active, Focus::on_face(0));
    }

    #[test]
    fn end_drag_keeps_face_only() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.selection.active.set_face(0);
        state.selection.active.set_vert(1);
        state.editor.dragging = true;

        end_drag(&mut state);

        assert_eq!(state.selection.active, Focus::on_face(0));
        assert!(!state.editor.dragging);
        assert_eq!(state.editor.drag_anchor, None);
    }
}
