//! Use-Case: Lebenszyklus der Faces (beginnen, schließen, alles verwerfen).

use crate::app::state::EditorState;
use crate::AppState;

/// Schließt die offene Face und setzt sie optional aktiv.
pub fn close_shape(state: &mut AppState) {
    if !state.is_appending() {
        log::debug!("Form schließen ignoriert: keine offene Face");
        return;
    }

    state.selection.hover.clear();
    if let Some(index) = state.shapes_mut().close_last_face() {
        if state.options.promote_closed_face {
            state.selection.active.set_face(index);
        }
    }
}

/// Beginnt eine neue offene Face; eine bereits offene Face wird vorher geschlossen.
pub fn new_shape(state: &mut AppState) {
    state.selection.clear();
    state.editor.edge_target = None;
    state.shapes_mut().begin_new_face();
}

/// Verwirft alle Faces sowie Auswahl- und Drag-Zustand.
pub fn reset(state: &mut AppState) {
    let removed = state.face_count();
    state.shapes_mut().clear();
    state.selection.clear();
    state.editor = EditorState::new(state.editor.snap_to_grid);
    log::info!("Zurückgesetzt, {} Faces verworfen", removed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::fixtures::{square_at, state_with_faces};
    use crate::core::Focus;
    use glam::Vec2;

    #[test]
    fn close_shape_promotes_closed_face() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        new_shape(&mut state);
        state.shapes_mut().append_point(Vec2::new(300.0, 0.0));
        state.shapes_mut().append_point(Vec2::new(400.0, 0.0));

        close_shape(&mut state);

        assert!(!state.is_appending());
        assert_eq!(state.selection.active, Focus::on_face(1));
    }

    #[test]
    fn close_shape_without_promotion_keeps_selection_empty() {
        let mut state = state_with_faces(&[]);
        state.options.promote_closed_face = false;
        new_shape(&mut state);
        state.shapes_mut().append_point(Vec2::new(1.0, 1.0));

        close_shape(&mut state);

        assert!(!state.selection.active.has_face());
        assert!(state.shapes.faces()[0].closed);
    }

    #[test]
    fn new_shape_clears_active_and_starts_open_face() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.selection.active.set_face(0);

        new_shape(&mut state);

        assert!(!state.selection.active.has_face());
        assert!(state.is_appending());
        assert_eq!(state.face_count(), 2);
    }

    #[test]
    fn reset_keeps_snap_flag() {
        let mut state = state_with_faces(&[square_at(Vec2::ZERO)]);
        state.editor.snap_to_grid = true;
        state.editor.dragging = true;
        state.selection.active.set_face(0);

        reset(&mut state);

        assert_eq!(state.face_count(), 0);
        assert!(!state.selection.active.has_face());
        assert!(!state.editor.dragging);
        assert!(state.editor.snap_to_grid);
    }
}
