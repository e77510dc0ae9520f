//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Focus-Werte werden gegen den Store validiert, damit der Renderer nie
/// auf veraltete Indizes zugreift.
pub fn build(state: &AppState) -> RenderScene {
    let mut selection = state.selection;
    selection.sanitize(&state.shapes);

    // Vorschau nur, solange eine Kante gehovert oder gezogen wird
    let edge_in_use = selection.hover.has_edge()
        || (state.editor.dragging && selection.active.has_edge());
    let insert_preview = state.editor.edge_target.filter(|_| edge_in_use);

    RenderScene {
        shapes: state.shapes.clone(),
        active: selection.active,
        hover: selection.hover,
        appending: state.is_appending(),
        insert_preview,
        cursor: state.editor.cursor,
        snap_to_grid: state.editor.snap_to_grid,
        grid_cell_size: state.options.grid_cell_size,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;
    use std::sync::Arc;

    #[test]
    fn build_shares_store_and_hides_stale_focus() {
        let mut state = AppState::new();
        state.shapes_mut().begin_new_face();
        state.shapes_mut().append_point(Vec2::new(1.0, 2.0));
        state.selection.active.set_face(4);

        let scene = build(&state);

        assert!(Arc::ptr_eq(&scene.shapes, &state.shapes));
        assert!(scene.appending);
        assert!(!scene.active.has_face());
    }

    #[test]
    fn insert_preview_only_while_edge_in_use() {
        let mut state = AppState::new();
        let shapes = state.shapes_mut();
        shapes.begin_new_face();
        shapes.append_point(Vec2::new(0.0, 0.0));
        shapes.append_point(Vec2::new(100.0, 0.0));
        shapes.append_point(Vec2::new(0.0, 100.0));
        shapes.close_last_face();
        state.editor.edge_target = Some(Vec2::new(50.0, 0.0));

        assert_eq!(build(&state).insert_preview, None);

        state.selection.hover.set_face(0);
        state.selection.hover.set_edge(1);
        assert_eq!(build(&state).insert_preview, Some(Vec2::new(50.0, 0.0)));
    }
}
