//! Use-Cases für Grid-Snapping und Laufzeit-Optionen.

use crate::shared::EditorOptions;
use crate::AppState;

/// Schaltet Grid-Snapping um. Bestehende Punkte bleiben unverändert.
pub fn toggle_grid_snap(state: &mut AppState) {
    state.editor.snap_to_grid = !state.editor.snap_to_grid;
    log::info!(
        "Grid-Snapping {}",
        if state.editor.snap_to_grid {
            "aktiv"
        } else {
            "inaktiv"
        }
    );
}

/// Übernimmt neue Optionen; der laufende Snap-Schalter bleibt unberührt.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
}

/// Setzt Optionen und Snap-Schalter auf die Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    state.options = EditorOptions::default();
    state.editor.snap_to_grid = state.options.snap_to_grid;
}
