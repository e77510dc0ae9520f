//! Handler für Grid-Snapping und Optionen (inkl. Persistenz).

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Schaltet Grid-Snapping um.
pub fn toggle_grid_snap(state: &mut AppState) {
    use_cases::options::toggle_grid_snap(state);
}

/// Übernimmt Optionen und speichert sie, falls ein Konfigurationspfad gesetzt ist.
pub fn apply(
    state: &mut AppState,
    options: EditorOptions,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options);
    persist(state, config_path)
}

/// Setzt Optionen auf Standardwerte zurück und speichert sie ggf.
pub fn reset(state: &mut AppState, config_path: Option<&Path>) -> anyhow::Result<()> {
    use_cases::options::reset_options(state);
    persist(state, config_path)
}

fn persist(state: &AppState, config_path: Option<&Path>) -> anyhow::Result<()> {
    match config_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
