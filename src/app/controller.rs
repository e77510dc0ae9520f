//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;
use std::path::PathBuf;

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
#[derive(Debug, Default)]
pub struct AppController {
    /// Ziel für geänderte Optionen (None = nicht persistieren)
    config_path: Option<PathBuf>,
}

impl AppController {
    /// Erstellt einen neuen Controller ohne Options-Persistenz.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Erstellt einen Controller, der geänderte Optionen nach `path` schreibt.
    pub fn with_config_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Anschließend werden beide Focus-Werte gegen den aktuellen Store validiert.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        state.selection.sanitize(&state.shapes);
        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            AppCommand::UpdateHover { plane_pos } => {
                handlers::pointer::update_hover(state, plane_pos)
            }
            AppCommand::SelectHovered { plane_pos } => {
                handlers::pointer::select_hovered(state, plane_pos)
            }
            AppCommand::DragActive { plane_pos } => {
                handlers::pointer::drag_active(state, plane_pos)
            }
            AppCommand::EndDrag => handlers::pointer::end_drag(state),
            AppCommand::AppendPoint { plane_pos } => {
                handlers::pointer::append_point(state, plane_pos)
            }
            AppCommand::SplitHoveredEdge => handlers::pointer::split_hovered_edge(state),
            AppCommand::ClearActive => handlers::pointer::clear_active(state),

            // === Faces ===
            AppCommand::CloseShape => handlers::shapes::close(state),
            AppCommand::NewShape => handlers::shapes::new_shape(state),
            AppCommand::DeleteActive => handlers::shapes::delete_active(state),
            AppCommand::Reset => handlers::shapes::reset(state),

            // === Selektion ===
            AppCommand::CycleSelection => handlers::selection::cycle(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Optionen ===
            AppCommand::ToggleGridSnap => handlers::options::toggle_grid_snap(state),
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply(state, options, self.config_path.as_deref())?
            }
            AppCommand::ResetOptions => {
                handlers::options::reset(state, self.config_path.as_deref())?
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
