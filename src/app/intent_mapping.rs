//! Mapping von Eingabe-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Ungültige Befehle (z.B. Löschen ohne aktive Auswahl) ergeben eine leere Sequenz.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { plane_pos } => vec![AppCommand::UpdateHover { plane_pos }],
        // Hover vor der Selektion frisch berechnen, damit kein veraltetes Ziel greift
        AppIntent::PointerPressed { plane_pos } => vec![
            AppCommand::UpdateHover { plane_pos },
            AppCommand::SelectHovered { plane_pos },
        ],
        AppIntent::PointerDragged { plane_pos } => vec![AppCommand::DragActive { plane_pos }],
        AppIntent::PointerReleased { plane_pos } => map_release(state, plane_pos),
        AppIntent::CloseShapeRequested => {
            if state.is_appending() {
                vec![AppCommand::CloseShape]
            } else {
                Vec::new()
            }
        }
        AppIntent::NewShapeRequested => vec![AppCommand::NewShape],
        AppIntent::DeleteRequested => {
            if state.selection.active.has_face() {
                vec![AppCommand::DeleteActive]
            } else {
                Vec::new()
            }
        }
        AppIntent::CycleSelectionRequested => {
            if state.shapes.is_empty() {
                Vec::new()
            } else {
                vec![AppCommand::CycleSelection]
            }
        }
        AppIntent::ToggleGridSnapRequested => vec![AppCommand::ToggleGridSnap],
        AppIntent::ResetRequested => vec![AppCommand::Reset],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Loslassen: Drag beenden > Punkt anhängen > Kante teilen > Leerklick deselektiert.
fn map_release(state: &AppState, plane_pos: glam::Vec2) -> Vec<AppCommand> {
    let hover = &state.selection.hover;

    if state.editor.dragging {
        vec![AppCommand::EndDrag]
    } else if state.is_appending() {
        vec![AppCommand::AppendPoint { plane_pos }]
    } else if hover.has_edge() {
        vec![AppCommand::SplitHoveredEdge]
    } else if !hover.has_face() {
        vec![AppCommand::ClearActive]
    } else {
        Vec::new()
    }
}
