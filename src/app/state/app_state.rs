use crate::app::CommandLog;
use crate::core::{geometry, ShapeStore};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

use super::{EditorState, SelectionState};

/// Hauptzustand der Engine
pub struct AppState {
    /// Alle Faces (Arc für O(1)-Snapshot in der RenderScene, Mutation per CoW)
    pub shapes: Arc<ShapeStore>,
    /// Hover und aktive Auswahl
    pub selection: SelectionState,
    /// Drag-, Cursor- und Snap-Zustand
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Raster)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            shapes: Arc::new(ShapeStore::new()),
            selection: SelectionState::new(),
            editor: EditorState::new(options.snap_to_grid),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Mutable Sicht auf den Store (CoW: klont nur, wenn ein Snapshot ihn noch hält).
    #[inline]
    pub fn shapes_mut(&mut self) -> &mut ShapeStore {
        Arc::make_mut(&mut self.shapes)
    }

    /// Gibt die Anzahl der Faces zurück
    pub fn face_count(&self) -> usize {
        self.shapes.len()
    }

    /// `true`, solange eine offene Face Punkte aufnimmt.
    pub fn is_appending(&self) -> bool {
        self.shapes.is_appending()
    }

    /// Rastet einen Punkt gemäß aktuellem Snap-Schalter ein.
    pub fn snap(&self, point: Vec2) -> Vec2 {
        geometry::snap_to_grid(point, self.options.grid_cell_size, self.editor.snap_to_grid)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
