use glam::Vec2;

/// Interaktionszustand des Editors zwischen zwei Eingabe-Events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Maustaste gedrückt und seit dem Drücken bewegt
    pub dragging: bool,
    /// Letzte (eingerastete) Drag-Position als Bezug für das nächste Delta
    pub drag_anchor: Option<Vec2>,
    /// Eingerasteter Kandidat für das Einfügen auf der gehoverten Kante
    pub edge_target: Option<Vec2>,
    /// Letzte bekannte Cursor-Position auf der Ebene
    pub cursor: Option<Vec2>,
    /// Grid-Snapping aktiv (wirkt ab dem nächsten Pointer-Event)
    pub snap_to_grid: bool,
}

impl EditorState {
    /// Erstellt den Startzustand mit dem gegebenen Snap-Schalter.
    pub fn new(snap_to_grid: bool) -> Self {
        Self {
            snap_to_grid,
            ..Self::default()
        }
    }

    /// Beendet einen laufenden Drag.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_anchor = None;
    }
}
