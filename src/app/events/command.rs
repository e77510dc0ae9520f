use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Hover-Ziel an der Cursor-Position neu berechnen
    UpdateHover { plane_pos: glam::Vec2 },
    /// Hover-Ziel in die aktive Auswahl übernehmen und Drag-Anker setzen
    SelectHovered { plane_pos: glam::Vec2 },
    /// Aktives Ziel (Punkt, Kante oder Face) mitziehen
    DragActive { plane_pos: glam::Vec2 },
    /// Drag abschließen
    EndDrag,
    /// Punkt an die offene Face anhängen
    AppendPoint { plane_pos: glam::Vec2 },
    /// Gehoverte Kante teilen und neuen Punkt aktiv setzen
    SplitHoveredEdge,
    /// Aktive Auswahl komplett aufheben
    ClearActive,
    /// Offene Face schließen
    CloseShape,
    /// Neue offene Face beginnen
    NewShape,
    /// Aktiven Punkt bzw. aktive Face löschen
    DeleteActive,
    /// Aktive Face zyklisch weiterschalten
    CycleSelection,
    /// Grid-Snapping umschalten
    ToggleGridSnap,
    /// Store und Auswahl leeren
    Reset,
    /// Hover und aktive Auswahl leeren
    ClearSelection,
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
