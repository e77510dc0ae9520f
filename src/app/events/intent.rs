use crate::shared::EditorOptions;

/// App-Intents: Eingaben des Input-Kollaborators ohne direkte Mutationslogik.
///
/// Alle Positionen sind bereits auf die Editier-Ebene projiziert.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maus bewegt ohne gedrückte Taste
    PointerMoved { plane_pos: glam::Vec2 },
    /// Maustaste gedrückt
    PointerPressed { plane_pos: glam::Vec2 },
    /// Maus mit gedrückter Taste bewegt
    PointerDragged { plane_pos: glam::Vec2 },
    /// Maustaste losgelassen
    PointerReleased { plane_pos: glam::Vec2 },
    /// Offene Form schließen
    CloseShapeRequested,
    /// Neue Form beginnen
    NewShapeRequested,
    /// Aktiven Punkt bzw. aktive Face löschen
    DeleteRequested,
    /// Aktive Auswahl zur nächsten Face weiterschalten
    CycleSelectionRequested,
    /// Grid-Snapping umschalten
    ToggleGridSnapRequested,
    /// Alle Faces verwerfen
    ResetRequested,
    /// Auswahl aufheben (z.B. Escape)
    ClearSelectionRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
