use crate::core::{Focus, ShapeStore};

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Ziel unter dem Cursor, wird bei jeder Mausbewegung neu berechnet
    pub hover: Focus,
    /// Aktive Auswahl, ändert sich nur durch explizite Selektion
    pub active: Focus,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft Hover und aktive Auswahl.
    pub fn clear(&mut self) {
        self.hover.clear();
        self.active.clear();
    }

    /// Normalisiert veraltete Indizes beider Focus-Werte gegen den aktuellen Store.
    pub fn sanitize(&mut self, store: &ShapeStore) {
        if self.active.sanitize(store) {
            log::warn!("Veralteter Index in aktiver Auswahl verworfen");
        }
        if self.hover.sanitize(store) {
            log::debug!("Veralteter Index im Hover verworfen");
        }
    }
}
