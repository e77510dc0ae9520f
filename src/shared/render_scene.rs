//! Render-Szene als expliziter Übergabevertrag zwischen Engine und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use crate::core::{Focus, ShapeStore};
use glam::Vec2;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Faces (Arc für O(1)-Clone pro Frame)
    pub shapes: Arc<ShapeStore>,
    /// Aktive Auswahl (bereits gegen den Store validiert)
    pub active: Focus,
    /// Hover-Ziel unter dem Cursor (bereits gegen den Store validiert)
    pub hover: Focus,
    /// Letzte Face ist offen und nimmt neue Punkte auf
    pub appending: bool,
    /// Vorschau-Punkt für das Einfügen auf einer Kante
    pub insert_preview: Option<Vec2>,
    /// Letzte bekannte Cursor-Position auf der Ebene
    pub cursor: Option<Vec2>,
    /// Grid-Snapping aktiv
    pub snap_to_grid: bool,
    /// Zellgröße des Rasters
    pub grid_cell_size: Vec2,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt Faces vorhanden sind.
    pub fn has_shapes(&self) -> bool {
        !self.shapes.is_empty()
    }
}
