//! Zentrale Konfiguration für den Polyline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Hover-Radius (Ebenen-Einheiten) für Punkt- und Kanten-Treffer.
pub const HOVER_RADIUS: f32 = 20.0;

// ── Grid ────────────────────────────────────────────────────────────

/// Zellgröße des Einrast-Rasters.
pub const GRID_CELL_SIZE: Vec2 = Vec2::new(25.0, 25.0);
/// Grid-Snapping beim Start aktiv.
pub const SNAP_TO_GRID: bool = true;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `polyline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Radius für Punkt- und Kanten-Hover
    #[serde(default = "default_hover_radius")]
    pub hover_radius: f32,
    /// Zellgröße des Rasters (x, y)
    #[serde(default = "default_grid_cell_size")]
    pub grid_cell_size: Vec2,
    /// Startwert des Snap-Schalters
    #[serde(default = "default_snap_to_grid")]
    pub snap_to_grid: bool,
    /// Geschlossene Face nach "Form schließen" direkt aktiv setzen
    #[serde(default = "default_promote_closed_face")]
    pub promote_closed_face: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hover_radius: HOVER_RADIUS,
            grid_cell_size: GRID_CELL_SIZE,
            snap_to_grid: SNAP_TO_GRID,
            promote_closed_face: true,
        }
    }
}

fn default_hover_radius() -> f32 {
    HOVER_RADIUS
}

fn default_grid_cell_size() -> Vec2 {
    GRID_CELL_SIZE
}

fn default_snap_to_grid() -> bool {
    SNAP_TO_GRID
}

fn default_promote_closed_face() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("polyline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("polyline_editor.toml")
    }
}
