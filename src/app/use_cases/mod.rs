//! Use-Cases der Edit-Engine.
//!
//! - `pointer` — Hover, Drücken, Ziehen, Loslassen
//! - `shapes` — Form schließen/beginnen, Löschen, Zurücksetzen
//! - `selection` — Auswahl weiterschalten oder aufheben
//! - `options` — Grid-Snapping und Laufzeit-Optionen

pub mod options;
pub mod pointer;
pub mod selection;
pub mod shapes;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::app::AppState;
    use glam::Vec2;

    /// Quadrat mit Kantenlänge 100 an `origin`, im Uhrzeigersinn der Bildschirm-Achsen.
    pub fn square_at(origin: Vec2) -> Vec<Vec2> {
        vec![
            origin,
            origin + Vec2::new(100.0, 0.0),
            origin + Vec2::new(100.0, 100.0),
            origin + Vec2::new(0.0, 100.0),
        ]
    }

    /// State mit einer geschlossenen Face je Punktliste, Snapping aus.
    pub fn state_with_faces(faces: &[Vec<Vec2>]) -> AppState {
        let mut state = AppState::new();
        state.editor.snap_to_grid = false;
        let shapes = state.shapes_mut();
        for points in faces {
            shapes.begin_new_face();
            for &point in points {
                shapes.append_point(point);
            }
            shapes.close_last_face();
        }
        state
    }
}
