//! Handler für Pointer-Commands (Hover, Drücken, Ziehen, Loslassen).

use crate::app::use_cases;
use crate::app::AppState;

/// Berechnet das Hover-Ziel an der Cursor-Position neu.
pub fn update_hover(state: &mut AppState, plane_pos: glam::Vec2) {
    use_cases::pointer::update_hover(state, plane_pos);
}

/// Übernimmt das Hover-Ziel in die aktive Auswahl.
pub fn select_hovered(state: &mut AppState, plane_pos: glam::Vec2) {
    use_cases::pointer::select_hovered(state, plane_pos);
}

/// Zieht das aktive Ziel mit.
pub fn drag_active(state: &mut AppState, plane_pos: glam::Vec2) {
    use_cases::pointer::drag_active(state, plane_pos);
}

/// Schließt einen Drag ab.
pub fn end_drag(state: &mut AppState) {
    use_cases::pointer::end_drag(state);
}

/// Hängt einen Punkt an die offene Face an.
pub fn append_point(state: &mut AppState, plane_pos: glam::Vec2) {
    use_cases::pointer::append_point(state, plane_pos);
}

/// Teilt die gehoverte Kante.
pub fn split_hovered_edge(state: &mut AppState) {
    use_cases::pointer::split_hovered_edge(state);
}

/// Hebt die aktive Auswahl auf.
pub fn clear_active(state: &mut AppState) {
    use_cases::pointer::clear_active(state);
}
