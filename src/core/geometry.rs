//! Reine Geometrie-Abfragen auf der Editier-Ebene.
//!
//! Alle Funktionen sind zustandslos und arbeiten auf Punktfolgen (`&[Vec2]`).
//! Distanzvergleiche laufen über quadrierte Abstände.

use super::Face;
use glam::Vec2;

/// Toleranz für die Rand-Erkennung in [`point_in_polygon`].
const BOUNDARY_EPSILON: f32 = 1e-4;

/// Treffer auf einer Kante: Kanten-Index und nächster Punkt auf dem Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMatch {
    /// Kante `e` verbindet Punkt `(e - 1) mod n` mit Punkt `e` (0 = Schlusskante)
    pub edge: usize,
    /// Orthogonale Projektion des Cursors auf die Kante
    pub point: Vec2,
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    // Doppelte Punkte bilden keine Kante, sonst läge jeder Punkt "auf" ihr
    if ab.length_squared() <= f32::EPSILON {
        return ap.length_squared() <= BOUNDARY_EPSILON * BOUNDARY_EPSILON;
    }
    if ab.perp_dot(ap).abs() > BOUNDARY_EPSILON * ab.length().max(1.0) {
        return false;
    }

    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, Rand zählt als innen).
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        // Die Bedingung garantiert previous.y != current.y, die Division ist sicher.
        let crosses = (current.y > point.y) != (previous.y > point.y)
            && point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x;

        if crosses {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Prüft ob eine Face den Punkt enthält. Offene Faces enthalten nie einen Punkt.
pub fn contains(face: &Face, point: Vec2) -> bool {
    face.closed && point_in_polygon(point, &face.points)
}

/// Liefert den Index der ersten Face (in Store-Reihenfolge), die den Punkt enthält.
pub fn contains_first(point: Vec2, faces: &[Face]) -> Option<usize> {
    faces.iter().position(|face| contains(face, point))
}

/// Erster Punkt (in Punktreihenfolge) innerhalb von `radius` um den Cursor.
pub fn nearest_vertex(points: &[Vec2], cursor: Vec2, radius: f32) -> Option<usize> {
    let radius_sq = radius * radius;
    points
        .iter()
        .position(|p| p.distance_squared(cursor) <= radius_sq)
}

/// Orthogonale Projektion von `cursor` auf das Segment `a`–`b`, auf die Endpunkte begrenzt.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, cursor: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }

    let t = ((cursor - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Erste Kante (in Punktreihenfolge, Schlusskante zuletzt), deren nächster Punkt
/// innerhalb von `radius` um den Cursor liegt.
///
/// Die Schlusskante (letzter → erster Punkt) wird nur bei geschlossenen Faces und nur
/// dann geprüft, wenn erster und letzter Punkt verschieden sind.
pub fn nearest_edge_point(
    points: &[Vec2],
    cursor: Vec2,
    radius: f32,
    closed: bool,
) -> Option<EdgeMatch> {
    if points.len() < 2 {
        return None;
    }

    let radius_sq = radius * radius;
    let hit = |edge: usize, a: Vec2, b: Vec2| {
        let point = closest_point_on_segment(a, b, cursor);
        (point.distance_squared(cursor) <= radius_sq).then_some(EdgeMatch { edge, point })
    };

    let inner = points
        .windows(2)
        .enumerate()
        .find_map(|(i, pair)| hit(i + 1, pair[0], pair[1]));
    if inner.is_some() {
        return inner;
    }

    let first = points[0];
    let last = points[points.len() - 1];
    if closed && first != last {
        return hit(0, last, first);
    }

    None
}

/// Rastet einen Punkt auf das nächste Vielfache der Zellgröße ein (je Achse unabhängig).
///
/// Achsen mit nicht-positiver Zellgröße bleiben unverändert.
pub fn snap_to_grid(point: Vec2, cell_size: Vec2, enabled: bool) -> Vec2 {
    if !enabled {
        return point;
    }

    let snap_axis = |value: f32, cell: f32| {
        if cell > 0.0 {
            (value / cell).round() * cell
        } else {
            value
        }
    };

    Vec2::new(
        snap_axis(point.x, cell_size.x),
        snap_axis(point.y, cell_size.y),
    )
}
