//! Face: geordnete Punktfolge mit Offen/Geschlossen-Flag.

use glam::Vec2;

/// Ein Polygon (geschlossen) oder Polylinienzug (offen) auf der Editier-Ebene.
///
/// Aufeinanderfolgende Punkte bilden die Kanten; bei geschlossenen Faces kommt die
/// Schlusskante (letzter → erster Punkt) als Kante `0` hinzu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// Punkte in Einfügereihenfolge
    pub points: Vec<Vec2>,
    /// Geschlossen = Polygon mit Schlusskante
    pub closed: bool,
}

impl Face {
    /// Erstellt eine leere, offene Face (Ziel für neue Punkte).
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Face aus vorhandenen Punkten.
    pub fn from_points(points: Vec<Vec2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Anzahl der Punkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Face keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Prüft ob ein Kanten-Index in dieser Face existiert.
    ///
    /// Offene Faces haben keine Schlusskante, Kante `0` ist dort ungültig.
    pub fn has_edge(&self, edge: usize) -> bool {
        let n = self.points.len();
        if n < 2 || edge >= n {
            return false;
        }
        edge != 0 || self.closed
    }

    /// Punkt-Indizes `(start, ende)` der Kante `edge`.
    pub fn edge_endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        if !self.has_edge(edge) {
            return None;
        }
        let n = self.points.len();
        Some(((edge + n - 1) % n, edge))
    }

    /// Verschiebt alle Punkte um `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(closed: bool) -> Face {
        Face::from_points(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(0.0, 10.0),
            ],
            closed,
        )
    }

    #[test]
    fn edge_zero_is_closing_edge() {
        let face = triangle(true);
        assert_eq!(face.edge_endpoints(0), Some((2, 0)));
        assert_eq!(face.edge_endpoints(1), Some((0, 1)));
        assert_eq!(face.edge_endpoints(2), Some((1, 2)));
        assert_eq!(face.edge_endpoints(3), None);
    }

    #[test]
    fn open_face_has_no_closing_edge() {
        let face = triangle(false);
        assert!(!face.has_edge(0));
        assert!(face.has_edge(1));
        assert!(face.has_edge(2));
    }

    #[test]
    fn translate_moves_every_point() {
        let mut face = triangle(true);
        face.translate(Vec2::new(5.0, -5.0));
        assert_eq!(
            face.points,
            vec![
                Vec2::new(5.0, -5.0),
                Vec2::new(15.0, -5.0),
                Vec2::new(5.0, 5.0)
            ]
        );
    }
}
