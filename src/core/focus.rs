//! Focus: welche Face / welcher Punkt / welche Kante angesprochen ist.

use super::ShapeStore;

/// Ziel einer Hover- oder Aktiv-Auswahl.
///
/// `vert` und `edge` schließen sich gegenseitig aus und gelten nur, wenn `face`
/// gesetzt ist. Die Felder sind privat, damit jede Mutation die Invarianten hält.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    face: Option<usize>,
    vert: Option<usize>,
    edge: Option<usize>,
}

impl Focus {
    /// Erstellt einen leeren Focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus auf eine ganze Face.
    pub fn on_face(face: usize) -> Self {
        Self {
            face: Some(face),
            vert: None,
            edge: None,
        }
    }

    pub fn face(&self) -> Option<usize> {
        self.face
    }

    /// Punkt-Index, nur wenn eine Face gesetzt ist.
    pub fn vert(&self) -> Option<usize> {
        self.face.and(self.vert)
    }

    /// Kanten-Index, nur wenn eine Face gesetzt ist.
    pub fn edge(&self) -> Option<usize> {
        self.face.and(self.edge)
    }

    pub fn has_face(&self) -> bool {
        self.face.is_some()
    }

    pub fn has_vert(&self) -> bool {
        self.vert().is_some()
    }

    pub fn has_edge(&self) -> bool {
        self.edge().is_some()
    }

    /// Setzt die Face und verwirft Punkt/Kante.
    pub fn set_face(&mut self, face: usize) {
        *self = Self::on_face(face);
    }

    /// Setzt den Punkt (verwirft die Kante). Ohne Face wirkungslos.
    pub fn set_vert(&mut self, vert: usize) {
        if self.face.is_none() {
            log::debug!("Focus: Punkt {} ohne Face ignoriert", vert);
            return;
        }
        self.vert = Some(vert);
        self.edge = None;
    }

    /// Setzt die Kante (verwirft den Punkt). Ohne Face wirkungslos.
    pub fn set_edge(&mut self, edge: usize) {
        if self.face.is_none() {
            log::debug!("Focus: Kante {} ohne Face ignoriert", edge);
            return;
        }
        self.edge = Some(edge);
        self.vert = None;
    }

    /// Setzt die Face oder leert den Focus bei `None`.
    pub fn set_face_opt(&mut self, face: Option<usize>) {
        match face {
            Some(index) => self.set_face(index),
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Verwirft Punkt und Kante, behält die Face.
    pub fn clear_vert_edge(&mut self) {
        self.vert = None;
        self.edge = None;
    }

    /// Normalisiert Indizes, die außerhalb des aktuellen Stores liegen, auf "nicht gesetzt".
    ///
    /// Gibt `true` zurück, wenn etwas verworfen wurde.
    pub fn sanitize(&mut self, store: &ShapeStore) -> bool {
        let before = *self;

        let Some(face) = self.face.and_then(|index| store.face(index)) else {
            self.clear();
            return before != *self;
        };

        if self.vert.is_some_and(|vert| vert >= face.len()) {
            self.vert = None;
        }
        if self.edge.is_some_and(|edge| !face.has_edge(edge)) {
            self.edge = None;
        }

        before != *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn vert_and_edge_are_mutually_exclusive() {
        let mut focus = Focus::on_face(0);
        focus.set_vert(2);
        assert_eq!(focus.vert(), Some(2));

        focus.set_edge(1);
        assert_eq!(focus.edge(), Some(1));
        assert!(!focus.has_vert());

        focus.set_vert(0);
        assert!(!focus.has_edge());
    }

    #[test]
    fn vert_and_edge_require_face() {
        let mut focus = Focus::new();
        focus.set_vert(1);
        focus.set_edge(1);
        assert!(!focus.has_vert());
        assert!(!focus.has_edge());
        assert_eq!(focus, Focus::new());
    }

    #[test]
    fn set_face_clears_vert_and_edge() {
        let mut focus = Focus::on_face(0);
        focus.set_vert(3);
        focus.set_face(1);
        assert_eq!(focus.face(), Some(1));
        assert!(!focus.has_vert());

        focus.set_edge(2);
        focus.clear_vert_edge();
        assert_eq!(focus, Focus::on_face(1));

        focus.clear();
        assert!(!focus.has_face());
    }

    #[test]
    fn sanitize_drops_stale_indices() {
        let mut store = ShapeStore::new();
        store.begin_new_face();
        store.append_point(Vec2::new(0.0, 0.0));
        store.append_point(Vec2::new(10.0, 0.0));
        store.close_last_face();

        let mut focus = Focus::on_face(0);
        focus.set_vert(5);
        assert!(focus.sanitize(&store));
        assert_eq!(focus, Focus::on_face(0));

        focus.set_edge(1);
        assert!(!focus.sanitize(&store));
        assert_eq!(focus.edge(), Some(1));

        let mut stale = Focus::on_face(3);
        assert!(stale.sanitize(&store));
        assert!(!stale.has_face());
    }
}
