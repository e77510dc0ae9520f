//! Der Shape-Store: geordnete Liste aller Faces.
//!
//! Invariante: höchstens eine Face ist offen, und wenn, dann die letzte
//! (die "in Arbeit" befindliche Face, an die neue Punkte angehängt werden).

use super::Face;
use glam::Vec2;
use thiserror::Error;

/// Fehler bei indexbasierten Store-Operationen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Face-Index {index} außerhalb des Bereichs (Anzahl Faces: {len})")]
    FaceIndexOutOfRange { index: usize, len: usize },
    #[error("Punkt-Index {index} in Face {face} außerhalb des Bereichs (Anzahl Punkte: {len})")]
    PointIndexOutOfRange { face: usize, index: usize, len: usize },
    #[error("Kante {index} existiert in Face {face} nicht (Anzahl Punkte: {len})")]
    EdgeIndexOutOfRange { face: usize, index: usize, len: usize },
}

/// Container für alle Faces in Einfügereihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStore {
    faces: Vec<Face>,
}

impl ShapeStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Faces in Store-Reihenfolge
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    /// Anzahl der Faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Gesamtzahl aller Punkte über alle Faces.
    pub fn point_count(&self) -> usize {
        self.faces.iter().map(Face::len).sum()
    }

    /// `true`, wenn die letzte Face offen ist (Erstellungsmodus).
    pub fn is_appending(&self) -> bool {
        self.faces.last().is_some_and(|face| !face.closed)
    }

    /// Beginnt eine neue offene Face und macht sie zum Anhänge-Ziel.
    ///
    /// Eine bereits offene Face wird vorher geschlossen. Ist sie noch leer,
    /// wird sie direkt weiterverwendet.
    pub fn begin_new_face(&mut self) -> usize {
        if let Some(last) = self.faces.last() {
            if !last.closed && last.is_empty() {
                return self.faces.len() - 1;
            }
        }

        self.close_last_face();
        self.faces.push(Face::new());
        let index = self.faces.len() - 1;
        log::info!("Neue Face {} begonnen", index);
        index
    }

    /// Hängt einen Punkt an die offene Face an. Ohne offene Face wirkungslos.
    pub fn append_point(&mut self, point: Vec2) -> bool {
        match self.faces.last_mut() {
            Some(face) if !face.closed => {
                face.points.push(point);
                true
            }
            _ => {
                log::debug!("Punkt ({}, {}) verworfen: keine offene Face", point.x, point.y);
                false
            }
        }
    }

    /// Schließt die offene Face und liefert ihren Index.
    ///
    /// Eine leere offene Face wird verworfen statt geschlossen.
    pub fn close_last_face(&mut self) -> Option<usize> {
        let last = self.faces.last_mut().filter(|face| !face.closed)?;

        if last.is_empty() {
            self.faces.pop();
            log::debug!("Leere offene Face verworfen");
            return None;
        }

        last.closed = true;
        let index = self.faces.len() - 1;
        log::info!("Face {} geschlossen ({} Punkte)", index, self.faces[index].len());
        Some(index)
    }

    /// Fügt `point` an Position `edge` ein, also zwischen Start- und Endpunkt der Kante.
    pub fn insert_point_before_edge(
        &mut self,
        face_index: usize,
        edge: usize,
        point: Vec2,
    ) -> Result<(), ShapeError> {
        let face = self.face_mut(face_index)?;
        if !face.has_edge(edge) {
            return Err(ShapeError::EdgeIndexOutOfRange {
                face: face_index,
                index: edge,
                len: face.len(),
            });
        }

        face.points.insert(edge, point);
        log::info!("Punkt in Face {} an Position {} eingefügt", face_index, edge);
        Ok(())
    }

    /// Entfernt einen Punkt und liefert seine Position.
    pub fn delete_point(&mut self, face_index: usize, vert: usize) -> Result<Vec2, ShapeError> {
        let face = self.face_mut(face_index)?;
        check_point(face, face_index, vert)?;

        let removed = face.points.remove(vert);
        log::info!("Punkt {} aus Face {} gelöscht", vert, face_index);
        Ok(removed)
    }

    /// Entfernt eine Face vollständig.
    pub fn delete_face(&mut self, face_index: usize) -> Result<Face, ShapeError> {
        self.face_mut(face_index)?;
        let removed = self.faces.remove(face_index);
        log::info!("Face {} gelöscht", face_index);
        Ok(removed)
    }

    /// Verschiebt alle Punkte einer Face um `delta`.
    pub fn move_face_points(&mut self, face_index: usize, delta: Vec2) -> Result<(), ShapeError> {
        self.face_mut(face_index)?.translate(delta);
        Ok(())
    }

    /// Überschreibt die Position eines einzelnen Punkts.
    pub fn move_point(
        &mut self,
        face_index: usize,
        vert: usize,
        position: Vec2,
    ) -> Result<(), ShapeError> {
        let face = self.face_mut(face_index)?;
        check_point(face, face_index, vert)?;
        face.points[vert] = position;
        Ok(())
    }

    /// Position eines Punkts.
    pub fn point(&self, face_index: usize, vert: usize) -> Result<Vec2, ShapeError> {
        let face = self.faces.get(face_index).ok_or(ShapeError::FaceIndexOutOfRange {
            index: face_index,
            len: self.faces.len(),
        })?;
        check_point(face, face_index, vert)?;
        Ok(face.points[vert])
    }

    /// Entfernt alle Faces.
    pub fn clear(&mut self) {
        self.faces.clear();
    }

    fn face_mut(&mut self, face_index: usize) -> Result<&mut Face, ShapeError> {
        let len = self.faces.len();
        self.faces
            .get_mut(face_index)
            .ok_or(ShapeError::FaceIndexOutOfRange {
                index: face_index,
                len,
            })
    }
}

fn check_point(face: &Face, face_index: usize, vert: usize) -> Result<(), ShapeError> {
    if vert < face.len() {
        Ok(())
    } else {
        Err(ShapeError::PointIndexOutOfRange {
            face: face_index,
            index: vert,
            len: face.len(),
        })
    }
}
