//! Core-Domänentypen: Faces, Shape-Store, Focus und Geometrie-Abfragen.

pub mod face;
pub mod focus;
/// Zustandslose Hit-Tests und Grid-Snapping
pub mod geometry;
pub mod shape_store;

pub use face::Face;
pub use focus::Focus;
pub use geometry::EdgeMatch;
pub use shape_store::{ShapeError, ShapeStore};
