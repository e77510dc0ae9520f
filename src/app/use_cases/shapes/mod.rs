//! Use-Cases für Erstellen, Schließen, Löschen und Zurücksetzen von Faces.

mod delete;
mod lifecycle;

pub use delete::delete_active;
pub use lifecycle::{close_shape, new_shape, reset};
