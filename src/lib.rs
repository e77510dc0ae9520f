//! Polyline Editor Library.
//! Edit-Engine für Polygon-Faces in der Ebene, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod script;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{EdgeMatch, Face, Focus, ShapeError, ShapeStore};
pub use shared::{EditorOptions, RenderScene};
