//! Application-Layer: Controller, State, Events und Use-Cases der Edit-Engine.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Engine (Faces, Auswahl, Drag).
pub mod state;
pub mod use_cases;

pub use crate::core::{Face, Focus, ShapeStore};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, EditorState, SelectionState};
