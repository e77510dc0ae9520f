//! Use-Cases für Pointer-Events auf der Editier-Ebene.

mod drag;
mod hover;
mod press;
mod release;

pub use drag::{drag_active, end_drag};
pub use hover::update_hover;
pub use press::select_hovered;
pub use release::{append_point, clear_active, split_hovered_edge};
