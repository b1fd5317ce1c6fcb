mod controller;
mod session_state;
mod sink;

pub use controller::DrawSessionController;
pub use session_state::SessionState;
pub use sink::{FormField, OutputSink};

/// Name of the form field the coordinates are submitted under.
pub const COORDINATES_FIELD: &str = "coordinates";
