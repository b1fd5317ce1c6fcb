mod form_panel;
mod results_panel;

pub use form_panel::form_panel;
pub use results_panel::results_panel;
