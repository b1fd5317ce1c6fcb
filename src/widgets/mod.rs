pub mod history_modal;

pub use history_modal::show_history_modal;
