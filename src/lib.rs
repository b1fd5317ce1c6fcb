#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod history;
pub mod layer;
pub mod map;
pub mod panels;
pub mod state;
pub mod tools;
pub mod widgets;

pub use app::CaptureApp;
pub use config::CaptureConfig;
pub use error::DrawError;
pub use geometry::{LatLng, LatLngBounds, Shape};
pub use history::{HistoryModal, HistoryTrigger};
pub use layer::{DrawnLayer, LayerGroup};
pub use map::{MapSurfaceAdapter, SurfaceEvent};
pub use state::{DrawSessionController, FormField, OutputSink, SessionState};
