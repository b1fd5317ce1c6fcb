use thiserror::Error;

use crate::layer::LayerKind;

/// Reasons the map surface adapter refuses to forward an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The draw control does not offer this kind of shape
    #[error("{0} is not an enabled draw tool")]
    DisallowedKind(LayerKind),

    /// The layer's geometry does not match its declared kind
    #[error("{kind} layer carries geometry it cannot hold")]
    GeometryMismatch { kind: LayerKind },

    #[error("removing shapes is disabled")]
    RemoveDisabled,

    #[error("editing shapes is disabled")]
    EditDisabled,
}
