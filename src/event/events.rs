use uuid::Uuid;

use crate::geometry::Shape;

/// Changes to the committed shape, broadcast after the output field has been
/// updated.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A shape was committed into an empty session
    Committed {
        layer_id: Uuid,
        shape: Shape,
        encoded: String,
    },
    /// A new shape displaced the previous one
    Replaced {
        old_layer_id: Uuid,
        layer_id: Uuid,
        shape: Shape,
        encoded: String,
    },
    /// The committed layer was moved or reshaped in place
    Edited {
        layer_id: Uuid,
        shape: Shape,
        encoded: String,
    },
    /// The committed shape was removed and the field emptied
    Cleared { layer_id: Option<Uuid> },
}

impl SessionEvent {
    /// Output field value after this event.
    pub fn encoded(&self) -> &str {
        match self {
            Self::Committed { encoded, .. }
            | Self::Replaced { encoded, .. }
            | Self::Edited { encoded, .. } => encoded,
            Self::Cleared { .. } => "",
        }
    }
}
