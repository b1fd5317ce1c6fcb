use crate::geometry::Shape;

/// Whether a shape is currently committed. There is never more than one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Committed(Shape),
}

impl SessionState {
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Self::Committed(shape) => Some(shape),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Committed(_) => "Committed",
        }
    }
}
