use crate::PackError;
use crate::entities::is_valid_dimension;

/// A part as supplied by the caller: its size in the caller's orientation and an opaque label.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec<L> {
    pub width: f64,
    pub height: f64,
    pub label: L,
}

impl<L> ItemSpec<L> {
    pub fn new(width: f64, height: f64, label: L) -> Self {
        Self {
            width,
            height,
            label,
        }
    }

    /// Checks the dimensions of the part, `index` is only used to identify it in the error.
    pub fn validate(&self, index: usize) -> Result<(), PackError> {
        match is_valid_dimension(self.width) && is_valid_dimension(self.height) {
            true => Ok(()),
            false => Err(PackError::InvalidItem {
                index,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

/// A part after orientation normalization, ready to be packed.
/// One `Item` exists for every physical part instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<L> {
    /// Position of the part in the caller's input list
    pub index: usize,
    pub width: f64,
    pub height: f64,
    /// Whether the normalizer swapped the caller's width and height
    pub started_rotated: bool,
    pub label: L,
}

impl<L> Item<L> {
    /// Width and height of the item when placed in `orientation`
    pub fn dims(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Flat => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }

    /// Width and height as supplied by the caller
    pub fn original_dims(&self) -> (f64, f64) {
        match self.started_rotated {
            false => (self.width, self.height),
            true => (self.height, self.width),
        }
    }

    /// Whether placing the item in `orientation` rotates it relative to the caller's orientation
    pub fn rotated_from_original(&self, orientation: Orientation) -> bool {
        self.started_rotated ^ (orientation == Orientation::Rotated)
    }
}

/// Orientation of an [`Item`] relative to its normalized width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Flat,
    /// Turned by 90°: width and height swapped
    Rotated,
}
