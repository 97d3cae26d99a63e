use crate::PackError;
use crate::entities::{Rect, is_valid_dimension};

/// The fixed-size sheet onto which items are packed.
///
/// Coordinates inside the bin have their origin in the bottom-left corner of the sheet,
/// with x pointing right and y pointing up.
/// Every [`Placement`](crate::entities::Placement) refers to its own bottom-left corner in this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    width: f64,
    height: f64,
}

impl Bin {
    pub fn try_new(width: f64, height: f64) -> Result<Self, PackError> {
        if !is_valid_dimension(width) || !is_valid_dimension(height) {
            return Err(PackError::InvalidBin { width, height });
        }
        Ok(Bin { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The entire bin as a rectangle anchored at the origin
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Bin::try_new(100.0, 50.0).is_ok());
        assert_eq!(
            Bin::try_new(0.0, 50.0),
            Err(PackError::InvalidBin {
                width: 0.0,
                height: 50.0
            })
        );
        assert!(Bin::try_new(10.0, -1.0).is_err());
        assert!(Bin::try_new(f64::INFINITY, 10.0).is_err());
        assert!(Bin::try_new(10.0, f64::NAN).is_err());
    }
}
