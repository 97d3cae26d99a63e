use crate::entities::Bin;

/// Horizontal strip of a [`Bin`] in which items are placed from left to right.
///
/// The height of a shelf is fixed by the first item placed on it, only `cursor_x` moves afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shelf {
    /// y of the bottom edge
    pub y: f64,
    pub height: f64,
    /// Right edge of the rightmost item on the shelf
    pub cursor_x: f64,
}

impl Shelf {
    /// Opens a shelf at `y`, already holding a first item of `width` x `height`
    pub fn open(y: f64, width: f64, height: f64) -> Self {
        Shelf {
            y,
            height,
            cursor_x: width,
        }
    }

    /// y of the top edge, where the next shelf starts
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn remaining_width(&self, bin: &Bin) -> f64 {
        bin.width() - self.cursor_x
    }

    /// Whether a `width` x `height` rectangle can still be put at the end of the shelf
    pub fn admits(&self, width: f64, height: f64, bin: &Bin) -> bool {
        self.remaining_width(bin) >= width && self.height >= height
    }

    /// Claims `width` at the end of the shelf, returns the x where the claimed space starts
    pub fn advance(&mut self, width: f64) -> f64 {
        let x = self.cursor_x;
        self.cursor_x += width;
        x
    }
}
