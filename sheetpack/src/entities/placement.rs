use crate::entities::{Item, Orientation, Rect};

/// Final position of a packed item.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<L> {
    /// x of the bottom-left corner
    pub x: f64,
    /// y of the bottom-left corner
    pub y: f64,
    /// Width as placed
    pub w: f64,
    /// Height as placed
    pub h: f64,
    /// Whether the item was rotated by 90° relative to the orientation the caller supplied
    pub rotated: bool,
    /// Position of the item in the caller's input list
    pub item: usize,
    pub label: L,
}

impl<L: Clone> Placement<L> {
    /// Places `item` in `orientation` with its bottom-left corner at (`x`, `y`).
    pub fn new(item: &Item<L>, orientation: Orientation, x: f64, y: f64) -> Self {
        let (w, h) = item.dims(orientation);
        Placement {
            x,
            y,
            w,
            h,
            rotated: item.rotated_from_original(orientation),
            item: item.index,
            label: item.label.clone(),
        }
    }
}

impl<L> Placement<L> {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// An item for which no position was found, reported with the size and label the caller supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct UnplacedItem<L> {
    pub width: f64,
    pub height: f64,
    /// Position of the item in the caller's input list
    pub item: usize,
    pub label: L,
}

impl<L> From<Item<L>> for UnplacedItem<L> {
    fn from(item: Item<L>) -> Self {
        let (width, height) = item.original_dims();
        UnplacedItem {
            width,
            height,
            item: item.index,
            label: item.label,
        }
    }
}
