//! Scoring rules of the packing strategies.
//! Each rule has a fixed tie-break, so results stay deterministic when rules are swapped.

use crate::entities::{Item, Orientation, Rect};
use serde::{Deserialize, Serialize};

/// Decides the orientation of an item on an existing shelf where it fits both flat and rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShelfOrientationPolicy {
    /// Minimizes the unused vertical gap between the item and the top of the shelf.
    /// Ties go to [`Orientation::Flat`].
    #[default]
    MinHeightWaste,
    /// Always [`Orientation::Flat`]
    PreferFlat,
}

impl ShelfOrientationPolicy {
    pub fn choose<L>(&self, shelf_height: f64, item: &Item<L>) -> Orientation {
        match self {
            ShelfOrientationPolicy::MinHeightWaste => {
                let flat_waste = shelf_height - item.height;
                let rotated_waste = shelf_height - item.width;
                match rotated_waste < flat_waste {
                    true => Orientation::Rotated,
                    false => Orientation::Flat,
                }
            }
            ShelfOrientationPolicy::PreferFlat => Orientation::Flat,
        }
    }
}

/// Score of putting a `width` x `height` rectangle into a free rectangle, lower is better.
/// On equal scores, the option evaluated first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FreeRectScore {
    /// Smallest of the two leftover sides
    #[default]
    BestShortSideFit,
    /// Largest of the two leftover sides
    BestLongSideFit,
    /// Leftover area
    BestAreaFit,
}

impl FreeRectScore {
    pub fn score(&self, free: &Rect, width: f64, height: f64) -> f64 {
        let leftover_w = free.width - width;
        let leftover_h = free.height - height;
        match self {
            FreeRectScore::BestShortSideFit => f64::min(leftover_w, leftover_h),
            FreeRectScore::BestLongSideFit => f64::max(leftover_w, leftover_h),
            FreeRectScore::BestAreaFit => free.area() - width * height,
        }
    }
}

/// How the remainder of a free rectangle is cut in two after a rectangle is placed in its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    /// Cuts horizontally when the leftover width is strictly smaller than the leftover height, vertically otherwise
    #[default]
    ShorterLeftoverAxis,
    /// Cuts horizontally when the leftover width is at least the leftover height, vertically otherwise
    LongerLeftoverAxis,
}

impl SplitRule {
    /// Returns the free rectangles right of and above the placed `width` x `height` rectangle.
    /// Either of them can be empty (zero width or height).
    ///
    /// A horizontal cut gives the top piece the full width of `free`,
    /// a vertical cut gives the right piece the full height of `free`.
    pub fn split(&self, free: &Rect, width: f64, height: f64) -> (Rect, Rect) {
        let leftover_w = free.width - width;
        let leftover_h = free.height - height;
        let horizontal = match self {
            SplitRule::ShorterLeftoverAxis => leftover_w < leftover_h,
            SplitRule::LongerLeftoverAxis => leftover_w >= leftover_h,
        };
        match horizontal {
            true => (
                Rect::new(free.x + width, free.y, leftover_w, height),
                Rect::new(free.x, free.y + height, free.width, leftover_h),
            ),
            false => (
                Rect::new(free.x + width, free.y, leftover_w, free.height),
                Rect::new(free.x, free.y + height, width, leftover_h),
            ),
        }
    }
}
