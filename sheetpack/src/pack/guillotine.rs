use crate::entities::{Bin, Item, Orientation, PackResult, Placement, Rect, UnplacedItem};
use crate::pack::{
    FreeRectScore, PackingStrategy, Rotation, SplitRule, decreasing_longest_side,
};
use crate::util::assertions;
use log::{debug, warn};

/// Free rectangle packer with guillotine splits.
///
/// Keeps a list of free rectangles, starting with the entire bin.
/// Each item (longest side first) goes into the free rectangle with the best [`FreeRectScore`],
/// after which the remainder of that rectangle is cut in two according to the [`SplitRule`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuillotinePacker {
    pub rotation: Rotation,
    pub score: FreeRectScore,
    pub split: SplitRule,
}

/// Best fit found so far for an item
struct Candidate {
    free_idx: usize,
    orientation: Orientation,
    score: f64,
}

impl GuillotinePacker {
    pub fn new(rotation: Rotation, score: FreeRectScore, split: SplitRule) -> Self {
        Self {
            rotation,
            score,
            split,
        }
    }

    /// Scans all free rectangles, the caller's orientation of the item before the other one.
    /// A later option only replaces the current best if it scores strictly better.
    fn find_best<L>(&self, free_rects: &[Rect], item: &Item<L>) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for (free_idx, free) in free_rects.iter().enumerate() {
            for &orientation in self.orientations(item) {
                let (width, height) = item.dims(orientation);
                if !free.fits(width, height) {
                    continue;
                }
                let score = self.score.score(free, width, height);
                let improves = best.as_ref().is_none_or(|b| score < b.score);
                if improves {
                    best = Some(Candidate {
                        free_idx,
                        orientation,
                        score,
                    });
                }
            }
        }
        best
    }

    fn orientations<L>(&self, item: &Item<L>) -> &'static [Orientation] {
        match (self.rotation, item.started_rotated) {
            (Rotation::Enabled, false) => &[Orientation::Flat, Orientation::Rotated],
            (Rotation::Enabled, true) => &[Orientation::Rotated, Orientation::Flat],
            (Rotation::Disabled, _) => &[Orientation::Flat],
        }
    }
}

impl PackingStrategy for GuillotinePacker {
    const NAME: &'static str = "GUIL";

    fn pack<L: Clone>(&self, bin: Bin, items: Vec<Item<L>>) -> PackResult<L> {
        let n_items = items.len();
        let mut free_rects = vec![bin.rect()];
        let mut result = PackResult::new();

        for item in decreasing_longest_side(items) {
            let Some(Candidate {
                free_idx,
                orientation,
                ..
            }) = self.find_best(&free_rects, &item)
            else {
                warn!(
                    "[GUIL] item {} ({} x {}) does not fit in any free rectangle",
                    item.index, item.width, item.height
                );
                result.unplaced.push(UnplacedItem::from(item));
                continue;
            };

            let free = free_rects.remove(free_idx);
            let (width, height) = item.dims(orientation);
            let placement = Placement::new(&item, orientation, free.x, free.y);

            let (right, top) = self.split.split(&free, width, height);
            free_rects.extend(
                [right, top]
                    .into_iter()
                    .filter(|r| r.width > 0.0 && r.height > 0.0),
            );

            debug!(
                "[GUIL] placed item {} ({} x {}) at ({}, {}){}, {} free rectangles",
                placement.item,
                placement.w,
                placement.h,
                placement.x,
                placement.y,
                if placement.rotated { " rotated" } else { "" },
                free_rects.len()
            );
            result.placements.push(placement);
        }

        debug_assert!(assertions::layout_is_valid(&result, &bin, n_items));

        result
    }
}
