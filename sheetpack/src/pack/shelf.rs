use crate::entities::{Bin, Item, Orientation, PackResult, Placement, Shelf, UnplacedItem};
use crate::pack::{PackingStrategy, Rotation, ShelfOrientationPolicy, decreasing_height};
use crate::util::assertions;
use log::{debug, warn};

/// First-Fit Decreasing Height (FFDH) shelf packer.
///
/// Items are placed tallest first. Each item goes onto the first existing shelf with enough room left,
/// otherwise a new shelf is opened on top of the last one.
/// A single pass is made over the items, earlier decisions are never revisited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfPacker {
    pub rotation: Rotation,
    pub policy: ShelfOrientationPolicy,
}

/// Result of a shelf packing call, including the shelves that were opened (bottom to top)
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfSolution<L> {
    pub result: PackResult<L>,
    pub shelves: Vec<Shelf>,
}

impl ShelfPacker {
    pub fn new(rotation: Rotation, policy: ShelfOrientationPolicy) -> Self {
        Self { rotation, policy }
    }

    /// Same as [`PackingStrategy::pack`], but also returns the shelves
    pub fn pack_shelves<L: Clone>(&self, bin: Bin, items: Vec<Item<L>>) -> ShelfSolution<L> {
        let n_items = items.len();
        let mut shelves: Vec<Shelf> = vec![];
        let mut result = PackResult::new();

        for item in decreasing_height(items) {
            let placement = self
                .place_on_existing_shelf(&bin, &mut shelves, &item)
                .or_else(|| self.place_on_new_shelf(&bin, &mut shelves, &item));

            match placement {
                Some(p) => {
                    debug!(
                        "[SHELF] placed item {} ({} x {}) at ({}, {}){}, {} shelves open",
                        p.item,
                        p.w,
                        p.h,
                        p.x,
                        p.y,
                        if p.rotated { " rotated" } else { "" },
                        shelves.len()
                    );
                    result.placements.push(p);
                }
                None => {
                    warn!(
                        "[SHELF] item {} ({} x {}) does not fit in the bin",
                        item.index, item.width, item.height
                    );
                    result.unplaced.push(UnplacedItem::from(item));
                }
            }
        }

        debug_assert!(assertions::layout_is_valid(&result, &bin, n_items));
        debug_assert!(assertions::shelves_are_stacked(&shelves, &bin));

        ShelfSolution { result, shelves }
    }

    /// First-fit search over the existing shelves, in the order they were opened
    fn place_on_existing_shelf<L: Clone>(
        &self,
        bin: &Bin,
        shelves: &mut [Shelf],
        item: &Item<L>,
    ) -> Option<Placement<L>> {
        for shelf in shelves.iter_mut() {
            let fits_flat = shelf.admits(item.width, item.height, bin);
            let fits_rotated =
                self.rotation.is_enabled() && shelf.admits(item.height, item.width, bin);

            let orientation = match (fits_flat, fits_rotated) {
                (false, false) => continue,
                (true, false) => Orientation::Flat,
                (false, true) => Orientation::Rotated,
                (true, true) => self.policy.choose(shelf.height, item),
            };

            let (width, _) = item.dims(orientation);
            let x = shelf.advance(width);
            return Some(Placement::new(item, orientation, x, shelf.y));
        }
        None
    }

    /// Opens a shelf on top of the last one, flat if possible, rotated otherwise
    fn place_on_new_shelf<L: Clone>(
        &self,
        bin: &Bin,
        shelves: &mut Vec<Shelf>,
        item: &Item<L>,
    ) -> Option<Placement<L>> {
        let y = shelves.last().map_or(0.0, Shelf::top);

        let orientation = self.orientations().into_iter().find(|&o| {
            let (width, height) = item.dims(o);
            y + height <= bin.height() && width <= bin.width()
        })?;

        let (width, height) = item.dims(orientation);
        shelves.push(Shelf::open(y, width, height));
        Some(Placement::new(item, orientation, 0.0, y))
    }

    fn orientations(&self) -> Vec<Orientation> {
        match self.rotation {
            Rotation::Enabled => vec![Orientation::Flat, Orientation::Rotated],
            Rotation::Disabled => vec![Orientation::Flat],
        }
    }
}

impl PackingStrategy for ShelfPacker {
    const NAME: &'static str = "SHELF";

    fn pack<L: Clone>(&self, bin: Bin, items: Vec<Item<L>>) -> PackResult<L> {
        self.pack_shelves(bin, items).result
    }
}
