mod guillotine;
mod normalize;
mod order;
mod policy;
mod shelf;

#[doc(inline)]
pub use guillotine::GuillotinePacker;
#[doc(inline)]
pub use normalize::normalize;
#[doc(inline)]
pub use order::{decreasing_height, decreasing_longest_side};
#[doc(inline)]
pub use policy::{FreeRectScore, ShelfOrientationPolicy, SplitRule};
#[doc(inline)]
pub use shelf::{ShelfPacker, ShelfSolution};

use crate::PackError;
use crate::entities::{Bin, Item, ItemSpec, PackResult};
use log::info;
use serde::{Deserialize, Serialize};

/// Whether items may be turned by 90° when packed.
/// Threaded through every decision point of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Disabled,
    #[default]
    Enabled,
}

impl Rotation {
    pub fn is_enabled(self) -> bool {
        self == Rotation::Enabled
    }
}

impl From<bool> for Rotation {
    fn from(enabled: bool) -> Self {
        match enabled {
            true => Rotation::Enabled,
            false => Rotation::Disabled,
        }
    }
}

/// Selects the packing strategy, together with its scoring policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// First-fit decreasing height shelf packing, see [`ShelfPacker`]
    Shelf {
        #[serde(default)]
        policy: ShelfOrientationPolicy,
    },
    /// Free rectangle packing with guillotine splits, see [`GuillotinePacker`]
    Guillotine {
        #[serde(default)]
        score: FreeRectScore,
        #[serde(default)]
        split: SplitRule,
    },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Shelf {
            policy: ShelfOrientationPolicy::default(),
        }
    }
}

/// Configuration of a single packing call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PackConfig {
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub strategy: Strategy,
}

impl PackConfig {
    pub fn new(rotation: Rotation, strategy: Strategy) -> Self {
        Self { rotation, strategy }
    }
}

/// An algorithm that decides where each item goes inside a bin.
///
/// Implementations hold configuration only: all state required to pack lives within a single call to [`PackingStrategy::pack`].
pub trait PackingStrategy {
    /// Short tag used in log messages
    const NAME: &'static str;

    /// Packs normalized items (see [`normalize`]) into `bin`.
    /// Every item ends up in exactly one of [`PackResult::placements`] or [`PackResult::unplaced`].
    fn pack<L: Clone>(&self, bin: Bin, items: Vec<Item<L>>) -> PackResult<L>;
}

/// Packs `items` into `bin` according to `config`.
///
/// Fails without doing any work if one of the items has invalid dimensions.
/// Items that do not fit are reported in [`PackResult::unplaced`], they do not cause an error.
pub fn pack<L: Clone>(
    bin: Bin,
    items: &[ItemSpec<L>],
    config: PackConfig,
) -> Result<PackResult<L>, PackError> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(i, spec)| spec.validate(i))?;

    let items = normalize(items, config.rotation);

    let result = match config.strategy {
        Strategy::Shelf { policy } => run(&ShelfPacker::new(config.rotation, policy), bin, items),
        Strategy::Guillotine { score, split } => run(
            &GuillotinePacker::new(config.rotation, score, split),
            bin,
            items,
        ),
    };

    Ok(result)
}

fn run<S: PackingStrategy, L: Clone>(strategy: &S, bin: Bin, items: Vec<Item<L>>) -> PackResult<L> {
    let n_items = items.len();
    let result = strategy.pack(bin, items);

    info!(
        "[{}] placed {}/{} items on a {} x {} bin",
        S::NAME,
        result.placements.len(),
        n_items,
        bin.width(),
        bin.height()
    );
    result
}
