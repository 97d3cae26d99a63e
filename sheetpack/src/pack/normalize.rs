use crate::entities::{Item, ItemSpec};
use crate::pack::Rotation;

/// Brings every item into a canonical orientation.
///
/// With rotation enabled, items taller than wide are turned so that `width >= height`,
/// which is remembered in [`Item::started_rotated`]. With rotation disabled, items are taken as they are.
pub fn normalize<L: Clone>(specs: &[ItemSpec<L>], rotation: Rotation) -> Vec<Item<L>> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let swap = rotation.is_enabled() && spec.height > spec.width;
            let (width, height) = match swap {
                true => (spec.height, spec.width),
                false => (spec.width, spec.height),
            };
            Item {
                index,
                width,
                height,
                started_rotated: swap,
                label: spec.label.clone(),
            }
        })
        .collect()
}
