use crate::entities::Item;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Order in which the shelf packer places items: tallest first, then widest first, then by input index.
pub fn decreasing_height<L>(items: Vec<Item<L>>) -> Vec<Item<L>> {
    items
        .into_iter()
        .sorted_by_key(|item| {
            (
                Reverse(OrderedFloat(item.height)),
                Reverse(OrderedFloat(item.width)),
                item.index,
            )
        })
        .collect_vec()
}

/// Order in which the guillotine packer places items: longest side first, then by input index.
pub fn decreasing_longest_side<L>(items: Vec<Item<L>>) -> Vec<Item<L>> {
    items
        .into_iter()
        .sorted_by_key(|item| {
            (
                Reverse(OrderedFloat(f64::max(item.width, item.height))),
                item.index,
            )
        })
        .collect_vec()
}
