//! Checks on the output of the packing strategies.
//! Used by `debug_assert!`s after every packing call and as oracles in tests.

use crate::entities::{Bin, PackResult, Placement, Shelf};
use crate::util::FPA;
use itertools::Itertools;

/// No two placements have overlapping interiors
pub fn placements_are_disjoint<L>(placements: &[Placement<L>]) -> bool {
    placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.rect().overlaps(&b.rect()))
}

/// Every placement lies within the bin
pub fn placements_within_bin<L>(placements: &[Placement<L>], bin: &Bin) -> bool {
    let bin_rect = bin.rect();
    placements.iter().all(|p| bin_rect.contains(&p.rect()))
}

/// Shelves are stacked on top of each other starting from the bottom of the bin,
/// and none of them extends beyond the bin.
pub fn shelves_are_stacked(shelves: &[Shelf], bin: &Bin) -> bool {
    let starts_at_bottom = shelves.first().is_none_or(|s| s.y == 0.0);
    let stacked = shelves
        .iter()
        .tuple_windows()
        .all(|(lower, upper)| upper.y == lower.top());
    let within_bin = shelves.iter().all(|s| {
        FPA(s.cursor_x) <= FPA(bin.width()) && FPA(s.top()) <= FPA(bin.height())
    });

    starts_at_bottom && stacked && within_bin
}

/// Every item of the input shows up exactly once, either placed or unplaced
pub fn result_accounts_for<L>(result: &PackResult<L>, n_items: usize) -> bool {
    let mut seen = vec![false; n_items];
    let indices = result
        .placements
        .iter()
        .map(|p| p.item)
        .chain(result.unplaced.iter().map(|u| u.item));
    for i in indices {
        match seen.get_mut(i) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    seen.into_iter().all(|s| s)
}

/// Combination of all checks that apply to any strategy
pub fn layout_is_valid<L>(result: &PackResult<L>, bin: &Bin, n_items: usize) -> bool {
    placements_are_disjoint(&result.placements)
        && placements_within_bin(&result.placements, bin)
        && result_accounts_for(result, n_items)
}
