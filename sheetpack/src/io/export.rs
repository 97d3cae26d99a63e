use crate::entities::{PackResult, Placement, UnplacedItem};
use crate::io::ext_repr::{ExtPlacement, ExtSolution, ExtUnplaced};
use crate::io::import::{PartLabel, SheetInstance};

/// Exports a [`PackResult`] of `instance` by composing an [`ExtSolution`] from it.
///
/// Sizes are the requested block sizes (without kerf), swapped for rotated parts.
/// Positions are kept as they are.
pub fn export(instance: &SheetInstance, result: &PackResult<PartLabel>) -> ExtSolution {
    let placements = result
        .placements
        .iter()
        .map(export_placement)
        .collect::<Vec<_>>();

    let unplaced = result
        .unplaced
        .iter()
        .map(export_unplaced)
        .collect();

    let used_area = placements.iter().map(|p| p.w * p.h).sum::<f64>();
    let sheet_area = instance.sheet.area();
    let efficiency = match sheet_area > 0.0 {
        true => 100.0 * used_area / sheet_area,
        false => 0.0,
    };

    ExtSolution {
        count: placements.len(),
        placements,
        unplaced,
        efficiency,
    }
}

fn export_placement(p: &Placement<PartLabel>) -> ExtPlacement {
    let (w, h) = match p.rotated {
        false => (p.label.width, p.label.height),
        true => (p.label.height, p.label.width),
    };
    ExtPlacement {
        x: p.x,
        y: p.y,
        w,
        h,
        rotated: p.rotated,
        label: p.label.name.clone(),
    }
}

fn export_unplaced(u: &UnplacedItem<PartLabel>) -> ExtUnplaced {
    ExtUnplaced {
        w: u.label.width,
        h: u.label.height,
        label: u.label.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtBlock, ExtInstance};
    use crate::io::import::Importer;
    use crate::pack::Strategy;
    use float_cmp::approx_eq;

    fn solve(ext: &ExtInstance) -> ExtSolution {
        let instance = Importer::default().import_instance(ext).unwrap();
        let result = instance.pack(Strategy::default()).unwrap();
        export(&instance, &result)
    }

    #[test]
    fn efficiency_and_count() {
        let ext = ExtInstance {
            sheet_w: 100.0,
            sheet_h: 100.0,
            rotation: false,
            kerf: 0.0,
            blocks: vec![ExtBlock {
                w: 50.0,
                h: 50.0,
                q: 5,
                label: Some("tile".into()),
            }],
        };
        let sol = solve(&ext);

        assert_eq!(sol.count, 4);
        assert_eq!(sol.placements.len(), 4);
        assert_eq!(sol.unplaced.len(), 1);
        assert_eq!(sol.unplaced[0].label, "tile");
        assert!(approx_eq!(f64, sol.efficiency, 100.0, ulps = 4));
    }

    #[test]
    fn kerf_is_removed_from_sizes() {
        // four 48 x 48 parts with a kerf of 4 fit in 100 x 100, two rows of two
        let ext = ExtInstance {
            sheet_w: 100.0,
            sheet_h: 100.0,
            rotation: true,
            kerf: 4.0,
            blocks: vec![ExtBlock {
                w: 48.0,
                h: 48.0,
                q: 4,
                label: None,
            }],
        };
        let sol = solve(&ext);

        assert_eq!(sol.count, 4);
        for p in &sol.placements {
            assert_eq!((p.w, p.h), (48.0, 48.0));
            assert!(p.x + p.w <= 100.0 && p.y + p.h <= 100.0);
        }
        let xs = sol.placements.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>();
        assert_eq!(xs, [(0.0, 0.0), (52.0, 0.0), (0.0, 52.0), (52.0, 52.0)]);
        assert!(approx_eq!(f64, sol.efficiency, 92.16, epsilon = 1e-9));
    }

    #[test]
    fn sizes_survive_kerf_exactly() {
        // 0.1 + 0.2 - 0.2 and 0.1 + 0.7 - 0.7 are not 0.1 in f64
        let ext = ExtInstance {
            sheet_w: 100.0,
            sheet_h: 100.0,
            rotation: true,
            kerf: 0.2,
            blocks: vec![ExtBlock {
                w: 0.1,
                h: 0.7,
                q: 2,
                label: None,
            }],
        };
        let sol = solve(&ext);
        assert_eq!(sol.count, 2);
        for p in &sol.placements {
            match p.rotated {
                false => assert_eq!((p.w, p.h), (0.1, 0.7)),
                true => assert_eq!((p.w, p.h), (0.7, 0.1)),
            }
        }

        let ext = ExtInstance {
            sheet_w: 0.3,
            sheet_h: 0.3,
            rotation: false,
            kerf: 0.7,
            blocks: vec![
                ExtBlock {
                    w: 0.1,
                    h: 0.1,
                    q: 1,
                    label: None,
                },
                ExtBlock {
                    w: 0.1,
                    h: 0.4,
                    q: 1,
                    label: Some("long".into()),
                },
            ],
        };
        let sol = solve(&ext);
        assert_eq!(sol.count, 1);
        assert_eq!((sol.placements[0].w, sol.placements[0].h), (0.1, 0.1));
        assert_eq!(sol.unplaced[0].label, "long");
        assert_eq!((sol.unplaced[0].w, sol.unplaced[0].h), (0.1, 0.4));
    }
}
