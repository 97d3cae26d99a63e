use crate::entities::Bin;
use crate::io::ext_repr::{ExtPlacement, ExtSolution};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws `solution` on `sheet`.
///
/// Placements use a bottom-left origin with y pointing up, SVG uses a top-left origin with y pointing down:
/// a part at `(x, y)` with height `h` is drawn with its top edge at `sheet.height() - (y + h)`.
pub fn solution_to_svg(
    sheet: &Bin,
    solution: &ExtSolution,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let (sheet_w, sheet_h) = (sheet.width(), sheet.height());
    let theme = &options.theme;

    //10% margin around the sheet
    let vbox = (-0.05 * sheet_w, -0.05 * sheet_h, 1.10 * sheet_w, 1.10 * sheet_h);
    let min_dim = f64::min(sheet_w, sheet_h);
    let stroke_width = f64::min(vbox.2, vbox.3) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the sheet
        let label_content = format!(
            "width: {:.3} | height: {:.3} | efficiency: {:.3}% | placed: {} | unplaced: {} | {}",
            sheet_w,
            sheet_h,
            solution.efficiency,
            solution.count,
            solution.unplaced.len(),
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * 0.025 * min_dim)
            .set("font-size", 0.025 * min_dim)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", "sheet")
        .add(svg_util::rectangle(
            0.0,
            0.0,
            sheet_w,
            sheet_h,
            &[
                ("fill", &*format!("{}", theme.sheet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!("sheet, {sheet_w} x {sheet_h}")));

    let parts_group = solution
        .placements
        .iter()
        .enumerate()
        .fold(Group::new().set("id", "parts"), |group, (i, p)| {
            group.add(part_to_svg(i, p, sheet_h, stroke_width, &options))
        });

    Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(parts_group)
        .add(label)
}

fn part_to_svg(
    idx: usize,
    p: &ExtPlacement,
    sheet_h: f64,
    stroke_width: f64,
    options: &SvgDrawOptions,
) -> Group {
    let theme = &options.theme;
    let svg_y = sheet_h - (p.y + p.h);

    let fill = match options.highlight_rotated && p.rotated {
        true => svg_util::change_brightness(theme.part_fill, 0.85),
        false => theme.part_fill,
    };
    let stroke = svg_util::change_brightness(theme.part_fill, 0.5);

    let title = Title::new(format!(
        "part {}{}, x: {:.3}, y: {:.3}, {:.3} x {:.3}{}",
        idx,
        match p.label.is_empty() {
            true => String::new(),
            false => format!(" ({})", p.label),
        },
        p.x,
        p.y,
        p.w,
        p.h,
        if p.rotated { ", rotated" } else { "" }
    ));

    let mut group = Group::new()
        .set("id", format!("part_{idx}"))
        .add(svg_util::rectangle(
            p.x,
            svg_y,
            p.w,
            p.h,
            &[
                ("fill", &*format!("{fill}")),
                ("stroke", &*format!("{stroke}")),
                ("stroke-width", &*format!("{stroke_width}")),
            ],
        ))
        .add(title);

    if options.part_labels {
        let content = match p.label.is_empty() {
            true => format!("{} x {}", p.w, p.h),
            false => format!("{} {} x {}", p.label, p.w, p.h),
        };
        let font_size = f64::min(0.15 * f64::min(p.w, p.h), 1.8 * p.w / content.len() as f64);
        group = group.add(
            Text::new(content)
                .set("x", p.x + 0.5 * p.w)
                .set("y", svg_y + 0.5 * p.h)
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("fill", format!("{}", theme.text_fill)),
        );
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::ExtPlacement;

    fn solution() -> ExtSolution {
        ExtSolution {
            placements: vec![ExtPlacement {
                x: 10.0,
                y: 20.0,
                w: 30.0,
                h: 40.0,
                rotated: true,
                label: "leg".into(),
            }],
            unplaced: vec![],
            efficiency: 12.0,
            count: 1,
        }
    }

    #[test]
    fn parts_are_flipped_vertically() {
        let sheet = Bin::try_new(100.0, 100.0).unwrap();
        let svg = solution_to_svg(&sheet, &solution(), SvgDrawOptions::default(), "test").to_string();

        // 100 - (20 + 40)
        assert!(svg.contains(r#"id="part_0""#));
        assert!(svg.contains(r#"y="40""#));
        assert!(svg.contains("efficiency: 12.000%"));
        assert!(svg.contains("leg 30 x 40"));
    }

    #[test]
    fn labels_can_be_turned_off() {
        let sheet = Bin::try_new(100.0, 100.0).unwrap();
        let options = SvgDrawOptions {
            part_labels: false,
            ..SvgDrawOptions::default()
        };
        let svg = solution_to_svg(&sheet, &solution(), options, "").to_string();
        assert!(!svg.contains("leg 30 x 40"));
    }
}
