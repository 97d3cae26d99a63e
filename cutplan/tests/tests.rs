#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use cutplan::config::CutConfig;
    use cutplan::io::output::PlanOutput;
    use cutplan::{io, plan};
    use sheetpack::PackError;
    use sheetpack::io::import::KerfMode;
    use sheetpack::io::svg::{SvgLayoutTheme, solution_to_svg};
    use sheetpack::pack::{FreeRectScore, ShelfOrientationPolicy, SplitRule, Strategy};

    const GUILLOTINE: Strategy = Strategy::Guillotine {
        score: FreeRectScore::BestShortSideFit,
        split: SplitRule::ShorterLeftoverAxis,
    };

    #[test_case("../assets/kitchen.json", Strategy::default(); "kitchen shelf")]
    #[test_case("../assets/kitchen.json", GUILLOTINE; "kitchen guillotine")]
    #[test_case("../assets/oversized.json", Strategy::default(); "oversized shelf")]
    #[test_case("../assets/oversized.json", GUILLOTINE; "oversized guillotine")]
    fn test_request(request_path: &str, strategy: Strategy) {
        let request = io::read_request(Path::new(request_path)).unwrap();
        let config = CutConfig {
            strategy,
            ..CutConfig::default()
        };
        let (instance, solution) = plan(&request, &config).unwrap();

        let n_parts = request.blocks.iter().map(|b| b.q).sum::<usize>();
        assert_eq!(solution.count, solution.placements.len());
        assert_eq!(solution.count + solution.unplaced.len(), n_parts);

        for p in &solution.placements {
            assert!(p.x >= 0.0 && p.y >= 0.0);
            assert!(p.x + p.w <= request.sheet_w && p.y + p.h <= request.sheet_h);
        }

        let used_area = solution.placements.iter().map(|p| p.w * p.h).sum::<f64>();
        let expected = 100.0 * used_area / (request.sheet_w * request.sheet_h);
        assert!(approx_eq!(f64, solution.efficiency, expected, epsilon = 1e-9));
        assert!(solution.efficiency <= 100.0);

        let svg = solution_to_svg(&instance.sheet, &solution, config.svg_draw_options, "").to_string();
        assert_eq!(svg.matches("id=\"part_").count(), solution.count);
    }

    #[test]
    fn oversized_parts_are_reported() {
        let request = io::read_request(Path::new("../assets/oversized.json")).unwrap();
        let (_, solution) = plan(&request, &CutConfig::default()).unwrap();

        assert_eq!(solution.count, 1);
        assert_eq!(solution.placements[0].label, "fits");
        let mut unplaced = solution
            .unplaced
            .iter()
            .map(|u| u.label.as_str())
            .collect::<Vec<_>>();
        unplaced.sort();
        assert_eq!(unplaced, ["too tall", "too wide"]);
        assert!(approx_eq!(f64, solution.efficiency, 48.0, epsilon = 1e-9));
    }

    #[test]
    fn config_file() {
        let config = io::read_config(Path::new("../assets/guillotine_config.json")).unwrap();

        assert_eq!(config.strategy, GUILLOTINE);
        assert_eq!(config.kerf_mode, KerfMode::Inflate);
        assert_eq!(config.svg_draw_options.theme, SvgLayoutTheme::GRAY);
        assert!(!config.svg_draw_options.highlight_rotated);

        assert!(io::read_config(Path::new("../assets/missing.json")).is_err());
        assert!(io::read_config(Path::new("../assets/kitchen.json")).is_ok_and(|c| c == CutConfig::default()));
    }

    #[test]
    fn kerf_can_be_rejected() {
        let request = io::read_request(Path::new("../assets/kitchen.json")).unwrap();
        let config = CutConfig {
            kerf_mode: KerfMode::Reject,
            ..CutConfig::default()
        };
        let err = plan(&request, &config).unwrap_err();
        assert_eq!(
            err,
            PackError::UnsupportedParameter {
                name: "kerf",
                value: 4.0
            }
        );
    }

    #[test]
    fn output_files() {
        let folder = std::env::temp_dir().join("cutplan_output_files");
        fs::create_dir_all(&folder).unwrap();

        let request = io::read_request(Path::new("../assets/kitchen.json")).unwrap();
        let config = CutConfig {
            strategy: Strategy::Shelf {
                policy: ShelfOrientationPolicy::PreferFlat,
            },
            ..CutConfig::default()
        };
        let (instance, solution) = plan(&request, &config).unwrap();

        let svg_path = folder.join("sol_kitchen.svg");
        let svg = solution_to_svg(&instance.sheet, &solution, config.svg_draw_options, "kitchen");
        io::write_svg(&svg, &svg_path).unwrap();
        assert!(fs::read_to_string(&svg_path).unwrap().contains("<svg"));

        let json_path = folder.join("sol_kitchen.json");
        let output = PlanOutput {
            request: request.clone(),
            solution: solution.clone(),
            config,
        };
        io::write_json(&output, &json_path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["sheetW"], 2440.0);
        assert_eq!(value["kerf"], 4.0);
        assert_eq!(value["config"]["strategy"]["kind"], "shelf");
        assert_eq!(value["config"]["strategy"]["policy"], "prefer_flat");
        assert_eq!(value["solution"]["count"], solution.count);

        let read_back: PlanOutput = serde_json::from_value(value).unwrap();
        assert_eq!(read_back.request, request);
        assert_eq!(read_back.solution.placements, solution.placements);
        assert!(approx_eq!(f64, read_back.solution.efficiency, solution.efficiency, ulps = 2));
    }
}
