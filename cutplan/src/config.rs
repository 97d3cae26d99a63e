use serde::{Deserialize, Serialize};
use sheetpack::io::import::KerfMode;
use sheetpack::io::svg::SvgDrawOptions;
use sheetpack::pack::Strategy;

/// Configuration for the cut planner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct CutConfig {
    /// Packing strategy and its scoring policies
    #[serde(default)]
    pub strategy: Strategy,
    /// What to do with a nonzero kerf in the request
    #[serde(default)]
    pub kerf_mode: KerfMode,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetpack::pack::{FreeRectScore, SplitRule};

    #[test]
    fn partial_config() {
        let json = r#"{"strategy": {"kind": "guillotine", "score": "best_area_fit"}, "kerf_mode": "reject"}"#;
        let config: CutConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.strategy,
            Strategy::Guillotine {
                score: FreeRectScore::BestAreaFit,
                split: SplitRule::ShorterLeftoverAxis,
            }
        );
        assert_eq!(config.kerf_mode, KerfMode::Reject);
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());

        let config: CutConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CutConfig::default());
    }
}
