use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sheetpack::pack::Strategy;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the strategy of the config file
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Shelf,
    Guillotine,
}

impl StrategyKind {
    /// Switches `current` to this kind of strategy.
    /// Policies of `current` are kept if it already is of this kind, defaults are used otherwise.
    pub fn apply(self, current: Strategy) -> Strategy {
        match (self, current) {
            (StrategyKind::Shelf, Strategy::Shelf { .. })
            | (StrategyKind::Guillotine, Strategy::Guillotine { .. }) => current,
            (StrategyKind::Shelf, _) => Strategy::Shelf {
                policy: Default::default(),
            },
            (StrategyKind::Guillotine, _) => Strategy::Guillotine {
                score: Default::default(),
                split: Default::default(),
            },
        }
    }
}
