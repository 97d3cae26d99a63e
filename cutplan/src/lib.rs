use std::sync::LazyLock;
use std::time::Instant;

use log::info;
use sheetpack::PackError;
use sheetpack::io::export::export;
use sheetpack::io::ext_repr::{ExtInstance, ExtSolution};
use sheetpack::io::import::{Importer, SheetInstance};

use crate::config::CutConfig;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Imports `request`, packs it with the strategy of `config` and exports the solution.
/// The imported instance is returned alongside, it holds the validated sheet.
pub fn plan(
    request: &ExtInstance,
    config: &CutConfig,
) -> Result<(SheetInstance, ExtSolution), PackError> {
    let importer = Importer::new(config.kerf_mode);
    let instance = importer.import_instance(request)?;
    let result = instance.pack(config.strategy)?;
    let solution = export(&instance, &result);

    info!(
        "[PLAN] {}/{} parts placed, efficiency: {:.3}%",
        solution.count,
        instance.items.len(),
        solution.efficiency
    );

    Ok((instance, solution))
}
