use crate::PackError;
use crate::entities::{Bin, ItemSpec, PackResult};
use crate::io::ext_repr::{ExtBlock, ExtInstance};
use crate::pack::{PackConfig, Rotation, Strategy};
use log::debug;
use serde::{Deserialize, Serialize};

/// How the [`Importer`] handles a nonzero kerf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KerfMode {
    /// Parts and sheet are inflated by the kerf before packing and deflated again on export,
    /// which keeps at least one kerf of material between any two parts.
    #[default]
    Inflate,
    /// Nonzero kerf is refused with [`PackError::UnsupportedParameter`]
    Reject,
}

/// Identifies a part by the block it was requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct PartLabel {
    /// Index of the block in the request
    pub block: usize,
    /// Which of the block's copies this part is
    pub copy: usize,
    /// Label of the block, empty if none was given
    pub name: String,
    /// Requested width, without kerf
    pub width: f64,
    /// Requested height, without kerf
    pub height: f64,
}

/// A request ready to be packed.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetInstance {
    /// The sheet as requested
    pub sheet: Bin,
    /// The sheet the engine packs into, inflated by the kerf
    pub bin: Bin,
    pub rotation: Rotation,
    pub kerf: f64,
    /// One item per physical part, in block order, inflated by the kerf
    pub items: Vec<ItemSpec<PartLabel>>,
}

impl SheetInstance {
    pub fn pack(&self, strategy: Strategy) -> Result<PackResult<PartLabel>, PackError> {
        crate::pack(self.bin, &self.items, PackConfig::new(self.rotation, strategy))
    }
}

/// Converts external requests into [`SheetInstance`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Importer {
    pub kerf_mode: KerfMode,
}

impl Importer {
    pub fn new(kerf_mode: KerfMode) -> Self {
        Self { kerf_mode }
    }

    /// Validates the request and expands every block into `q` items.
    /// Nothing is returned unless the sheet, the kerf and every block are valid.
    pub fn import_instance(&self, ext: &ExtInstance) -> Result<SheetInstance, PackError> {
        let sheet = Bin::try_new(ext.sheet_w, ext.sheet_h)?;
        let kerf = self.import_kerf(ext.kerf)?;
        ext.blocks
            .iter()
            .enumerate()
            .try_for_each(|(i, block)| ItemSpec::new(block.w, block.h, ()).validate(i))?;

        let bin = Bin::try_new(sheet.width() + kerf, sheet.height() + kerf)?;
        let items = ext
            .blocks
            .iter()
            .enumerate()
            .flat_map(|(i, block)| expand_block(i, block, kerf))
            .collect::<Vec<_>>();

        debug!(
            "[IMPORT] {} blocks expanded into {} parts, kerf: {}",
            ext.blocks.len(),
            items.len(),
            kerf
        );

        Ok(SheetInstance {
            sheet,
            bin,
            rotation: Rotation::from(ext.rotation),
            kerf,
            items,
        })
    }

    fn import_kerf(&self, kerf: f64) -> Result<f64, PackError> {
        if !kerf.is_finite() || kerf < 0.0 {
            return Err(PackError::InvalidParameter {
                name: "kerf",
                value: kerf,
            });
        }
        match (self.kerf_mode, kerf > 0.0) {
            (KerfMode::Reject, true) => Err(PackError::UnsupportedParameter {
                name: "kerf",
                value: kerf,
            }),
            _ => Ok(kerf),
        }
    }
}

fn expand_block(
    block_idx: usize,
    block: &ExtBlock,
    kerf: f64,
) -> impl Iterator<Item = ItemSpec<PartLabel>> + '_ {
    (0..block.q).map(move |copy| {
        ItemSpec::new(
            block.w + kerf,
            block.h + kerf,
            PartLabel {
                block: block_idx,
                copy,
                name: block.label.clone().unwrap_or_default(),
                width: block.w,
                height: block.h,
            },
        )
    })
}
