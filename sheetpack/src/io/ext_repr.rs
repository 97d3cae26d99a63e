use serde::{Deserialize, Serialize};

/// External representation of a cut planning request: a single sheet and a list of blocks to cut from it.
///
/// Every key is optional, absent keys take the values of [`ExtInstance::default`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtInstance {
    /// Width of the sheet
    #[serde(default = "default_sheet_w")]
    pub sheet_w: f64,
    /// Height of the sheet
    #[serde(default = "default_sheet_h")]
    pub sheet_h: f64,
    /// Whether parts may be turned by 90°
    #[serde(default = "default_rotation")]
    pub rotation: bool,
    /// Width of the material removed by a single cut
    #[serde(default)]
    pub kerf: f64,
    #[serde(default)]
    pub blocks: Vec<ExtBlock>,
}

/// A part size together with the number of copies to cut
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBlock {
    pub w: f64,
    pub h: f64,
    /// Quantity
    #[serde(default = "default_quantity")]
    pub q: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// External representation of a packed sheet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub placements: Vec<ExtPlacement>,
    pub unplaced: Vec<ExtUnplaced>,
    /// Percentage of the sheet area covered by parts
    pub efficiency: f64,
    /// Number of placed parts
    pub count: usize,
}

/// A part on the sheet, `(x, y)` is its bottom-left corner
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Whether `w` and `h` are swapped compared to the block the part was requested as
    pub rotated: bool,
    pub label: String,
}

/// A part that did not fit on the sheet, in the size it was requested
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtUnplaced {
    pub w: f64,
    pub h: f64,
    pub label: String,
}

impl Default for ExtInstance {
    fn default() -> Self {
        Self {
            sheet_w: default_sheet_w(),
            sheet_h: default_sheet_h(),
            rotation: default_rotation(),
            kerf: 0.0,
            blocks: vec![],
        }
    }
}

fn default_sheet_w() -> f64 {
    2440.0
}

fn default_sheet_h() -> f64 {
    1220.0
}

fn default_rotation() -> bool {
    true
}

fn default_quantity() -> usize {
    1
}
