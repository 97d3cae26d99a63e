use thiserror::Error;

/// Errors that make a packing request impossible to process.
/// Parts that do not fit are not errors, they end up in [`PackResult::unplaced`](crate::entities::PackResult::unplaced).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    #[error("invalid bin: {width} x {height}, both dimensions must be finite and strictly positive")]
    InvalidBin { width: f64, height: f64 },

    /// `index` is the position of the offending entry in the list handed in by the caller.
    #[error(
        "invalid item at index {index}: {width} x {height}, both dimensions must be finite and strictly positive"
    )]
    InvalidItem { index: usize, width: f64, height: f64 },

    #[error("invalid value for parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("parameter `{name}` is set to {value}, which is not supported in the current configuration")]
    UnsupportedParameter { name: &'static str, value: f64 },
}
