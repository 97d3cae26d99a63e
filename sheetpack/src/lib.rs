//!
//! Packing engine for rectangular parts on a single fixed-size sheet.
//!
//! A packing call is a pure function of a [`Bin`](entities::Bin), a [`PackConfig`](pack::PackConfig)
//! and a list of [`ItemSpec`](entities::ItemSpec)s. It returns the [`Placement`](entities::Placement)s
//! of all parts that fit and reports the ones that did not.
//!
//! All geometry uses the bottom-left corner of the bin as origin, x pointing right and y pointing up.
//!

/// Entities used by the packing engine
pub mod entities;

/// Packing strategies and the pipeline that drives them
pub mod pack;

/// Importing requests into and exporting solutions out of the library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PackError;

#[doc(inline)]
pub use pack::pack;
