mod bin;
mod item;
mod placement;
mod rect;
mod result;
mod shelf;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use item::ItemSpec;
#[doc(inline)]
pub use item::Orientation;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::UnplacedItem;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use result::PackResult;
#[doc(inline)]
pub use shelf::Shelf;

/// Dimensions of bins and items have to be finite and strictly positive
pub(crate) fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
