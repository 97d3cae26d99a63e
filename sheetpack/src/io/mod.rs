/// External (serializable) representations of requests and solutions.
pub mod ext_repr;

/// All logic for converting external requests into packing input
pub mod import;

/// All logic for exporting packing results into external solutions
pub mod export;

/// All logic for creating SVG from [`ExtSolution`](ext_repr::ExtSolution)s
pub mod svg;
