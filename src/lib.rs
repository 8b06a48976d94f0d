//! Sol LeWitt style line-field art generators for pen plotters
//!
//! This library procedurally generates line-art compositions in the manner of
//! LeWitt's wall drawings: regular grids of segments with randomly perturbed
//! endpoints, and fields of dashed horizontal/vertical lines. Everything is
//! seed-deterministic, so an artwork you like can be plotted again
//! bit-for-bit. Geometry rides on geo/geo_types, output goes to SVG for the
//! plotter or (optionally) to a nannou window for on-screen tinkering.

/// Extensions/Traits for geo_types geometry: SVG arrangement/export, plus
/// Nannou drawing helpers behind the `nannou` feature.
pub mod geo_types;

/// The generators themselves: jittered line fields and LeWitt's
/// "Locations of Lines".
pub mod elements;

/// The Composition value type produced by every generator.
pub mod composition;

/// Error types for generator validation.
pub mod errors;

/// Make your life easy! Just import prelude::* and ignore all the warnings!
pub mod prelude {
    pub use crate::composition::Composition;
    pub use crate::elements::{
        LineField, LineFieldBuilder, LocationsOfLines, LocationsOfLinesBuilder, Orientation,
    };
    pub use crate::errors::FieldError;
    #[cfg(feature = "nannou")]
    pub use crate::geo_types::nannou::NannouDrawer;
    pub use crate::geo_types::svg::{Arrangement, ToSvg};
}
