/// Jittered-grid line segments, the core generator.
pub mod line_field;

/// Dashed horizontal/vertical LeWitt line families.
pub mod locations;

pub use line_field::{LineField, LineFieldBuilder, Orientation};
pub use locations::{LocationsOfLines, LocationsOfLinesBuilder};
