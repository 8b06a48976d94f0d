/// Helper module for drawing geo-types geometry in Nannou.
#[cfg(feature = "nannou")]
pub mod nannou;

/// Trait to arrange geometry onto a page and convert it into SVG components.
pub mod svg;
