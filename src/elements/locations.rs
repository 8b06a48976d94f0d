use geo_types::{coord, Line};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::composition::Composition;
use crate::errors::FieldError;

/// Generator for LeWitt's "Locations of Lines" wall drawings.
///
/// Two families of dashed lines fill a square region: horizontal rows spaced
/// `row_spacing` apart and vertical columns spaced `column_spacing` apart.
/// Every dash is `line_length` long with a `line_gap` between dashes, and
/// each row/column gets its own random phase offset so no two rows break in
/// the same place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationsOfLines {
    extent: f64,
    line_length: f64,
    line_gap: f64,
    row_spacing: f64,
    column_spacing: f64,
    seed: Option<u64>,
}

impl Default for LocationsOfLines {
    fn default() -> Self {
        Self {
            extent: 1000.0,
            line_length: 250.0,
            line_gap: 50.0,
            row_spacing: 20.0,
            column_spacing: 20.0,
            seed: None,
        }
    }
}

impl LocationsOfLines {
    fn validate(&self) -> Result<(), FieldError> {
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(FieldError::InvalidExtent(self.extent));
        }
        if !(self.line_length.is_finite() && self.line_length > 0.0) {
            return Err(FieldError::InvalidDashLength(self.line_length));
        }
        if !(self.line_gap.is_finite() && self.line_gap >= 0.0) {
            return Err(FieldError::InvalidDashGap(self.line_gap));
        }
        for spacing in [self.row_spacing, self.column_spacing] {
            if !(spacing.is_finite() && spacing > 0.0) {
                return Err(FieldError::InvalidSpacing(spacing));
            }
        }
        Ok(())
    }

    /// Generate the full dash set, horizontal rows first, then vertical
    /// columns, each family in ascending position order. One uniform draw
    /// per row/column (the phase), so a seed reproduces the artwork exactly.
    pub fn generate(&self) -> Result<Composition, FieldError> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let period = self.line_length + self.line_gap;
        let mut segments: Vec<Line<f64>> = Vec::new();

        let mut y = 0.0;
        while y <= self.extent {
            let phase = rng.gen::<f64>() * period;
            self.dash_row(phase, |x0, x1| {
                segments.push(Line::new(coord! {x: x0, y: y}, coord! {x: x1, y: y}));
            });
            y += self.row_spacing;
        }

        let mut x = 0.0;
        while x <= self.extent {
            let phase = rng.gen::<f64>() * period;
            self.dash_row(phase, |y0, y1| {
                segments.push(Line::new(coord! {x: x, y: y0}, coord! {x: x, y: y1}));
            });
            x += self.column_spacing;
        }

        Ok(Composition::new(segments))
    }

    // Walks one row's dashes along its axis. Trailing partial dashes are
    // dropped rather than clipped, as in the source artwork.
    fn dash_row<F: FnMut(f64, f64)>(&self, phase: f64, mut emit: F) {
        let period = self.line_length + self.line_gap;
        let mut start = phase;
        while start + self.line_length <= self.extent {
            emit(start, start + self.line_length);
            start += period;
        }
    }
}

pub struct LocationsOfLinesBuilder {
    locations: LocationsOfLines,
}

impl Default for LocationsOfLinesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationsOfLinesBuilder {
    pub fn new() -> LocationsOfLinesBuilder {
        LocationsOfLinesBuilder {
            locations: LocationsOfLines::default(),
        }
    }

    pub fn extent(self, extent: f64) -> Self {
        LocationsOfLinesBuilder {
            locations: LocationsOfLines {
                extent,
                ..self.locations
            },
        }
    }

    pub fn line_length(self, line_length: f64) -> Self {
        LocationsOfLinesBuilder {
            locations: LocationsOfLines {
                line_length,
                ..self.locations
            },
        }
    }

    pub fn line_gap(self, line_gap: f64) -> Self {
        LocationsOfLinesBuilder {
            locations: LocationsOfLines {
                line_gap,
                ..self.locations
            },
        }
    }

    pub fn row_spacing(self, row_spacing: f64) -> Self {
        LocationsOfLinesBuilder {
            locations: LocationsOfLines {
                row_spacing,
                ..self.locations
            },
        }
    }

    pub fn column_spacing(self, column_spacing: f64) -> Self {
        LocationsOfLinesBuilder {
            locations: LocationsOfLines {
                column_spacing,
                ..self.locations
            },
        }
    }

    pub fn seed(self, seed: u64) -> Self {
        LocationsOfLinesBuilder {
            locations: LocationsOfLines {
                seed: Some(seed),
                ..self.locations
            },
        }
    }

    pub fn build(self) -> LocationsOfLines {
        self.locations
    }
}
