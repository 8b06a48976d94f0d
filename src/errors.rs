use std::{
    error::Error,
    fmt::{self, Display},
};

#[derive(Debug, PartialEq)]
pub enum FieldError {
    ZeroDimension,
    InvalidCellSize(f64),
    InvalidJitter(f64),
    InvalidSpacing(f64),
    InvalidExtent(f64),
    InvalidDashLength(f64),
    InvalidDashGap(f64),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::ZeroDimension => write!(f, "Grid rows and cols must both be nonzero."),
            FieldError::InvalidCellSize(v) => {
                write!(f, "Cell size must be positive and finite, got {}", v)
            }
            FieldError::InvalidJitter(v) => {
                write!(f, "Jitter must be non-negative and finite, got {}", v)
            }
            FieldError::InvalidSpacing(v) => {
                write!(f, "Row/column spacing must be positive and finite, got {}", v)
            }
            FieldError::InvalidExtent(v) => {
                write!(f, "Extent must be positive and finite, got {}", v)
            }
            FieldError::InvalidDashLength(v) => {
                write!(f, "Line length must be positive and finite, got {}", v)
            }
            FieldError::InvalidDashGap(v) => {
                write!(f, "Line gap must be non-negative and finite, got {}", v)
            }
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
