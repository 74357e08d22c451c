use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    DensityTooSmall { density: u32, minimum: u32 },
    InvalidMinExtent { min_extent: f64 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::DensityTooSmall { density, minimum } => {
                write!(f, "Density {} is below the minimum of {}", density, minimum)
            }
            Self::InvalidMinExtent { min_extent } => {
                write!(f, "Minimum viewport extent must be positive and finite: {}", min_extent)
            }
        }
    }
}

impl Error for MandelbrotError {}
