//! # Generator Error Types
//!
//! All errors that can occur while configuring or querying a generator.

use thiserror::Error;

/// Errors that can occur in the generator core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A hash or gradient was requested for a coordinate tuple whose arity is
    /// not 1, 2 or 3.
    #[error("invalid dimension: expected 1, 2 or 3 coordinates, got {0}")]
    InvalidDimension(usize),

    /// Fractal noise needs at least one octave.
    #[error("invalid octave count: at least one octave is required")]
    InvalidOctaves,

    /// Base frequency must be finite and strictly positive.
    #[error("invalid frequency {0}: must be finite and greater than zero")]
    InvalidFrequency(f64),

    /// Lacunarity must be finite and strictly positive.
    #[error("invalid lacunarity {0}: must be finite and greater than zero")]
    InvalidLacunarity(f64),

    /// Gain must be finite and non-negative.
    #[error("invalid gain {0}: must be finite and not negative")]
    InvalidGain(f64),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for generator operations.
pub type CoreResult<T> = Result<T, CoreError>;
