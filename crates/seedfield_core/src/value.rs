//! # Result Wrapper
//!
//! Every scalar the generator hands out is paired with where it came from.

use crate::generator::{Generator, GeneratorSnapshot};

/// A generated scalar with provenance.
///
/// Holds the value, a shared read-only reference to the producing
/// [`Generator`], and a [`GeneratorSnapshot`] taken when the value was
/// constructed. It never owns the generator.
#[derive(Clone, Copy, Debug)]
pub struct RandomValue<'g> {
    value: f64,
    generator: &'g Generator,
    snapshot: GeneratorSnapshot,
}

impl<'g> RandomValue<'g> {
    /// Wraps `value`, capturing `generator`'s current state.
    #[inline]
    #[must_use]
    pub fn new(generator: &'g Generator, value: f64) -> Self {
        Self {
            value,
            generator,
            snapshot: generator.capture(),
        }
    }

    /// Returns the scalar.
    #[inline]
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Returns the generator that produced this value.
    #[inline]
    #[must_use]
    pub fn generator(&self) -> &'g Generator {
        self.generator
    }

    /// Returns the generator state captured at construction.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> GeneratorSnapshot {
        self.snapshot
    }
}

impl From<RandomValue<'_>> for f64 {
    #[inline]
    fn from(value: RandomValue<'_>) -> Self {
        value.value
    }
}
