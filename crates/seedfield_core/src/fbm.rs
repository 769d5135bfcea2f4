//! # Fractal Brownian Motion
//!
//! Sums Perlin octaves at rising frequency and falling amplitude:
//!
//! ```text
//! total = Σ perlin(coords * freq_i) * amp_i      freq_0 = frequency, amp_0 = 1
//! value = total / Σ amp_i                        freq_i+1 = freq_i * lacunarity
//!                                                amp_i+1  = amp_i * gain
//! ```
//!
//! Each octave is already in `[0, 1]`, and the result is a convex
//! combination of them, so no extra remap is applied.
//!
//! ## Parameter Guard
//!
//! [`FbmOptions`] can only hold valid parameters (at least one octave,
//! positive finite frequency and lacunarity, non-negative finite gain). The
//! check runs once, on construction or deserialization, which keeps every
//! `fbm_*` call infallible and free of `NaN`/`inf` from a zero divisor.
//!
//! Valid options can still push later octaves out of `f64` range (a huge
//! gain, or enough octaves for the frequency to overflow). The series stops
//! at the first octave whose sample or running amplitude is not finite, so
//! the result stays in `[0, 1]`. If the first octave itself overflows, the
//! result is `0.5`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::field::NoiseField;
use crate::generator::Generator;
use crate::perlin::{sample_1d, sample_2d, sample_3d};
use crate::value::RandomValue;

/// Validated fBm parameters.
///
/// # Example
///
/// ```rust
/// use seedfield_core::{FbmOptions, Generator};
///
/// let options = FbmOptions::default().with_octaves(6)?.with_gain(0.45)?;
/// let generator = Generator::new(7);
/// let height = generator.fbm_2d(120.0, 64.0, &options);
/// assert!((0.0..=1.0).contains(&height.get()));
/// # Ok::<(), seedfield_core::CoreError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFbmOptions", into = "RawFbmOptions")]
pub struct FbmOptions {
    octaves: u32,
    frequency: f64,
    lacunarity: f64,
    gain: f64,
}

impl FbmOptions {
    /// Default number of octaves.
    pub const DEFAULT_OCTAVES: u32 = 4;
    /// Default base frequency.
    pub const DEFAULT_FREQUENCY: f64 = 0.01;
    /// Default per-octave frequency multiplier.
    pub const DEFAULT_LACUNARITY: f64 = 2.0;
    /// Default per-octave amplitude multiplier.
    pub const DEFAULT_GAIN: f64 = 0.5;

    /// Builds a validated option set.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidOctaves`] if `octaves` is zero.
    /// - [`CoreError::InvalidFrequency`] unless `frequency` is finite and `> 0`.
    /// - [`CoreError::InvalidLacunarity`] unless `lacunarity` is finite and `> 0`.
    /// - [`CoreError::InvalidGain`] unless `gain` is finite and `>= 0`.
    pub fn new(octaves: u32, frequency: f64, lacunarity: f64, gain: f64) -> CoreResult<Self> {
        if octaves == 0 {
            return Err(CoreError::InvalidOctaves);
        }
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(CoreError::InvalidFrequency(frequency));
        }
        if !(lacunarity.is_finite() && lacunarity > 0.0) {
            return Err(CoreError::InvalidLacunarity(lacunarity));
        }
        if !(gain.is_finite() && gain >= 0.0) {
            return Err(CoreError::InvalidGain(gain));
        }
        Ok(Self {
            octaves,
            frequency,
            lacunarity,
            gain,
        })
    }

    /// Replaces the octave count.
    ///
    /// # Errors
    ///
    /// See [`FbmOptions::new`].
    pub fn with_octaves(self, octaves: u32) -> CoreResult<Self> {
        Self::new(octaves, self.frequency, self.lacunarity, self.gain)
    }

    /// Replaces the base frequency.
    ///
    /// # Errors
    ///
    /// See [`FbmOptions::new`].
    pub fn with_frequency(self, frequency: f64) -> CoreResult<Self> {
        Self::new(self.octaves, frequency, self.lacunarity, self.gain)
    }

    /// Replaces the lacunarity.
    ///
    /// # Errors
    ///
    /// See [`FbmOptions::new`].
    pub fn with_lacunarity(self, lacunarity: f64) -> CoreResult<Self> {
        Self::new(self.octaves, self.frequency, lacunarity, self.gain)
    }

    /// Replaces the gain.
    ///
    /// # Errors
    ///
    /// See [`FbmOptions::new`].
    pub fn with_gain(self, gain: f64) -> CoreResult<Self> {
        Self::new(self.octaves, self.frequency, self.lacunarity, gain)
    }

    /// Number of octaves (at least one).
    #[inline]
    #[must_use]
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Frequency of the first octave.
    #[inline]
    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Per-octave frequency multiplier.
    #[inline]
    #[must_use]
    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// Per-octave amplitude multiplier.
    #[inline]
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Parses options from a TOML document. Missing keys take their defaults.
    ///
    /// ```toml
    /// octaves = 6
    /// frequency = 0.02
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if the document is malformed or
    /// holds out-of-range values.
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let options: Self =
            toml::from_str(source).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        tracing::debug!(
            "Loaded fBm options: octaves={} frequency={} lacunarity={} gain={}",
            options.octaves,
            options.frequency,
            options.lacunarity,
            options.gain
        );
        Ok(options)
    }

    /// Runs the octave loop; `octave(freq)` samples Perlin at `coords * freq`.
    #[inline]
    fn accumulate(&self, mut octave: impl FnMut(f64) -> f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut max_amplitude: f64 = 0.0;

        for _ in 0..self.octaves {
            let sample = octave(frequency);
            let next_max = max_amplitude + amplitude;
            // Octaves past the f64 range (scaled coordinates or summed
            // amplitude overflowed) end the series.
            if !(sample.is_finite() && next_max.is_finite()) {
                break;
            }
            total += sample * amplitude;
            max_amplitude = next_max;
            amplitude *= self.gain;
            frequency *= self.lacunarity;
        }

        if max_amplitude > 0.0 {
            total / max_amplitude
        } else {
            // Not even the first octave was representable
            0.5
        }
    }
}

impl Default for FbmOptions {
    fn default() -> Self {
        Self {
            octaves: Self::DEFAULT_OCTAVES,
            frequency: Self::DEFAULT_FREQUENCY,
            lacunarity: Self::DEFAULT_LACUNARITY,
            gain: Self::DEFAULT_GAIN,
        }
    }
}

/// Unchecked wire form of [`FbmOptions`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawFbmOptions {
    octaves: u32,
    frequency: f64,
    lacunarity: f64,
    gain: f64,
}

impl Default for RawFbmOptions {
    fn default() -> Self {
        FbmOptions::default().into()
    }
}

impl TryFrom<RawFbmOptions> for FbmOptions {
    type Error = CoreError;

    fn try_from(raw: RawFbmOptions) -> CoreResult<Self> {
        Self::new(raw.octaves, raw.frequency, raw.lacunarity, raw.gain)
    }
}

impl From<FbmOptions> for RawFbmOptions {
    fn from(options: FbmOptions) -> Self {
        Self {
            octaves: options.octaves,
            frequency: options.frequency,
            lacunarity: options.lacunarity,
            gain: options.gain,
        }
    }
}

/// 1D fBm in `[0, 1]`.
#[must_use]
pub fn sample_fbm_1d(seed: u32, x: f64, options: &FbmOptions) -> f64 {
    options.accumulate(|freq| sample_1d(seed, x * freq))
}

/// 2D fBm in `[0, 1]`.
#[must_use]
pub fn sample_fbm_2d(seed: u32, x: f64, y: f64, options: &FbmOptions) -> f64 {
    options.accumulate(|freq| sample_2d(seed, x * freq, y * freq))
}

/// 3D fBm in `[0, 1]`.
#[must_use]
pub fn sample_fbm_3d(seed: u32, x: f64, y: f64, z: f64, options: &FbmOptions) -> f64 {
    options.accumulate(|freq| sample_3d(seed, x * freq, y * freq, z * freq))
}

impl Generator {
    /// 1D fractal noise in `[0, 1]`. Does not advance the sequence.
    pub fn fbm_1d(&self, x: f64, options: &FbmOptions) -> RandomValue<'_> {
        RandomValue::new(self, sample_fbm_1d(self.seed(), x, options))
    }

    /// 2D fractal noise in `[0, 1]`. Does not advance the sequence.
    pub fn fbm_2d(&self, x: f64, y: f64, options: &FbmOptions) -> RandomValue<'_> {
        RandomValue::new(self, sample_fbm_2d(self.seed(), x, y, options))
    }

    /// 3D fractal noise in `[0, 1]`. Does not advance the sequence.
    pub fn fbm_3d(&self, x: f64, y: f64, z: f64, options: &FbmOptions) -> RandomValue<'_> {
        RandomValue::new(self, sample_fbm_3d(self.seed(), x, y, z, options))
    }

    /// Binds `options` to this generator as a [`NoiseField`].
    #[inline]
    #[must_use]
    pub fn fbm(&self, options: FbmOptions) -> Fbm<'_> {
        Fbm {
            generator: self,
            options,
        }
    }
}

/// Fractal Perlin noise with fixed options, as a [`NoiseField`].
#[derive(Clone, Copy, Debug)]
pub struct Fbm<'g> {
    generator: &'g Generator,
    options: FbmOptions,
}

impl Fbm<'_> {
    /// The options every sample uses.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &FbmOptions {
        &self.options
    }
}

impl<'g> NoiseField<'g, 1> for Fbm<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x]: [f64; 1]) -> RandomValue<'g> {
        self.generator.fbm_1d(x, &self.options)
    }
}

impl<'g> NoiseField<'g, 2> for Fbm<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x, y]: [f64; 2]) -> RandomValue<'g> {
        self.generator.fbm_2d(x, y, &self.options)
    }
}

impl<'g> NoiseField<'g, 3> for Fbm<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x, y, z]: [f64; 3]) -> RandomValue<'g> {
        self.generator.fbm_3d(x, y, z, &self.options)
    }
}
