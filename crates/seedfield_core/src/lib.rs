//! # SEEDFIELD Core
//!
//! Deterministic pseudo-random sequences and coherent noise from a single
//! integer seed.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed, same values, on every platform
//! 2. **Explicit state**: no global RNG; every [`Generator`] is a value
//! 3. **Pure sampling**: Perlin and fBm depend only on (seed, coords, options)
//! 4. **Provenance**: every scalar is a [`RandomValue`] carrying a snapshot
//!
//! ## Core Components
//!
//! - [`Generator`]: LCG sequence with a fixed seed and a rolling state
//! - [`hash`]: Murmur-style lattice hash to an 8-bit index
//! - [`gradient`]: index to gradient direction, dotted with the offset
//! - [`perlin`]: quintic-faded Perlin kernel, 1D/2D/3D
//! - [`fbm`]: fractal Brownian motion over the Perlin kernel
//! - [`NoiseField`]: the seam other noise algorithms plug into
//!
//! ## Example
//!
//! ```rust
//! use seedfield_core::{FbmOptions, Generator};
//!
//! let generator = Generator::new(42);
//!
//! // Stateful white noise
//! let roll = generator.next_value();
//! assert!((0.0..1.0).contains(&roll.get()));
//!
//! // Pure coherent noise
//! let height = generator.fbm_2d(10.0, 10.0, &FbmOptions::default());
//! assert!((0.0..=1.0).contains(&height.get()));
//! assert_eq!(height.snapshot(), generator.capture());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod fbm;
pub mod field;
pub mod generator;
pub mod gradient;
pub mod hash;
pub mod perlin;
pub mod value;

pub use config::NoiseConfig;
pub use error::{CoreError, CoreResult};
pub use fbm::{Fbm, FbmOptions};
pub use field::NoiseField;
pub use generator::{Generator, GeneratorSnapshot};
pub use perlin::Perlin;
pub use value::RandomValue;
