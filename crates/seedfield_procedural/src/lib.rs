//! # SEEDFIELD Procedural
//!
//! Dense noise maps and simplex sampling on top of `seedfield_core`.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed, same map, same fill order
//! 2. **Borrowing**: maps hold `RandomValue`s that borrow their generator
//! 3. **Bounds-checked**: every accessor returns `None` outside the map
//!
//! ## Core Components
//!
//! - [`StaticMap1D`] / [`StaticMap2D`] / [`StaticMap3D`]: one sequence draw per cell
//! - [`NoiseMap1D`] / [`NoiseMap2D`] / [`NoiseMap3D`]: any `NoiseField` sampled per cell
//! - [`Simplex2D`] / [`Simplex3D`]: permutation-table simplex noise
//! - [`grid`]: the flat row-major storage behind every map
//!
//! ## Example
//!
//! ```rust
//! use seedfield_core::{FbmOptions, Generator};
//! use seedfield_procedural::{NoiseMap2D, StaticMap2D};
//!
//! let generator = Generator::new(12345);
//!
//! let terrain = NoiseMap2D::perlin(&generator, 128, 128, &FbmOptions::default());
//! let scatter = StaticMap2D::new(&generator, 128, 128);
//!
//! let height = terrain.get(64, 64).map(|v| v.get());
//! assert!(height.is_some_and(|h| (0.0..=1.0).contains(&h)));
//! assert_eq!(scatter.row(0).map(<[_]>::len), Some(128));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod grid;
pub mod noise_map;
pub mod simplex;
pub mod static_map;

pub use grid::{Grid1D, Grid2D, Grid3D};
pub use noise_map::{NoiseMap1D, NoiseMap2D, NoiseMap3D};
pub use simplex::{Simplex2D, Simplex3D};
pub use static_map::{StaticMap1D, StaticMap2D, StaticMap3D};
