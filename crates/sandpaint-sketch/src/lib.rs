//! Sketch logic for **sandpaint**: recursive triangle subdivision painted as
//! sand-like stippled strokes.
//!
//! The crate is free of GPU and windowing code. Randomness (`rand::Rng`) and
//! coherent noise ([`NoiseField`]) are injected, so every step is reproducible
//! from a seed.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`geometry`] | `Point`, `Triangle`, `Edge` |
//! | [`subdivide`] | longest-edge split of one triangle or a whole set |
//! | [`offset`] | centroid-relative inset/outset |
//! | [`stipple`] | `Stippler`, the noise-driven line painter |
//! | [`field`] | `NoiseField`, `PerlinField` |
//! | [`color`] | `Hsba`, stroke palette |
//! | [`config`] | `SketchConfig` presets for both variants |
//! | [`sketch`] | `Sketch` state, `Command`, `Held`, `SketchFrame` |
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use sandpaint_sketch::{Command, PerlinField, Sketch, SketchConfig};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let noise = PerlinField::new(1);
//!
//! let mut sketch = Sketch::new(SketchConfig::sand());
//! sketch.apply(Command::Subdivide, &mut rng);
//! assert_eq!(sketch.triangles().len(), 2);
//!
//! let frame = sketch.render(0, &mut rng, &noise);
//! assert!(!frame.grains.is_empty());
//! ```

pub mod color;
pub mod config;
pub mod field;
pub mod geometry;
pub mod offset;
pub mod sketch;
pub mod stipple;
pub mod subdivide;

pub use color::Hsba;
pub use config::{Background, SketchConfig, Variant};
pub use field::{NoiseField, PerlinField};
pub use geometry::{Edge, Point, Triangle};
pub use sketch::{Command, Held, Sketch, SketchFrame};
pub use stipple::Stippler;
