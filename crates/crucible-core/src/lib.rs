//! Deterministic random core for crucible.
//!
//! Two layers, dependency order leaves-first:
//!
//! - [`twister`]: the bit engine — a seeded, bit-exact 32-bit word
//!   generator with no knowledge of anything above raw words.
//! - [`number`] / [`choice`] / [`digits`]: the sampling layer — uniform
//!   integers and floats over inclusive ranges, equal and weighted
//!   discrete selection, and digit-string composition, all consuming
//!   the engine's word stream.
//!
//! Data flows one direction: a sampling call draws words from the
//! engine and transforms them; the engine never calls back up. The
//! crate performs no I/O and keeps no global state — callers own their
//! engine instances and thread them through explicitly, one instance
//! per logical stream.
//!
//! # Reproducibility
//!
//! For a fixed seed and a fixed, ordered sequence of calls, every
//! output is bit-identical across runs, platforms, and releases.
//!
//! ```
//! use crucible_core::{choice, number, MersenneTwister};
//!
//! let mut rng = MersenneTwister::new(42);
//! let roll = number::int_in_range(&mut rng, 1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! let color = choice::pick(&mut rng, &["red", "green", "blue"]).unwrap();
//! assert!(["red", "green", "blue"].contains(color));
//! ```

pub mod choice;
pub mod digits;
pub mod error;
pub mod number;
pub mod twister;

pub use error::SampleError;
pub use twister::{MersenneTwister, SnapshotError, TwisterSnapshot};
