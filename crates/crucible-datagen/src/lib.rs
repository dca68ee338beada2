//! Deterministic data generation over the crucible engine.
//!
//! This crate is the consumer side of `crucible-core`: composable
//! generators that turn the engine's word stream into realistic rows —
//! products, prices, identifiers, dates — plus parallel NDJSON
//! emission and a CLI. Generators hold configuration only; callers
//! own the engine and thread it through every call, which is what
//! keeps output reproducible and lets parallel workers run one engine
//! per chunk.
//!
//! # Quick start
//!
//! ```
//! use crucible_core::MersenneTwister;
//! use crucible_datagen::generators::uniform_int;
//! use crucible_datagen::Generator;
//!
//! let mut rng = MersenneTwister::new(42);
//! let die = uniform_int(1, 6).unwrap();
//! let roll = die.generate(&mut rng);
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! # Domain rows
//!
//! ```
//! use chrono::NaiveDate;
//! use crucible_core::MersenneTwister;
//! use crucible_datagen::commerce::{PriceOptions, ProductGenerator};
//! use crucible_datagen::Generator;
//!
//! let generator = ProductGenerator::new(
//!     PriceOptions::default(),
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! )
//! .unwrap();
//!
//! let mut rng = MersenneTwister::new(42);
//! let product = generator.generate(&mut rng);
//! assert!(!product.sku.is_empty());
//! ```

pub mod commerce;
pub mod emit;
pub mod gen;
pub mod generators;

pub use gen::{BoxedGenerator, Constant, Generator, GeneratorExt};
