//! Cyclic rhythm patterns and the algorithms that relate them
//!
//! This crate represents rhythmic patterns as finite, logically cyclic
//! sequences of beats and rests, and provides parsing, in-place
//! transformation, necklace equivalence, and canonical-form reduction.
//!
//! # Examples
//!
//! ```
//! use rhythmic_core::Pattern;
//!
//! // Parse the tresillo from its duration string
//! let mut tresillo = Pattern::from_duration_str("3+3+2").unwrap();
//! assert_eq!(tresillo.to_string(), "x--x--x-");
//! assert_eq!(tresillo.durations(), vec![3, 3, 2]);
//!
//! // The same necklace, rotated
//! tresillo.rotate(1);
//! assert_eq!(tresillo.to_string(), "-x--x--x");
//! assert!(tresillo.equivalent(&Pattern::euclidean(3, 8)));
//! ```
//!
//! # Main components
//!
//! - **[`Pattern`]**: the owned sequence type; construction, mutation, and
//!   derived queries
//! - **[`Pulse`]** and **[`AsPulse`]**: beat/rest classification of input
//!   symbols
//! - **Canonicalization**: [`Pattern::divisor`], [`Pattern::deflate`],
//!   [`Pattern::repetitions`], [`Pattern::normalize`]
//! - **Generators**: [`Pattern::euclidean`], [`Pattern::from_durations`],
//!   [`Pattern::from_tracy`], [`Pattern::from_hex`]

pub mod canonical;
pub mod durations;
pub mod error;
pub mod euclid;
pub mod pattern;
pub mod pulse;
pub mod radix;


pub use error::{ParseError, Result};
pub use pattern::Pattern;
pub use pulse::{AsPulse, Pulse};
