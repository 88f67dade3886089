#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// point color transformations module.
pub mod color;

/// split view composition of an original and a filtered image.
pub mod compare;

/// edge detection module.
pub mod edges;

/// filter engine applying a named filter to a whole buffer.
pub mod engine;

/// Error types for the imgproc module.
pub mod error;

/// image mirroring module.
pub mod flip;

/// module containing parallelization utilities.
pub mod parallel;

/// block resampling module.
pub mod pixelate;

/// the fixed set of named filters.
pub mod registry;

pub use crate::engine::FilterEngine;
pub use crate::error::FilterError;
pub use crate::registry::{FilterFn, FilterKind, FilterRegistry, FilterSpec};
