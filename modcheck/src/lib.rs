//! # Modcheck - Constrained Arbitrary Values
//!
//! Modcheck provides the core contract of a property-based testing library
//! (types that can be randomly generated and shrunk) together with a family
//! of modifier wrappers that refine an existing type's generation and
//! shrinking without writing a new generator.
//!
//! ## Quick Start
//!
//! ```rust
//! use modcheck::{Arbitrary, GeneratorConfig, NonZero, Positive, Strategy, create_seeded_rng};
//!
//! let mut rng = create_seeded_rng(42);
//! let config = GeneratorConfig::default();
//!
//! let divisor = NonZero::<i32>::arbitrary_with((-100, 100))
//!     .generate(&mut rng, &config)
//!     .unwrap();
//! assert_ne!(*divisor.get(), 0);
//!
//! // Shrinking stays inside the constraint
//! let shrinks: Vec<i32> = Positive::new(57i32).shrink().map(|p| p.into_inner()).collect();
//! assert_eq!(shrinks, vec![29, 43, 50, 54, 56]);
//! ```

// Public modules
pub mod arbitrary;
pub mod config;
pub mod error;
pub mod modifier;
pub mod numeric;
pub mod parallel;
pub mod primitives;
pub mod rng;
pub mod shrink;
pub mod strategy;

// Re-export the main public API
pub use arbitrary::{Arbitrary, Shrinks};
pub use config::{
    ConfigError, DEFAULT_MAX_FILTER_ATTEMPTS, GeneratorConfig, ParallelConfig, ShrinkConfig,
};
pub use error::{GenerationError, PropertyError};
pub use modifier::{
    BLIND_MARKER, Blind, Constraint, IsNonNegative, IsNonZero, IsPositive, Modifier,
    ModifierStrategy, NonNegative, NonZero, Opaque, Positive, ShrinkPolicy, Static, Unshrinkable,
};
pub use numeric::SignedNumber;
pub use parallel::{sample_parallel, sample_parallel_with};
pub use primitives::{BoolStrategy, IntegralShrinker};
pub use rng::{DefaultRngProvider, RngProvider, create_rng, create_seeded_rng};
pub use shrink::{ShrinkEngine, ShrinkResult};
pub use strategy::{BoxedStrategy, RangeValue, Strategy};

// Re-export strategy builders for convenience
pub use strategy::{just, one_of, range};
