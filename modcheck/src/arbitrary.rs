//! Arbitrary trait and related functionality for automatic test data generation.

use crate::strategy::Strategy;

/// Lazy sequence of shrink candidates, simplest first
pub type Shrinks<T> = Box<dyn Iterator<Item = T>>;

/// Trait for types that can generate arbitrary instances of themselves
///
/// This is the primary trait that types implement to participate in property-based testing.
/// It pairs a default strategy for generating random instances with a shrink function used
/// to minimize failing values.
pub trait Arbitrary: Sized + 'static {
    /// The strategy type used to generate values of this type
    type Strategy: Strategy<Value = Self>;

    /// Parameters that can be used to customize generation
    type Parameters: Default + Clone;

    /// Create a strategy for generating arbitrary values of this type
    fn arbitrary() -> Self::Strategy {
        Self::arbitrary_with(Self::Parameters::default())
    }

    /// Create a strategy with custom parameters
    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy;

    /// Candidates strictly simpler than `self`, simplest first
    ///
    /// The sequence must be finite, must not contain `self`, and repeated
    /// shrinking must terminate. Consumers may stop reading at any point.
    fn shrink(&self) -> Shrinks<Self> {
        Box::new(std::iter::empty())
    }
}
