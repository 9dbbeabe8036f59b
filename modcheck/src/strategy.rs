//! Strategy-based generation system for composable test data creation.

use std::fmt;

use rand::distributions::uniform::SampleUniform;

use crate::config::{ConfigError, GeneratorConfig};
use crate::error::GenerationError;

/// A strategy for generating values of a specific type
///
/// Strategies are composable and hold no state between calls, so the same
/// strategy can be sampled repeatedly or from several threads at once.
/// Generation is fallible only because filtered strategies have a bounded
/// attempt budget.
pub trait Strategy {
    /// The type of values this strategy generates
    type Value: 'static;

    /// Generate a value using this strategy
    fn generate<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError>;

    /// Map this strategy to produce values of a different type
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> U,
        U: 'static,
    {
        Map {
            strategy: self,
            mapper: f,
        }
    }

    /// Keep resampling until `predicate` holds
    ///
    /// Each call to `generate` draws at most
    /// [`GeneratorConfig::max_filter_attempts`] samples and then fails with
    /// [`GenerationError::Exhausted`].
    fn such_that<F>(self, predicate: F) -> SuchThat<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> bool,
    {
        SuchThat {
            strategy: self,
            predicate,
        }
    }

    /// Combine this strategy with another to produce tuples
    fn zip<S>(self, other: S) -> Zip<Self, S>
    where
        Self: Sized,
        S: Strategy,
    {
        Zip {
            left: self,
            right: other,
        }
    }

    /// Lazy, unbounded stream of independent samples
    fn samples<'a, R>(&'a self, rng: &'a mut R, config: &'a GeneratorConfig) -> Samples<'a, Self, R>
    where
        Self: Sized,
        R: rand::Rng + ?Sized,
    {
        Samples {
            strategy: self,
            rng,
            config,
        }
    }

    /// Draw `count` samples, stopping at the first generation failure
    fn sample<R>(
        &self,
        rng: &mut R,
        config: &GeneratorConfig,
        count: usize,
    ) -> Result<Vec<Self::Value>, GenerationError>
    where
        Self: Sized,
        R: rand::Rng + ?Sized,
    {
        self.samples(rng, config).take(count).collect()
    }

    /// Erase the concrete strategy type
    fn boxed(self) -> BoxedStrategy<Self::Value>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedStrategy::new(self)
    }
}

/// A strategy that maps values from one type to another
#[derive(Clone)]
pub struct Map<S, F> {
    strategy: S,
    mapper: F,
}

impl<S, F, U> Strategy for Map<S, F>
where
    S: Strategy,
    F: Fn(S::Value) -> U,
    U: 'static,
{
    type Value = U;

    fn generate<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError> {
        self.strategy.generate(rng, config).map(&self.mapper)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

/// A strategy that resamples until a predicate holds
#[derive(Clone)]
pub struct SuchThat<S, F> {
    strategy: S,
    predicate: F,
}

impl<S, F> Strategy for SuchThat<S, F>
where
    S: Strategy,
    F: Fn(&S::Value) -> bool,
{
    type Value = S::Value;

    fn generate<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError> {
        let attempts = config.max_filter_attempts;
        for attempt in 1..=attempts {
            let value = self.strategy.generate(rng, config)?;
            if (self.predicate)(&value) {
                return Ok(value);
            }
            log::trace!("such_that rejected sample {attempt}/{attempts}");
        }

        log::debug!(
            "such_that exhausted after {attempts} attempts for {}",
            std::any::type_name::<S::Value>()
        );
        Err(GenerationError::exhausted_with_context(
            attempts,
            format!(
                "no {} satisfied the predicate",
                std::any::type_name::<S::Value>()
            ),
        ))
    }
}

impl<S: fmt::Debug, F> fmt::Debug for SuchThat<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuchThat")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

/// A strategy that combines two strategies to produce tuples
#[derive(Debug, Clone)]
pub struct Zip<L, R> {
    left: L,
    right: R,
}

impl<L, R> Strategy for Zip<L, R>
where
    L: Strategy,
    R: Strategy,
{
    type Value = (L::Value, R::Value);

    fn generate<RNG: rand::Rng + ?Sized>(
        &self,
        rng: &mut RNG,
        config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError> {
        let left_value = self.left.generate(rng, config)?;
        let right_value = self.right.generate(rng, config)?;
        Ok((left_value, right_value))
    }
}

/// A strategy that always produces the same value
#[derive(Debug, Clone)]
pub struct Just<T> {
    value: T,
}

impl<T: Clone + 'static> Strategy for Just<T> {
    type Value = T;

    fn generate<R: rand::Rng + ?Sized>(
        &self,
        _rng: &mut R,
        _config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError> {
        Ok(self.value.clone())
    }
}

/// A strategy that chooses uniformly from a non-empty collection of values
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    values: Vec<T>,
}

impl<T: Clone + 'static> Strategy for OneOf<T> {
    type Value = T;

    fn generate<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        _config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError> {
        let index = rng.gen_range(0..self.values.len());
        Ok(self.values[index].clone())
    }
}

/// A strategy for generating values uniformly in an inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    start: T,
    end: T,
}

impl<T: Copy> Range<T> {
    /// Lower bound
    pub fn start(&self) -> T {
        self.start
    }

    /// Upper bound
    pub fn end(&self) -> T {
        self.end
    }
}

impl<T: RangeValue> Strategy for Range<T> {
    type Value = T;

    fn generate<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        _config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError> {
        Ok(T::sample_inclusive(rng, self.start, self.end))
    }
}

/// Numbers a [`Range`] can draw from
///
/// Implementations must make every pair returned by `sanitize`, once ordered,
/// safe to hand to `sample_inclusive`.
pub trait RangeValue: SampleUniform + PartialOrd + Copy + 'static {
    /// Replace bounds that cannot be sampled with the nearest ones that can
    fn sanitize(start: Self, end: Self) -> (Self, Self) {
        (start, end)
    }

    /// Uniform draw from `start..=end`, with `start <= end`
    fn sample_inclusive<R: rand::Rng + ?Sized>(rng: &mut R, start: Self, end: Self) -> Self {
        rng.gen_range(start..=end)
    }
}

macro_rules! impl_range_value_int {
    ($($t:ty),*) => {
        $(impl RangeValue for $t {})*
    };
}

impl_range_value_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_range_value_float {
    ($($t:ty),*) => {
        $(
            impl RangeValue for $t {
                // NaN leaves that side unbounded; infinities clamp to the finite extremes
                fn sanitize(start: Self, end: Self) -> (Self, Self) {
                    let start = if start.is_nan() { <$t>::MIN } else { start };
                    let end = if end.is_nan() { <$t>::MAX } else { end };
                    (
                        start.clamp(<$t>::MIN, <$t>::MAX),
                        end.clamp(<$t>::MIN, <$t>::MAX),
                    )
                }

                fn sample_inclusive<R: rand::Rng + ?Sized>(
                    rng: &mut R,
                    start: Self,
                    end: Self,
                ) -> Self {
                    // rand needs headroom above the span, so wide ranges are drawn at quarter scale
                    if ((end - start) * 2.0).is_finite() {
                        rng.gen_range(start..=end)
                    } else {
                        let quarter = rng.gen_range(start / 4.0..=end / 4.0);
                        (quarter * 4.0).clamp(start, end)
                    }
                }
            }
        )*
    };
}

impl_range_value_float!(f32, f64);

/// Type-erased strategy
pub struct BoxedStrategy<T> {
    strategy: Box<dyn DynStrategy<T> + Send + Sync>,
}

impl<T: 'static> BoxedStrategy<T> {
    /// Box any strategy producing `T`
    pub fn new<S>(strategy: S) -> Self
    where
        S: Strategy<Value = T> + Send + Sync + 'static,
    {
        Self {
            strategy: Box::new(strategy),
        }
    }
}

impl<T: 'static> Strategy for BoxedStrategy<T> {
    type Value = T;

    fn generate<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> Result<Self::Value, GenerationError> {
        // `&mut R` is itself a sized `RngCore`, which lets unsized rngs through
        let mut rng = rng;
        self.strategy.generate_dyn(&mut rng, config)
    }
}

impl<T> fmt::Debug for BoxedStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedStrategy").finish_non_exhaustive()
    }
}

/// Object-safe view of a strategy
trait DynStrategy<T> {
    fn generate_dyn(
        &self,
        rng: &mut dyn rand::RngCore,
        config: &GeneratorConfig,
    ) -> Result<T, GenerationError>;
}

impl<S: Strategy> DynStrategy<S::Value> for S {
    fn generate_dyn(
        &self,
        rng: &mut dyn rand::RngCore,
        config: &GeneratorConfig,
    ) -> Result<S::Value, GenerationError> {
        self.generate(rng, config)
    }
}

/// Lazy stream of samples produced by [`Strategy::samples`]
pub struct Samples<'a, S, R: ?Sized> {
    strategy: &'a S,
    rng: &'a mut R,
    config: &'a GeneratorConfig,
}

impl<S, R> Iterator for Samples<'_, S, R>
where
    S: Strategy,
    R: rand::Rng + ?Sized,
{
    type Item = Result<S::Value, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.strategy.generate(self.rng, self.config))
    }
}

/// Create a strategy that always produces the same value
pub fn just<T: Clone>(value: T) -> Just<T> {
    Just { value }
}

/// Create a strategy that chooses from a collection of values
pub fn one_of<T: Clone>(values: Vec<T>) -> Result<OneOf<T>, ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::EmptyChoices);
    }
    Ok(OneOf { values })
}

/// Create a strategy for generating values in an inclusive range
///
/// Bounds given in descending order are swapped. Float bounds are sanitized
/// first: a NaN bound leaves that side unbounded and infinite bounds are
/// clamped to the finite extremes, so sampling never panics.
pub fn range<T: RangeValue>(start: T, end: T) -> Range<T> {
    let (start, end) = T::sanitize(start, end);
    if end < start {
        Range {
            start: end,
            end: start,
        }
    } else {
        Range { start, end }
    }
}
