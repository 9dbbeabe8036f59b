//! Arbitrary implementations for primitive types and pairs.

use num_traits::PrimInt;

use crate::arbitrary::{Arbitrary, Shrinks};
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::strategy::{Range, Strategy, Zip, range};

/// Strategy for boolean values
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolStrategy;

impl Strategy for BoolStrategy {
    type Value = bool;

    fn generate<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
        _config: &GeneratorConfig,
    ) -> Result<bool, GenerationError> {
        Ok(rng.r#gen())
    }
}

impl Arbitrary for bool {
    type Strategy = BoolStrategy;
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        BoolStrategy
    }

    fn shrink(&self) -> Shrinks<Self> {
        // For booleans, shrink true to false
        if *self {
            Box::new(std::iter::once(false))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Zero,
    Negation,
    Halving,
    Done,
}

/// Lazy shrinker for integers
///
/// Yields zero, then the negation of a negative value when representable,
/// then `value - value / 2`, `value - value / 4`, ... approaching `value`.
/// Every candidate is closer to zero than `value` or is its positive mirror,
/// so repeated shrinking terminates.
#[derive(Debug, Clone)]
pub struct IntegralShrinker<T> {
    value: T,
    delta: T,
    stage: Stage,
}

impl<T: PrimInt> IntegralShrinker<T> {
    /// Start shrinking `value`
    pub fn new(value: T) -> Self {
        Self {
            value,
            delta: value,
            stage: Stage::Zero,
        }
    }
}

impl<T: PrimInt> Iterator for IntegralShrinker<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            match self.stage {
                Stage::Zero => {
                    self.stage = Stage::Negation;
                    if !self.value.is_zero() {
                        return Some(T::zero());
                    }
                }
                Stage::Negation => {
                    self.stage = Stage::Halving;
                    if self.value < T::zero() {
                        if let Some(negated) = T::zero().checked_sub(&self.value) {
                            return Some(negated);
                        }
                    }
                }
                Stage::Halving => {
                    let two = T::one() + T::one();
                    self.delta = self.delta / two;
                    if self.delta.is_zero() {
                        self.stage = Stage::Done;
                        return None;
                    }
                    return Some(self.value - self.delta);
                }
                Stage::Done => return None,
            }
        }
    }
}

macro_rules! impl_arbitrary_int {
    ($($t:ty),*) => {
        $(
            impl Arbitrary for $t {
                type Strategy = Range<$t>;
                type Parameters = ($t, $t);

                fn arbitrary() -> Self::Strategy {
                    range(<$t>::MIN, <$t>::MAX)
                }

                fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
                    range(args.0, args.1)
                }

                fn shrink(&self) -> Shrinks<Self> {
                    Box::new(IntegralShrinker::new(*self))
                }
            }
        )*
    };
}

impl_arbitrary_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_arbitrary_float {
    ($($t:ty),*) => {
        $(
            impl Arbitrary for $t {
                type Strategy = Range<$t>;
                type Parameters = ($t, $t);

                fn arbitrary() -> Self::Strategy {
                    range(-1000.0, 1000.0)
                }

                fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
                    range(args.0, args.1)
                }

                fn shrink(&self) -> Shrinks<Self> {
                    let value = *self;

                    if value == 0.0 || value.is_nan() || value.is_infinite() {
                        return Box::new(std::iter::empty());
                    }

                    let mirrored = (value < 0.0).then(|| -value);
                    let truncated = Some(value.trunc()).filter(|t| *t != value && *t != 0.0);
                    let half = Some(value / 2.0).filter(|h| *h != value && *h != 0.0);

                    Box::new(
                        std::iter::once(0.0)
                            .chain(mirrored)
                            .chain(truncated)
                            .chain(half),
                    )
                }
            }
        )*
    };
}

impl_arbitrary_float!(f32, f64);

impl<A, B> Arbitrary for (A, B)
where
    A: Arbitrary + Clone,
    B: Arbitrary + Clone,
{
    type Strategy = Zip<A::Strategy, B::Strategy>;
    type Parameters = (A::Parameters, B::Parameters);

    fn arbitrary() -> Self::Strategy {
        A::arbitrary().zip(B::arbitrary())
    }

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        A::arbitrary_with(args.0).zip(B::arbitrary_with(args.1))
    }

    fn shrink(&self) -> Shrinks<Self> {
        let (a, b) = self.clone();
        let (left_a, right_b) = (a.clone(), b.clone());

        let left = a.shrink().map(move |shrunk| (shrunk, right_b.clone()));
        let right = b.shrink().map(move |shrunk| (left_a.clone(), shrunk));
        Box::new(left.chain(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_seeded_rng;

    #[test]
    fn test_bool_shrinks_to_false() {
        assert_eq!(true.shrink().collect::<Vec<_>>(), vec![false]);
        assert!(false.shrink().next().is_none());
    }

    #[test]
    fn test_positive_integer_shrink_order() {
        let shrinks: Vec<i32> = 57i32.shrink().collect();
        assert_eq!(shrinks, vec![0, 29, 43, 50, 54, 56]);
    }

    #[test]
    fn test_negative_integer_shrink_order() {
        let shrinks: Vec<i32> = (-10i32).shrink().collect();
        assert_eq!(shrinks, vec![0, 10, -5, -8, -9]);
    }

    #[test]
    fn test_small_integer_shrinks() {
        assert!(0i32.shrink().next().is_none());
        assert_eq!(1i32.shrink().collect::<Vec<_>>(), vec![0]);
        assert_eq!((-1i32).shrink().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(2u8.shrink().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_min_value_shrinks_without_overflow() {
        let shrinks: Vec<i8> = i8::MIN.shrink().collect();
        assert_eq!(shrinks[0], 0);
        assert!(!shrinks.contains(&i8::MIN));
        assert!(shrinks.iter().skip(1).all(|&s| s < 0 && s > i8::MIN));
    }

    #[test]
    fn test_integer_shrinking_terminates() {
        // Always taking the first candidate walks straight to zero
        let mut current = i64::MAX;
        let mut steps = 0;
        while let Some(next) = current.shrink().next() {
            current = next;
            steps += 1;
        }
        assert_eq!(current, 0);
        assert_eq!(steps, 1);

        // Always taking the last candidate walks down one at a time
        let mut current = 20u32;
        let mut steps = 0;
        while let Some(next) = current.shrink().last() {
            assert!(next < current);
            current = next;
            steps += 1;
        }
        assert_eq!(current, 0);
        assert_eq!(steps, 20);
    }

    #[test]
    fn test_shrinks_never_contain_the_value() {
        for value in [-100i32, -3, -1, 1, 2, 3, 99, i32::MAX, i32::MIN] {
            assert!(value.shrink().all(|s| s != value), "value {}", value);
        }
    }

    #[test]
    fn test_float_shrinks() {
        let shrinks: Vec<f64> = 3.5f64.shrink().collect();
        assert_eq!(shrinks, vec![0.0, 3.0, 1.75]);

        let shrinks: Vec<f64> = (-0.5f64).shrink().collect();
        assert_eq!(shrinks, vec![0.0, 0.5, -0.25]);

        assert!(0.0f64.shrink().next().is_none());
        assert!(f64::NAN.shrink().next().is_none());
        assert!(f32::INFINITY.shrink().next().is_none());

        let shrinks: Vec<f32> = (-8.0f32).shrink().collect();
        assert_eq!(shrinks, vec![0.0, 8.0, -4.0]);
    }

    #[test]
    fn test_integer_parameters_bound_generation() {
        let strategy = i32::arbitrary_with((-100, 100));
        let mut rng = create_seeded_rng(3);
        let config = GeneratorConfig::default();

        for value in strategy.sample(&mut rng, &config, 500).unwrap() {
            assert!((-100..=100).contains(&value));
        }
    }

    #[test]
    fn test_float_default_range() {
        let strategy = f64::arbitrary();
        let mut rng = create_seeded_rng(4);
        let config = GeneratorConfig::default();

        for value in strategy.sample(&mut rng, &config, 200).unwrap() {
            assert!((-1000.0..=1000.0).contains(&value));
        }
    }

    #[test]
    fn test_pair_shrinks_left_then_right() {
        let shrinks: Vec<(u8, bool)> = (2u8, true).shrink().collect();
        assert_eq!(shrinks, vec![(0, true), (1, true), (2, false)]);
    }

    #[test]
    fn test_pair_generation() {
        let strategy = <(u8, bool)>::arbitrary_with(((10, 20), ()));
        let mut rng = create_seeded_rng(5);
        let config = GeneratorConfig::default();

        let (number, _flag) = strategy.generate(&mut rng, &config).unwrap();
        assert!((10..=20).contains(&number));
    }
}
