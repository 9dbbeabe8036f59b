//! Constrained wrappers around arbitrary values.
//!
//! A [`Modifier`] owns one inner value and refines part of the inner type's
//! [`Arbitrary`] behavior according to a [`Constraint`] descriptor. The
//! descriptor decides which raw samples are admitted, how an admitted sample
//! is normalized, which shrink candidates are kept, and how the value is
//! described. Generation is always `inner.such_that(admit).map(normalize)`,
//! so every modifier reuses the inner strategy unchanged.
//!
//! ```rust
//! use modcheck::{Arbitrary, GeneratorConfig, Positive, Strategy, create_seeded_rng};
//!
//! let strategy = Positive::<i32>::arbitrary_with((-100, 100));
//! let mut rng = create_seeded_rng(7);
//! let value = strategy.generate(&mut rng, &GeneratorConfig::default()).unwrap();
//! assert!(*value.get() > 0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use num_traits::PrimInt;

use crate::arbitrary::{Arbitrary, Shrinks};
use crate::numeric::SignedNumber;
use crate::strategy::{Map, Strategy, SuchThat};

/// What a modifier does with the inner type's shrink candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShrinkPolicy {
    /// Keep the inner candidates that satisfy [`Constraint::keep`]
    Delegate,
    /// Never shrink
    Suppress,
}

/// Descriptor configuring a [`Modifier`] over inner type `T`
///
/// The bounds an implementation places on `T` are the capabilities the
/// modifier needs; using a modifier over a type without them is a compile
/// error.
pub trait Constraint<T>: 'static {
    /// How shrink candidates are derived
    const SHRINK: ShrinkPolicy = ShrinkPolicy::Delegate;

    /// Whether a shrink candidate, or a directly constructed value, is valid
    fn keep(_value: &T) -> bool {
        true
    }

    /// Filter applied to raw samples before normalizing
    ///
    /// Must only admit values whose normalized form satisfies `keep`.
    fn admit(value: &T) -> bool {
        Self::keep(value)
    }

    /// Transform applied to an admitted sample
    fn normalize(value: T) -> T {
        value
    }

    /// Textual description used by both `Display` and `Debug`
    fn describe(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A value of `T` refined by constraint `C`
///
/// Equality, ordering and hashing delegate to the inner value and are only
/// available when `T` provides them.
pub struct Modifier<T, C> {
    value: T,
    constraint: PhantomData<fn() -> C>,
}

impl<T, C> Modifier<T, C> {
    /// Wrap a known value without checking the constraint
    pub const fn new(value: T) -> Self {
        Self {
            value,
            constraint: PhantomData,
        }
    }

    /// Wrap a value only if it satisfies the constraint
    pub fn checked(value: T) -> Option<Self>
    where
        C: Constraint<T>,
    {
        C::keep(&value).then(|| Self::new(value))
    }

    /// Borrow the inner value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap the inner value
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Apply `f` to the inner value and rewrap the result under the same constraint
    ///
    /// The result is not re-checked; use [`Modifier::checked`] on the mapped
    /// value when `f` may break the constraint.
    pub fn map<U, F>(self, f: F) -> Modifier<U, C>
    where
        F: FnOnce(T) -> U,
    {
        Modifier::new(f(self.value))
    }

    fn construct(value: T) -> Self
    where
        C: Constraint<T>,
    {
        Self::new(C::normalize(value))
    }
}

/// Strategy generating a [`Modifier`] from the inner type's strategy
pub type ModifierStrategy<T, C> =
    Map<SuchThat<<T as Arbitrary>::Strategy, fn(&T) -> bool>, fn(T) -> Modifier<T, C>>;

impl<T, C> Modifier<T, C>
where
    T: Arbitrary,
    C: Constraint<T>,
{
    /// Build the modifier strategy on top of any strategy for `T`
    pub fn strategy_from(inner: T::Strategy) -> ModifierStrategy<T, C> {
        inner
            .such_that(C::admit as fn(&T) -> bool)
            .map(Self::construct as fn(T) -> Self)
    }
}

impl<T, C> Arbitrary for Modifier<T, C>
where
    T: Arbitrary,
    C: Constraint<T>,
{
    type Strategy = ModifierStrategy<T, C>;
    type Parameters = T::Parameters;

    fn arbitrary() -> Self::Strategy {
        Self::strategy_from(T::arbitrary())
    }

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        Self::strategy_from(T::arbitrary_with(args))
    }

    fn shrink(&self) -> Shrinks<Self> {
        match C::SHRINK {
            ShrinkPolicy::Suppress => Box::new(std::iter::empty()),
            ShrinkPolicy::Delegate => Box::new(self.value.shrink().filter(C::keep).map(Self::new)),
        }
    }
}

impl<T: Clone, C> Clone for Modifier<T, C> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, C> Copy for Modifier<T, C> {}

impl<T: PartialEq, C> PartialEq for Modifier<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, C> Eq for Modifier<T, C> {}

impl<T: PartialOrd, C> PartialOrd for Modifier<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, C> Ord for Modifier<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, C> Hash for Modifier<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, C: Constraint<T>> fmt::Display for Modifier<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        C::describe(&self.value, f)
    }
}

// Debug goes through the descriptor too, otherwise Blind would leak via `{:?}`
impl<T, C: Constraint<T>> fmt::Debug for Modifier<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        C::describe(&self.value, f)
    }
}

/// Marker printed in place of a blinded value
pub const BLIND_MARKER: &str = "(*)";

/// Hides the value from reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opaque;

impl<T: 'static> Constraint<T> for Opaque {
    fn describe(_value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BLIND_MARKER)
    }
}

/// Disables shrinking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unshrinkable;

impl<T: fmt::Debug + 'static> Constraint<T> for Unshrinkable {
    const SHRINK: ShrinkPolicy = ShrinkPolicy::Suppress;

    fn describe(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Static({:?})", value)
    }
}

/// Strictly greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsPositive;

impl<T: SignedNumber + fmt::Debug + 'static> Constraint<T> for IsPositive {
    fn keep(value: &T) -> bool {
        *value > T::zero()
    }

    // Nonzero with a representable magnitude, which rules out `MIN` and NaN
    fn admit(value: &T) -> bool {
        value.magnitude().is_some_and(|magnitude| magnitude > T::zero())
    }

    fn normalize(value: T) -> T {
        value.magnitude().unwrap_or(value)
    }

    fn describe(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Positive({:?})", value)
    }
}

/// Anything but zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsNonZero;

impl<T: PrimInt + fmt::Debug + 'static> Constraint<T> for IsNonZero {
    fn keep(value: &T) -> bool {
        !value.is_zero()
    }

    fn describe(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonZero({:?})", value)
    }
}

/// Zero or above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsNonNegative;

impl<T: PrimInt + fmt::Debug + 'static> Constraint<T> for IsNonNegative {
    fn keep(value: &T) -> bool {
        *value >= T::zero()
    }

    fn describe(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonNegative({:?})", value)
    }
}

/// Shrinks like `T` but always prints as [`BLIND_MARKER`]
pub type Blind<T> = Modifier<T, Opaque>;

/// Generates like `T` but never shrinks
pub type Static<T> = Modifier<T, Unshrinkable>;

/// Always greater than zero
pub type Positive<T> = Modifier<T, IsPositive>;

/// Never zero
pub type NonZero<T> = Modifier<T, IsNonZero>;

/// Never below zero
pub type NonNegative<T> = Modifier<T, IsNonNegative>;
