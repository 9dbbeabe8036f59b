//! Numeric capabilities required by the sign-based modifiers.

use num_traits::Signed;

/// Ordered, signed numbers whose absolute value can be taken safely
///
/// `magnitude` returns `None` where the absolute value is not representable:
/// the minimum value of a two's complement integer, or a float NaN.
pub trait SignedNumber: Signed + PartialOrd + Copy {
    /// Absolute value, if representable
    fn magnitude(self) -> Option<Self>;
}

macro_rules! impl_signed_number_int {
    ($($t:ty),*) => {
        $(
            impl SignedNumber for $t {
                fn magnitude(self) -> Option<Self> {
                    self.checked_abs()
                }
            }
        )*
    };
}

macro_rules! impl_signed_number_float {
    ($($t:ty),*) => {
        $(
            impl SignedNumber for $t {
                fn magnitude(self) -> Option<Self> {
                    if self.is_nan() { None } else { Some(self.abs()) }
                }
            }
        )*
    };
}

impl_signed_number_int!(i8, i16, i32, i64, i128, isize);
impl_signed_number_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_magnitude() {
        assert_eq!((-5i32).magnitude(), Some(5));
        assert_eq!(7i64.magnitude(), Some(7));
        assert_eq!(0i8.magnitude(), Some(0));
        assert_eq!(i8::MIN.magnitude(), None);
        assert_eq!(i32::MIN.magnitude(), None);
        assert_eq!((i32::MIN + 1).magnitude(), Some(i32::MAX));
    }

    #[test]
    fn test_float_magnitude() {
        assert_eq!((-2.5f64).magnitude(), Some(2.5));
        assert_eq!(f32::NEG_INFINITY.magnitude(), Some(f32::INFINITY));
        assert_eq!(f64::NAN.magnitude(), None);
    }
}
