//! Element types the matrix library is generic over.

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::{Num, NumCast};

/// Absolute tolerance under which two floating values compare equal.
pub const EPSILON: f64 = 1e-6;

/// The numerical trait.
///
/// Integer types compare exactly; floating types compare within [`EPSILON`]
/// so that elimination treats near-zero pivots as zero instead of picking
/// them up from rounding noise.
pub trait Scalar:
    Num + NumCast + Neg<Output = Self> + PartialOrd + Copy + Debug + Display + Send + Sync + 'static
{
    /// Equality used by every pivot test.
    fn approx_eq(self, other: Self) -> bool;

    /// `self / rhs`, or `None` when the type cannot represent the quotient.
    ///
    /// Integer types only divide exactly; floating types always divide.
    fn exact_div(self, rhs: Self) -> Option<Self>;

    fn is_approx_zero(self) -> bool {
        self.approx_eq(Self::zero())
    }
}

macro_rules! exact_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn exact_div(self, rhs: Self) -> Option<Self> {
                    match self.checked_rem(rhs) {
                        Some(0) => self.checked_div(rhs),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    (self - other).abs() < EPSILON as $t
                }

                #[inline]
                fn exact_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }
        )*
    };
}

exact_scalar!(i32, i64);
float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_equality_is_exact() {
        assert!(3i32.approx_eq(3));
        assert!(!3i64.approx_eq(4));
        assert!(0i32.is_approx_zero());
    }

    #[test]
    fn test_integer_division_must_be_exact() {
        assert_eq!(6i32.exact_div(-3), Some(-2));
        assert_eq!(7i32.exact_div(2), None);
        assert_eq!(1i64.exact_div(0), None);
        assert_eq!(i32::MIN.exact_div(-1), None);
        assert_eq!(1.0f64.exact_div(4.0), Some(0.25));
    }

    #[test]
    fn test_float_equality_uses_tolerance() {
        assert!(1.0f64.approx_eq(1.0 + 1e-9));
        assert!(!1.0f64.approx_eq(1.0 + 1e-3));
        assert!((1e-7f32).is_approx_zero());
        assert!(!(1e-3f32).is_approx_zero());
    }
}
