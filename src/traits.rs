use std::ops;

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Angle values that can be converted between degrees and radians.
///
/// Every operation in this library that takes an angle takes it in radians;
/// this trait is the bridge for callers that think in degrees.
///
/// # Examples
///
/// ```
/// # use lineal::*;
/// use std::f32::consts::PI;
///
/// assert_approx_eq!(Angle::to_radians(180.0f32), PI);
/// assert_approx_eq!(Angle::to_degrees(PI), 180.0f32);
/// ```
pub trait Angle {
    /// Converts an angle in degrees to radians (`degrees * π / 180`).
    fn to_radians(self) -> Self;
    /// Converts an angle in radians to degrees.
    fn to_degrees(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and
/// [`f32::max`] functions ([`f64::min`] and [`f64::max`] respectively).
/// Built-in integer types implement it in terms of [`Ord::min`] and
/// [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    <$types>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$types>::max(self, other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    <$types>::sin(self)
                }

                fn cos(self) -> Self {
                    <$types>::cos(self)
                }

                fn tan(self) -> Self {
                    <$types>::tan(self)
                }

                fn asin(self) -> Self {
                    <$types>::asin(self)
                }

                fn acos(self) -> Self {
                    <$types>::acos(self)
                }

                fn atan(self) -> Self {
                    <$types>::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$types>::atan2(self, other)
                }
            }

            impl Angle for $types {
                fn to_radians(self) -> Self {
                    <$types>::to_radians(self)
                }

                fn to_degrees(self) -> Self {
                    <$types>::to_degrees(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn angle_conversion() {
        assert_approx_eq!(Angle::to_radians(180.0), PI);
        assert_approx_eq!(Angle::to_radians(90.0), FRAC_PI_2);
        assert_approx_eq!(Angle::to_radians(0.0), 0.0);
        assert_approx_eq!(Angle::to_degrees(PI), 180.0);
        assert_approx_eq!(Angle::to_radians(60.0f32), 1.047_197_5).tolerance(1e-6);
    }

    #[test]
    fn clamp() {
        assert_eq!(MinMax::clamp(5, 0, 3), 3);
        assert_eq!(MinMax::clamp(-1.0f32, 0.0, 3.0), 0.0);
        assert_eq!(MinMax::clamp(2.5f64, 0.0, 3.0), 2.5);
    }
}
