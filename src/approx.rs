//! Approximate equality.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of
/// their components are. Two components are equal iff their difference lies
/// strictly within `(-tolerance, +tolerance)`; a difference exactly equal to
/// the tolerance compares unequal.
///
/// For more information on the subtleties of approximate floating-point
/// number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the comparison tolerance.
    ///
    /// This is almost always either [`f32`] or [`f64`], depending on which one
    /// is the underlying primitive type being compared.
    type Tolerance: DefaultTolerance + Copy;

    /// Compares `self` and `other` for approximate equality.
    ///
    /// Returns `true` iff every corresponding component difference lies
    /// strictly within `(-tolerance, +tolerance)`. `NaN` is never considered
    /// equal to anything; infinities are only considered equal to themselves.
    fn approx_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;
}

/// Trait implemented for the `Tolerance` value of [`ApproxEq`] implementations.
///
/// This supplies the default tolerance used by
/// [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
pub trait DefaultTolerance {
    /// Default tolerance for comparisons via [`ApproxEq::approx_eq`].
    const DEFAULT_TOLERANCE: Self;
}

impl DefaultTolerance for f32 {
    const DEFAULT_TOLERANCE: Self = 1e-4;
}

impl DefaultTolerance for f64 {
    const DEFAULT_TOLERANCE: Self = 1e-9;
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type will check the assertion when dropped. Calling
/// [`Asserter::tolerance`] replaces the default tolerance
/// ([`DefaultTolerance::DEFAULT_TOLERANCE`]) with a caller-supplied one.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    tolerance: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            tolerance: None,
        }
    }

    /// Compares the values with the given tolerance instead of the default.
    ///
    /// Every corresponding component difference must lie strictly within
    /// `(-tolerance, +tolerance)` for the values to be considered equal.
    pub fn tolerance(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.tolerance = Some(tolerance);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // FIXME: the largest UX issue is that `#[track_caller]` does not work correctly on destructors
    // (the location of `ptr::drop_in_place` is blamed instead of the user code dropping the value)
    //#[track_caller]
    fn drop(&mut self) {
        let tolerance = self
            .tolerance
            .take()
            .unwrap_or(T::Tolerance::DEFAULT_TOLERANCE);

        let equal = self.left.approx_eq(self.right, tolerance);
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        // If the panic output takes you here, you've probably clicked on the wrong location.
        // `#[track_caller]` doesn't work correctly on `drop`, so we manually print the correct
        // location of the assertion.
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison, and returns an
/// [`Asserter`] that can be used to configure the tolerance to use.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// Default approximate comparison:
///
/// ```
/// # use lineal::*;
/// let one = (0..10).fold(0.0f32, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Comparison with a custom tolerance:
///
/// ```
/// # use lineal::*;
/// assert_approx_eq!(100.0f32, 99.5).tolerance(1.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison, and returns an
/// [`Asserter`] that can be used to configure the tolerance to use.
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use lineal::*;
/// assert_approx_ne!(100.0f32, 99.0).tolerance(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "my message");
    }

    #[test]
    fn default_tolerance() {
        assert_approx_eq!(1.0f32, 1.00005);
        assert_approx_ne!(1.0f32, 1.0002);
        assert_approx_eq!(1.0f64, 1.0);
        assert_approx_ne!(1.0f64, 1.00000001);
    }

    #[test]
    fn strict_window() {
        // A difference exactly equal to the tolerance is outside the window.
        assert_approx_ne!(1.0f32, 1.5).tolerance(0.5);
        assert_approx_eq!(1.0f32, 1.5).tolerance(0.5001);
        assert_approx_ne!(1.0f32, 1.0).tolerance(0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN);
        assert_approx_ne!(f32::NAN, f32::NAN).tolerance(1.0);
        assert_approx_ne!(f32::NAN, 0.0).tolerance(1.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).tolerance(1e-9);
        assert_approx_eq!(f32::NEG_INFINITY, f32::NEG_INFINITY).tolerance(1e-9);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).tolerance(1.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX).tolerance(10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY).tolerance(10000.0);
    }
}
