use super::ApproxEq;

impl ApproxEq for f32 {
    type Tolerance = Self;

    fn approx_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() < tolerance
    }
}

impl ApproxEq for f64 {
    type Tolerance = Self;

    fn approx_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() < tolerance
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn approx_eq(&self, other: &U, tolerance: Self::Tolerance) -> bool {
        T::approx_eq(self, other, tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn approx_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .zip(other)
            .all(|(a, b)| T::approx_eq(a, b, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn approx_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}
