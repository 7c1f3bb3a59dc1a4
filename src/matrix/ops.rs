use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

impl<T, const N: usize> ApproxEq for Matrix<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn approx_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

/// Matrix * Column Vector.
///
/// Component *i* of the result is the dot product of row *i* with the vector.
impl<T, const N: usize> Mul<Vector<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

/// Matrix * Matrix.
impl<T, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// 3x3 Matrix * 4x4 Matrix.
///
/// The left operand is embedded via [`to_homogeneous`][Matrix::to_homogeneous]
/// before an ordinary 4x4 multiplication, so its identity border leaves the
/// fourth row of the right operand untouched.
impl<T: Number> Mul<Matrix<T, 4>> for Matrix<T, 3> {
    type Output = Matrix<T, 4>;

    fn mul(self, rhs: Matrix<T, 4>) -> Self::Output {
        self.to_homogeneous() * rhs
    }
}

/// 4x4 Matrix * 3x3 Matrix.
///
/// The right operand is embedded via [`to_homogeneous`][Matrix::to_homogeneous]
/// before an ordinary 4x4 multiplication, so its identity border leaves the
/// fourth column of the left operand untouched.
impl<T: Number> Mul<Matrix<T, 3>> for Matrix<T, 4> {
    type Output = Matrix<T, 4>;

    fn mul(self, rhs: Matrix<T, 3>) -> Self::Output {
        self * rhs.to_homogeneous()
    }
}
