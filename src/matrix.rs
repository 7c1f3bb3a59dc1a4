use std::{array, fmt};

use crate::{Number, One, Sqrt, Trig, Vector, Zero};

mod ops;
mod view;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A square `N`x`N` matrix with element type `T`, stored as `N` rows.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] fills a matrix from an array of row vectors (or of
///   plain arrays, listed row-major).
/// - [`Matrix::from_fn`] will create each element by invoking a closure with
///   its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and
///   zero outside of its diagonal; [`Matrix::from_scale`] is the special case
///   of a single scalar repeated along the diagonal (*not* a uniform fill;
///   `Matrix::from_scale(1.0)` is the identity).
/// - [`Mat2::rotation_clockwise`], [`Mat2::rotation_counterclockwise`],
///   [`Mat3::rotation`] and the [`Mat4`] transform constructors build the
///   matrices used for camera and model transforms.
///
/// Additionally, some associated constants for commonly used matrices are
/// defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its diagonal and 0 everywhere
///   else.
///
/// # Element Access
///
/// A matrix is an ordered sequence of rows. Rows are reachable as fields
/// `row0` through `row3` (where the dimension provides them) as well as
/// through [`Matrix::row`]; columns through [`Matrix::col`]. [`Matrix`] also
/// implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row* (Y
/// coordinate), the second is the *column* (X coordinate), matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use lineal::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat.row1, vec2(2, 3));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for
/// slices. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead
/// and can be used for checked indexing.
///
/// # Multiplication Convention
///
/// Multiplying a [`Matrix`] by a [`Vector`] interprets the vector as a column
/// and produces the vector whose component *i* is the dot product of row *i*
/// with it. Code transforming a point applies the matrix on the left:
/// `m * v`.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.row0, vec2(0, 1));
    /// assert_eq!(mat.row1, vec2(2, 3));
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [4, 6],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Returns row `index` of this matrix as a [`Vector`].
    ///
    /// Rows of 2-, 3- and 4-dimensional matrices can also be accessed as the
    /// fields `row0` through `row3`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.row(1), vec2(2, 3));
    /// assert_eq!(mat.row(1), mat.row1);
    /// ```
    #[inline]
    pub fn row(&self, index: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// Returns column `index` of this matrix as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.col(1), vec2(1, 3));
    /// ```
    #[inline]
    pub fn col(&self, index: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out
    /// of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&2));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`]
    /// if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1],
    ///     [999, 3],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }
}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };
}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// Creates a matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Creates the matrix with `scale` on every diagonal position and zero
    /// elsewhere.
    ///
    /// This is *not* a uniform fill: only the diagonal receives the value
    /// (compare [`Vector::splat`], which broadcasts to every element).
    /// `Matrix::from_scale(1.0)` is the identity, and multiplying any matrix
    /// `m` with `Matrix::from_scale(s)` on either side equals `m * s`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let scale = Mat2::from_scale(4.0);
    /// let m = Matrix::from_rows([
    ///     [0.0, 0.25],
    ///     [0.5, 1.0],
    /// ]);
    /// assert_eq!(scale * m, m * scale);
    /// assert_eq!(scale * m, m * 4.0);
    /// ```
    pub fn from_scale(scale: T) -> Self {
        Self::from_diagonal(Vector::splat(scale))
    }
}

impl<T, const N: usize> Matrix<T, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self.0[i][i]).into()
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the
    /// diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

// Determinant limited to 3x3 for now; rotation validation doesn't need more.
impl<T: Number> Matrix<T, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY
    /// plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// use std::f32::consts::TAU;
    ///
    /// let quarter = Mat2f::rotation_counterclockwise(TAU / 4.0);
    /// assert_approx_eq!(quarter * Vec2f::X, Vec2f::Y);
    /// ```
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        #[rustfmt::skip]
        let rotation = Self::from_rows([
            [radians.cos(), -radians.sin()],
            [radians.sin(),  radians.cos()],
        ]);
        rotation
    }
}

impl<T: Number> Matrix<T, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Creates the rotation matrix for a rotation of `radians` about `axis`.
    ///
    /// The rotation is right-handed: looking from the positive-axis direction
    /// toward the origin, positive angles rotate counterclockwise. `axis` does
    /// not need to be normalized; it is normalized internally.
    ///
    /// The construction follows Rodrigues' rotation formula, so the result is
    /// orthonormal (rows of unit length, mutually orthogonal, determinant 1)
    /// for every axis and angle.
    ///
    /// # Panics
    ///
    /// Panics if `axis` has zero length, since it then denotes no direction to
    /// rotate about.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let m = Mat3::rotation(FRAC_PI_2, Vec3f::Z);
    /// assert_approx_eq!(m * Vec3f::X, Vec3f::Y);
    /// ```
    pub fn rotation(radians: T, axis: Vector<T, 3>) -> Self
    where
        T: Trig + Sqrt,
    {
        let axis = axis.normalize();
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let c = radians.cos();
        let s = radians.sin();
        let t = T::ONE - c;

        #[rustfmt::skip]
        let rotation = Self::from_rows([
            [t * x * x + c,     t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c,     t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c    ],
        ]);
        rotation
    }
}

impl<T: Zero + One + Copy> Matrix<T, 3> {
    /// Embeds this matrix as the upper-left block of a [`Mat4`] whose fourth
    /// row and column are those of the identity.
    ///
    /// This is how a pure 3x3 rotation becomes composable with a 4x4 transform
    /// without touching the translation/homogeneous components; the `Mul`
    /// impls between [`Mat3`] and [`Mat4`] use it implicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(m.to_homogeneous(), Matrix::from_rows([
    ///     [1, 2, 3, 0],
    ///     [4, 5, 6, 0],
    ///     [7, 8, 9, 0],
    ///     [0, 0, 0, 1],
    /// ]));
    /// ```
    pub fn to_homogeneous(self) -> Mat4<T> {
        let mut out = Mat4::IDENTITY;
        for (r, row) in self.0.into_iter().enumerate() {
            for (c, elem) in row.into_iter().enumerate() {
                out[(r, c)] = elem;
            }
        }
        out
    }
}

impl<T: Copy> Matrix<T, 4> {
    /// Returns the upper-left 3x3 block of this matrix.
    ///
    /// This is the inverse of [`Mat3::to_homogeneous`]: it discards the
    /// translation/homogeneous components of a transform, leaving its
    /// rotation/scale part.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(m.to_homogeneous().truncate(), m);
    /// ```
    pub fn truncate(self) -> Mat3<T> {
        Matrix::from_fn(|row, col| self.0[row][col])
    }
}

impl<T: Zero + One + Copy> Matrix<T, 4> {
    /// Creates the transform that translates points by `offset`.
    ///
    /// The offset occupies the fourth column, so that multiplying a
    /// homogeneous point (a [`Vec3`] extended with `w = 1`) on the left
    /// yields the translated point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let m = Mat4::translation(vec3(10.0, 20.0, 30.0));
    /// assert_eq!(m * vec4(1.0, 2.0, 3.0, 1.0), vec4(11.0, 22.0, 33.0, 1.0));
    /// ```
    pub fn translation(offset: Vector<T, 3>) -> Self {
        let mut out = Self::IDENTITY;
        out[(0, 3)] = offset.x;
        out[(1, 3)] = offset.y;
        out[(2, 3)] = offset.z;
        out
    }
}

impl<T: Number> Matrix<T, 4> {
    /// Creates the homogeneous rotation matrix for a rotation of `radians`
    /// about `axis`.
    ///
    /// Equivalent to [`Mat3::rotation`] followed by
    /// [`to_homogeneous`][Mat3::to_homogeneous].
    ///
    /// # Panics
    ///
    /// Panics if `axis` has zero length.
    pub fn rotation(radians: T, axis: Vector<T, 3>) -> Self
    where
        T: Trig + Sqrt,
    {
        Mat3::rotation(radians, axis).to_homogeneous()
    }

    /// Creates a view matrix for a camera at `eye`, looking at `center`.
    ///
    /// The result maps `eye` to the origin and the view direction to the
    /// negative Z axis (a right-handed view space). `up` steers the camera
    /// roll and does not need to be normalized.
    ///
    /// # Panics
    ///
    /// Panics if `center` coincides with `eye`, or if `up` is parallel to the
    /// view direction (or zero); no orientation can be derived then.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lineal::*;
    /// let view = Mat4::look_at(vec3(0.0f32, 0.0, 5.0), Vec3f::ZERO, Vec3f::Y);
    /// assert_approx_eq!(view * vec4(0.0, 0.0, 5.0, 1.0), Vec4f::W);
    /// ```
    pub fn look_at(eye: Vector<T, 3>, center: Vector<T, 3>, up: Vector<T, 3>) -> Self
    where
        T: Sqrt,
    {
        let forward = (center - eye).normalize();
        let side = forward.cross(up).normalize();
        let upward = side.cross(forward);

        #[rustfmt::skip]
        let view = Self::from_rows([
            [side.x,     side.y,     side.z,     -side.dot(eye)   ],
            [upward.x,   upward.y,   upward.z,   -upward.dot(eye) ],
            [-forward.x, -forward.y, -forward.z,  forward.dot(eye)],
            [T::ZERO,    T::ZERO,    T::ZERO,     T::ONE          ],
        ]);
        view
    }

    /// Creates a perspective projection matrix.
    ///
    /// `fov_y_radians` is the vertical field of view, `aspect` the
    /// width-to-height ratio of the viewport, and `near`/`far` the distances
    /// of the clip planes (both positive). View space is mapped to OpenGL
    /// clip space: after the perspective divide, visible points end up in
    /// `[-1, 1]` on all three axes, with the near plane at `z = -1`.
    pub fn perspective(fov_y_radians: T, aspect: T, near: T, far: T) -> Self
    where
        T: Trig,
    {
        let two = T::ONE + T::ONE;
        let focal = T::ONE / (fov_y_radians / two).tan();

        #[rustfmt::skip]
        let projection = Self::from_rows([
            [focal / aspect, T::ZERO, T::ZERO,                    T::ZERO                       ],
            [T::ZERO,        focal,   T::ZERO,                    T::ZERO                       ],
            [T::ZERO,        T::ZERO, (far + near) / (near - far), two * far * near / (near - far)],
            [T::ZERO,        T::ZERO, -T::ONE,                    T::ZERO                       ],
        ]);
        projection
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::{assert_approx_eq, vec2, vec3, vec4, Angle, Vec2f, Vec3f, Vec4f, Vector};

    use super::*;

    #[test]
    fn row_and_column_access() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.row0, vec2(1, 2));
        assert_eq!(mat.row1, vec2(3, 4));
        assert_eq!(mat.row(0), mat.row0);
        assert_eq!(mat.col(0), vec2(1, 3));
        assert_eq!(mat.col(1), vec2(2, 4));
        assert_eq!(mat[(1, 0)], 3);

        mat.row1 = vec2(30, 40);
        assert_eq!(mat, Matrix::from_rows([[1, 2], [30, 40]]));

        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(mat.row2, vec3(7, 8, 9));
        assert_eq!(mat.col(2), vec3(3, 6, 9));

        let mat = Mat4f::IDENTITY;
        assert_eq!(mat.row3, vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(
            Mat3f::IDENTITY,
            Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
        assert_eq!(Matrix::<_, 3>::from_scale(7).into_diagonal(), [7, 7, 7]);
    }

    #[test]
    fn trace() {
        assert_eq!(Matrix::from_diagonal([1, 2, 3]).trace(), 6);
        assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
        assert_eq!(Mat4f::ZERO.trace(), 0.0);
    }

    #[test]
    fn scale_matrix_commutes_2x2() {
        let scale_by_four = Mat2::from_scale(4.0f32);
        #[rustfmt::skip]
        let original = Matrix::from_rows([
            [0.0, 0.25],
            [0.5, 1.0],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::from_rows([
            [0.0, 1.0],
            [2.0, 4.0],
        ]);

        assert_eq!(original * scale_by_four, expected);
        assert_eq!(scale_by_four * original, expected);
        assert_eq!(original * 4.0, expected);
    }

    #[test]
    fn scale_matrix_commutes_3x3() {
        let scale_by_four = Mat3::from_scale(4.0f32);
        #[rustfmt::skip]
        let original = Matrix::from_rows([
            [0.0,  0.0,  0.0],
            [0.25, 0.25, 0.25],
            [0.5,  0.5,  0.5],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::from_rows([
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
        ]);

        assert_eq!(original * scale_by_four, expected);
        assert_eq!(scale_by_four * original, expected);
        assert_eq!(original * 4.0, expected);
    }

    #[test]
    fn scale_matrix_commutes_4x4() {
        let scale_by_four = Mat4::from_scale(4.0f32);
        #[rustfmt::skip]
        let original = Matrix::from_rows([
            [0.0,  0.0,  0.0,  0.0],
            [0.25, 0.25, 0.25, 0.25],
            [0.5,  0.5,  0.5,  0.5],
            [1.0,  1.0,  1.0,  1.0],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::from_rows([
            [0.0, 0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0, 2.0],
            [4.0, 4.0, 4.0, 4.0],
        ]);

        assert_eq!(original * scale_by_four, expected);
        assert_eq!(scale_by_four * original, expected);
        assert_eq!(original * 4.0, expected);
    }

    #[test]
    fn mat_vec_mul_is_row_dot_2x2() {
        // Scales and swaps the axes: +X goes to +4Y, +Y goes to +2X.
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [0.0f32, 2.0],
            [4.0,    0.0],
        ]);
        let point = vec2(130.0f32, 1.1);

        let out = mat * point;
        assert_eq!(out, vec2(2.0 * point.y, 4.0 * point.x));
        assert_eq!(out, vec2(mat.row0.dot(point), mat.row1.dot(point)));
    }

    #[test]
    fn mat_vec_mul_is_row_dot_3x3() {
        // Scales and cycles the axes: +X goes to +2Y, +Y goes to +4Z, +Z goes
        // to +6X.
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [0.0f32, 0.0, 6.0],
            [2.0,    0.0, 0.0],
            [0.0,    4.0, 0.0],
        ]);
        let point = vec3(130.0f32, 1.1, 1731.73);

        let out = mat * point;
        assert_eq!(out, vec3(6.0 * point.z, 2.0 * point.x, 4.0 * point.y));
        assert_eq!(
            out,
            vec3(
                mat.row0.dot(point),
                mat.row1.dot(point),
                mat.row2.dot(point),
            )
        );
    }

    #[test]
    fn mat_vec_mul_is_row_dot_4x4() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [0.0f32, 0.0, 6.0, 0.0],
            [2.0,    0.0, 0.0, 0.0],
            [0.0,    4.0, 0.0, 0.0],
            [0.0,    0.0, 0.0, 8.0],
        ]);
        let point = vec4(130.0f32, 1.1, 1731.73, 1.0);

        let out = mat * point;
        assert_eq!(
            out,
            vec4(6.0 * point.z, 2.0 * point.x, 4.0 * point.y, 8.0 * point.w)
        );
        assert_eq!(
            out,
            vec4(
                mat.row0.dot(point),
                mat.row1.dot(point),
                mat.row2.dot(point),
                mat.row3.dot(point),
            )
        );
    }

    #[test]
    fn mat_mat_mul() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);

        assert_eq!(a * b, Matrix::from_rows([[19, 22], [43, 50]]));
        assert_eq!(b * a, Matrix::from_rows([[23, 34], [31, 46]]));
        assert_ne!(a * b, b * a);

        assert_eq!(a * Matrix::IDENTITY, a);
        assert_eq!(Matrix::IDENTITY * a, a);
    }

    #[test]
    fn transpose() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(
            mat.transpose(),
            Matrix::from_rows([[1, 4, 7], [2, 5, 8], [3, 6, 9]])
        );
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);
    }

    #[test]
    fn rotation_2d() {
        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, Mat2f::IDENTITY);
        assert_eq!(Mat2f::rotation_clockwise(0.0), ccw);

        assert_approx_eq!(Mat2f::rotation_counterclockwise(TAU / 4.0) * Vec2f::X, Vec2f::Y);
        assert_approx_eq!(Mat2f::rotation_clockwise(TAU / 4.0) * Vec2f::Y, Vec2f::X);

        // For a rotation, the transpose is the inverse rotation.
        assert_approx_eq!(
            Mat2f::rotation_counterclockwise(1.0).transpose(),
            Mat2f::rotation_clockwise(1.0)
        );
    }

    #[test]
    fn rotation_cycles_axes() {
        // 120° about the diagonal permutes the basis vectors: X → Y → Z → X.
        let m = Mat3::rotation(Angle::to_radians(120.0f32), Vector::splat(1.0));
        assert_approx_eq!(m * Vec3f::X, Vec3f::Y).tolerance(1e-6);
        assert_approx_eq!(m * Vec3f::Y, Vec3f::Z).tolerance(1e-6);
        assert_approx_eq!(m * Vec3f::Z, Vec3f::X).tolerance(1e-6);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let axes = [
            vec3(1.0f32, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, 0.0, 1.0),
            vec3(1.0, 1.0, 1.0),
            vec3(1.0, -2.0, 0.5),
            vec3(0.3, 0.4, 0.5),
        ];
        let angles = [0.0f32, 0.5, FRAC_PI_2, 2.0, PI, 4.2, 6.0];
        for axis in axes {
            for angle in angles {
                let m = Mat3::rotation(angle, axis);
                for i in 0..3 {
                    for j in 0..3 {
                        let expected = if i == j { 1.0 } else { 0.0 };
                        assert_approx_eq!(
                            m.row(i).dot(m.row(j)),
                            expected,
                            "rows {i}/{j}, axis {axis:?}, angle {angle}"
                        );
                    }
                }
                assert_approx_eq!(m.determinant(), 1.0, "axis {axis:?}, angle {angle}");
            }
        }
    }

    #[test]
    fn rotation_normalizes_axis() {
        assert_eq!(
            Mat3::rotation(1.0f32, vec3(0.0, 0.0, 10.0)),
            Mat3::rotation(1.0f32, Vec3f::Z)
        );
    }

    #[test]
    #[should_panic(expected = "zero-length vector")]
    fn rotation_zero_axis() {
        Mat3::rotation(1.0f32, Vec3f::ZERO);
    }

    #[test]
    fn homogeneous_rotation_of_point() {
        // Rotating 60° about the (1,1,1) diagonal sends (1,2,3) to (2,1,3),
        // and composition with the identity leaves w untouched.
        let rotation = Mat3::rotation(Angle::to_radians(60.0f64), Vector::splat(1.0));
        let rotation4 = rotation * Mat4::IDENTITY;

        let point = vec4(1.0f64, 2.0, 3.0, 1.0);
        assert_approx_eq!(rotation4 * point, vec4(2.0, 1.0, 3.0, 1.0)).tolerance(1e-6);

        let rotation = Mat3::rotation(Angle::to_radians(60.0f32), Vector::splat(1.0));
        let rotation4 = Mat4::IDENTITY * rotation;
        let point = vec4(1.0f32, 2.0, 3.0, 1.0);
        assert_approx_eq!(rotation4 * point, vec4(2.0, 1.0, 3.0, 1.0));
    }

    #[test]
    fn mixed_composition_embeds_as_identity_border() {
        let r = Mat3::rotation(0.5f32, vec3(0.2, -1.0, 0.7));
        assert_eq!(r * Mat4::IDENTITY, r.to_homogeneous());
        assert_eq!(Mat4::IDENTITY * r, r.to_homogeneous());
    }

    #[test]
    fn mixed_composition_preserves_homogeneous_parts() {
        let r = Mat3::rotation(0.5f32, vec3(0.2, -1.0, 0.7));
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [ 5.0f32,  6.0,  7.0,  8.0],
            [ 9.0,    10.0, 11.0, 12.0],
            [13.0,    14.0, 15.0, 16.0],
            [17.0,    18.0, 19.0, 20.0],
        ]);

        // The identity border of the embedding passes the Mat4 operand's
        // fourth row (left composition) and fourth column (right composition)
        // through untouched.
        assert_eq!((r * m).row(3), m.row(3));
        assert_eq!((m * r).col(3), m.col(3));
    }

    #[test]
    fn rotate_then_translate() {
        let translate = Mat4::translation(vec3(10.0f32, 20.0, 30.0));
        let rotate = Mat3::rotation(FRAC_PI_2, Vec3f::Z);

        let composed = translate * rotate;
        let point = vec4(1.0f32, 0.0, 0.0, 1.0);
        assert_approx_eq!(composed * point, vec4(10.0, 21.0, 30.0, 1.0));

        // The homogeneous rotation constructor is the embedded 3x3 rotation.
        assert_eq!(Mat4::rotation(FRAC_PI_2, Vec3f::Z), rotate.to_homogeneous());

        // Translation lives in the fourth column and is preserved by the
        // composition with a pure rotation on the right.
        assert_eq!(composed.col(3), translate.col(3));
    }

    #[test]
    fn translation_moves_homogeneous_points() {
        let m = Mat4::translation(vec3(10.0f32, 20.0, 30.0));
        assert_eq!(m * vec4(1.0, 2.0, 3.0, 1.0), vec4(11.0, 22.0, 33.0, 1.0));
        // Directions (w = 0) are unaffected.
        assert_eq!(m * vec4(1.0, 2.0, 3.0, 0.0), vec4(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn homogeneous_embedding_round_trips() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        #[rustfmt::skip]
        assert_eq!(m.to_homogeneous(), Matrix::from_rows([
            [1, 2, 3, 0],
            [4, 5, 6, 0],
            [7, 8, 9, 0],
            [0, 0, 0, 1],
        ]));
        assert_eq!(m.to_homogeneous().truncate(), m);
    }

    #[test]
    fn look_at() {
        let eye = vec3(0.0f32, 0.0, 5.0);
        let view = Mat4::look_at(eye, Vec3f::ZERO, Vec3f::Y);

        // The camera position maps to the origin, the view direction to -Z,
        // and world-up stays up.
        assert_approx_eq!(view * eye.extend(1.0), Vec4f::W);
        assert_approx_eq!(view * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -5.0, 1.0));
        assert_approx_eq!(view * vec4(0.0, 1.0, 5.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0));
        assert_approx_eq!(view * vec4(1.0, 0.0, 5.0, 1.0), vec4(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "zero-length vector")]
    fn look_at_degenerate() {
        let eye = vec3(1.0f32, 2.0, 3.0);
        Mat4::look_at(eye, eye, Vec3f::Y);
    }

    #[test]
    fn perspective() {
        let proj = Mat4::perspective(FRAC_PI_2, 16.0f32 / 9.0, 0.1, 100.0);

        // Points on the near/far plane map to -1/+1 after the perspective
        // divide; w receives the (negated) view-space depth.
        let near = proj * vec4(0.0f32, 0.0, -0.1, 1.0);
        assert_approx_eq!(near.z / near.w, -1.0);
        assert_eq!(near.w, 0.1);

        let far = proj * vec4(0.0f32, 0.0, -100.0, 1.0);
        assert_approx_eq!(far.z / far.w, 1.0);
        assert_eq!(far.w, 100.0);
    }

    #[test]
    fn checked_indexing() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(mat.get(1, 1), Some(&3));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 2), None);
    }
}
