//! Checked dense matrix in row-major storage.
//!
//! [`Matrix<T, C>`] keeps its `rows * cols` scalars in a single flat
//! [`Vector`], so the scalar compound operators delegate straight to the
//! vector ones. Entry access goes through the check policy `C`; the
//! matrix-vector product validates that `ncols` matches the operand's
//! dimension.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use num_traits::{Num, Zero};

use crate::check::{CheckPolicy, Strict};
use crate::vector::{Vector, binary_from_compound, scalar_lhs_mul, scalar_rhs_ops};

/// Dense `rows x cols` matrix of scalars `T` under check policy `C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T, C: CheckPolicy = Strict> {
    data: Vector<T, C>,
    rows: usize,
    cols: usize,
}

impl<T, C: CheckPolicy> Matrix<T, C> {
    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            data: Vector::zeros(rows * cols),
            rows,
            cols,
        }
    }

    /// Matrix with entry `(i, j)` equal to `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { data, rows, cols }
    }

    /// Matrix built from fixed-size rows, mostly useful in tests:
    /// `Matrix::from_rows([[1.0, -0.5], [-0.5, 2.0]])`.
    pub fn from_rows<const R: usize, const N: usize>(rows: [[T; N]; R]) -> Self {
        let data = rows.into_iter().flatten().collect();
        Self {
            data,
            rows: R,
            cols: N,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Shape as a `(rows, cols)` pair.
    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of entries, `rows * cols`.
    pub fn size(&self) -> usize {
        self.data.dim()
    }

    /// Row-major iteration over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Row `i` as a slice, without a policy check on `i`.
    fn row_slice(&self, i: usize) -> &[T] {
        &self.data.as_slice()[i * self.cols..(i + 1) * self.cols]
    }
}

impl<T, C: CheckPolicy> Default for Matrix<T, C> {
    /// The empty `0 x 0` matrix.
    fn default() -> Self {
        Self {
            data: Vector::default(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T, C: CheckPolicy> Index<(usize, usize)> for Matrix<T, C> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &T {
        C::entry(row, col, self.rows, self.cols);
        &self.data.as_slice()[row * self.cols + col]
    }
}

impl<T, C: CheckPolicy> IndexMut<(usize, usize)> for Matrix<T, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        C::entry(row, col, self.rows, self.cols);
        &mut self.data.as_mut_slice()[row * self.cols + col]
    }
}

// Compound assignment; shape checks happen here, the elementwise work is the
// flat vector's.

impl<T: Num + Copy, C: CheckPolicy> AddAssign<&Matrix<T, C>> for Matrix<T, C> {
    fn add_assign(&mut self, rhs: &Matrix<T, C>) {
        C::shape_eq(self.dim(), rhs.dim());
        self.data += &rhs.data;
    }
}

impl<T: Num + Copy, C: CheckPolicy> AddAssign for Matrix<T, C> {
    fn add_assign(&mut self, rhs: Matrix<T, C>) {
        *self += &rhs;
    }
}

impl<T: Num + Copy, C: CheckPolicy> SubAssign<&Matrix<T, C>> for Matrix<T, C> {
    fn sub_assign(&mut self, rhs: &Matrix<T, C>) {
        C::shape_eq(self.dim(), rhs.dim());
        self.data -= &rhs.data;
    }
}

impl<T: Num + Copy, C: CheckPolicy> SubAssign for Matrix<T, C> {
    fn sub_assign(&mut self, rhs: Matrix<T, C>) {
        *self -= &rhs;
    }
}

impl<T: Num + Copy, C: CheckPolicy> MulAssign<T> for Matrix<T, C> {
    fn mul_assign(&mut self, a: T) {
        self.data *= a;
    }
}

impl<T: Num + Copy, C: CheckPolicy> DivAssign<T> for Matrix<T, C> {
    fn div_assign(&mut self, a: T) {
        self.data /= a;
    }
}

binary_from_compound!(Matrix, Add, add, add_assign);
binary_from_compound!(Matrix, Sub, sub, sub_assign);
scalar_rhs_ops!(Matrix);
scalar_lhs_mul!(Matrix: f32 f64 i32 i64);

/// Matrix-vector product `y = A · x`.
impl<T: Num + Copy, C: CheckPolicy> Mul<&Vector<T, C>> for &Matrix<T, C> {
    type Output = Vector<T, C>;
    fn mul(self, x: &Vector<T, C>) -> Vector<T, C> {
        C::dim_eq(self.cols, x.dim());
        (0..self.rows)
            .map(|i| {
                self.row_slice(i)
                    .iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect()
    }
}

impl<T: Num + Copy, C: CheckPolicy> Mul<Vector<T, C>> for &Matrix<T, C> {
    type Output = Vector<T, C>;
    fn mul(self, x: Vector<T, C>) -> Vector<T, C> {
        self * &x
    }
}

impl<T: Num + Copy, C: CheckPolicy> Mul<&Vector<T, C>> for Matrix<T, C> {
    type Output = Vector<T, C>;
    fn mul(self, x: &Vector<T, C>) -> Vector<T, C> {
        &self * x
    }
}

impl<T: Num + Copy, C: CheckPolicy> Mul<Vector<T, C>> for Matrix<T, C> {
    type Output = Vector<T, C>;
    fn mul(self, x: Vector<T, C>) -> Vector<T, C> {
        &self * &x
    }
}
