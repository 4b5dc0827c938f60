//! Checked mathematical vector with linear-space operations.
//!
//! [`Vector<T, C>`] is a fixed-dimension, exclusively owned flat buffer of
//! scalars. Binary operators between two vectors validate dimensions through
//! the check policy `C` before touching any element; division by a scalar
//! validates the divisor. The binary forms (`+`, `-`, `*`, `/`) are defined
//! in terms of the compound forms applied to a copy, so the operands are
//! never partially mutated.

use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use num_traits::{Num, Zero};

use crate::check::{CheckPolicy, Strict};

/// Dense vector of scalars `T` under check policy `C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector<T, C: CheckPolicy = Strict> {
    data: Vec<T>,
    check: PhantomData<C>,
}

impl<T, C: CheckPolicy> Vector<T, C> {
    fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            check: PhantomData,
        }
    }

    /// Zero-filled vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self::from_vec(vec![T::zero(); dim])
    }

    /// Vector of dimension `dim` with every element equal to `value`.
    pub fn filled(dim: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_vec(vec![value; dim])
    }

    /// Dimension of the vector, fixed at construction.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Num + Copy, C: CheckPolicy> Vector<T, C> {
    /// Inner product `⟨self, other⟩`. Dimensions must agree.
    pub fn dot(&self, other: &Self) -> T {
        C::dim_eq(self.dim(), other.dim());
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean norm `⟨self, self⟩`.
    pub fn norm_sq(&self) -> T {
        self.dot(self)
    }
}

impl<T, C: CheckPolicy> Default for Vector<T, C> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<T, C: CheckPolicy> From<Vec<T>> for Vector<T, C> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Clone, C: CheckPolicy> From<&[T]> for Vector<T, C> {
    fn from(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl<T, C: CheckPolicy, const N: usize> From<[T; N]> for Vector<T, C> {
    fn from(data: [T; N]) -> Self {
        Self::from_vec(data.into())
    }
}

impl<T, C: CheckPolicy> FromIterator<T> for Vector<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: CheckPolicy> IntoIterator for Vector<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C: CheckPolicy> IntoIterator for &'a Vector<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, C: CheckPolicy> IntoIterator for &'a mut Vector<T, C> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, C: CheckPolicy> Index<usize> for Vector<T, C> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        C::index(index, self.dim());
        &self.data[index]
    }
}

impl<T, C: CheckPolicy> IndexMut<usize> for Vector<T, C> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        C::index(index, self.dim());
        &mut self.data[index]
    }
}

// Compound assignment: the checked primitives everything else builds on.

impl<T: Num + Copy, C: CheckPolicy> AddAssign<&Vector<T, C>> for Vector<T, C> {
    fn add_assign(&mut self, rhs: &Vector<T, C>) {
        C::dim_eq(self.dim(), rhs.dim());
        for (dest, &src) in self.data.iter_mut().zip(rhs.iter()) {
            *dest = *dest + src;
        }
    }
}

impl<T: Num + Copy, C: CheckPolicy> AddAssign for Vector<T, C> {
    fn add_assign(&mut self, rhs: Vector<T, C>) {
        *self += &rhs;
    }
}

impl<T: Num + Copy, C: CheckPolicy> SubAssign<&Vector<T, C>> for Vector<T, C> {
    fn sub_assign(&mut self, rhs: &Vector<T, C>) {
        C::dim_eq(self.dim(), rhs.dim());
        for (dest, &src) in self.data.iter_mut().zip(rhs.iter()) {
            *dest = *dest - src;
        }
    }
}

impl<T: Num + Copy, C: CheckPolicy> SubAssign for Vector<T, C> {
    fn sub_assign(&mut self, rhs: Vector<T, C>) {
        *self -= &rhs;
    }
}

impl<T: Num + Copy, C: CheckPolicy> MulAssign<T> for Vector<T, C> {
    fn mul_assign(&mut self, a: T) {
        for elem in self.data.iter_mut() {
            *elem = *elem * a;
        }
    }
}

impl<T: Num + Copy, C: CheckPolicy> DivAssign<T> for Vector<T, C> {
    fn div_assign(&mut self, a: T) {
        C::nonzero_divisor(&a);
        for elem in self.data.iter_mut() {
            *elem = *elem / a;
        }
    }
}

/// Derives the four owned/borrowed binary-operator impls from the
/// corresponding compound assignment, for `Vector` and `Matrix` alike.
macro_rules! binary_from_compound {
    ($ty:ident, $trait:ident, $method:ident, $assign:ident) => {
        impl<T: Num + Copy, C: CheckPolicy> $trait<&$ty<T, C>> for $ty<T, C> {
            type Output = $ty<T, C>;
            fn $method(mut self, rhs: &$ty<T, C>) -> $ty<T, C> {
                self.$assign(rhs);
                self
            }
        }

        impl<T: Num + Copy, C: CheckPolicy> $trait for $ty<T, C> {
            type Output = $ty<T, C>;
            fn $method(mut self, rhs: $ty<T, C>) -> $ty<T, C> {
                self.$assign(&rhs);
                self
            }
        }

        impl<T: Num + Copy, C: CheckPolicy> $trait<&$ty<T, C>> for &$ty<T, C> {
            type Output = $ty<T, C>;
            fn $method(self, rhs: &$ty<T, C>) -> $ty<T, C> {
                let mut out = self.clone();
                out.$assign(rhs);
                out
            }
        }

        impl<T: Num + Copy, C: CheckPolicy> $trait<$ty<T, C>> for &$ty<T, C> {
            type Output = $ty<T, C>;
            fn $method(self, rhs: $ty<T, C>) -> $ty<T, C> {
                let mut out = self.clone();
                out.$assign(&rhs);
                out
            }
        }
    };
}

/// Scalar `*` and `/` on the right-hand side, owned and borrowed.
macro_rules! scalar_rhs_ops {
    ($ty:ident) => {
        impl<T: Num + Copy, C: CheckPolicy> Mul<T> for $ty<T, C> {
            type Output = $ty<T, C>;
            fn mul(mut self, a: T) -> $ty<T, C> {
                self *= a;
                self
            }
        }

        impl<T: Num + Copy, C: CheckPolicy> Mul<T> for &$ty<T, C> {
            type Output = $ty<T, C>;
            fn mul(self, a: T) -> $ty<T, C> {
                self.clone() * a
            }
        }

        impl<T: Num + Copy, C: CheckPolicy> Div<T> for $ty<T, C> {
            type Output = $ty<T, C>;
            fn div(mut self, a: T) -> $ty<T, C> {
                self /= a;
                self
            }
        }

        impl<T: Num + Copy, C: CheckPolicy> Div<T> for &$ty<T, C> {
            type Output = $ty<T, C>;
            fn div(self, a: T) -> $ty<T, C> {
                self.clone() / a
            }
        }
    };
}

/// `scalar * vector` for the common scalar types; coherence rules out a
/// blanket impl with the scalar on the left.
macro_rules! scalar_lhs_mul {
    ($ty:ident: $($t:ty)*) => {$(
        impl<C: CheckPolicy> Mul<$ty<$t, C>> for $t {
            type Output = $ty<$t, C>;
            fn mul(self, x: $ty<$t, C>) -> $ty<$t, C> {
                x * self
            }
        }

        impl<C: CheckPolicy> Mul<&$ty<$t, C>> for $t {
            type Output = $ty<$t, C>;
            fn mul(self, x: &$ty<$t, C>) -> $ty<$t, C> {
                x.clone() * self
            }
        }
    )*};
}

pub(crate) use {binary_from_compound, scalar_lhs_mul, scalar_rhs_ops};

binary_from_compound!(Vector, Add, add, add_assign);
binary_from_compound!(Vector, Sub, sub, sub_assign);
scalar_rhs_ops!(Vector);
scalar_lhs_mul!(Vector: f32 f64 i32 i64);
