use std::ops::Mul;

use super::common::FloatValueType;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Mathematical_Routines.html#Matrix4x4

/// A row-major 4x4 `Matrix4x4`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        let mut m = [[T::zero(); 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Self { m }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|t| t.is_nan())
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        let mut m = [[T::zero(); 4]; 4];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.m[c][r];
            }
        }
        Self { m }
    }
}

impl<'a, T> Mul<&'a Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'a Matrix4x4<T>) -> Matrix4x4<T> {
        let mut m = [[T::zero(); 4]; 4];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = (0..4).fold(T::zero(), |acc, k| acc + self.m[r][k] * other.m[k][c]);
            }
        }
        Matrix4x4::new(m)
    }
}
