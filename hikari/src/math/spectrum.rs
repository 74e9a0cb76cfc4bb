use std::ops::{Mul, MulAssign};

use super::common::{FloatValueType, ValueType};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spectrum<T>
where
    T: ValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

crate::impl_vec_like!(Spectrum [r g b]);

impl<T> Spectrum<T>
where
    T: ValueType,
{
    /// Returns `true` if all components are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_comp(&self) -> T {
        let rg = if self.r > self.g { self.r } else { self.g };
        if rg > self.b {
            rg
        } else {
            self.b
        }
    }
}

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Returns `true` if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl<T> Mul for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl<T> MulAssign for Spectrum<T>
where
    T: ValueType,
{
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.r *= other.r;
        self.g *= other.g;
        self.b *= other.b;
    }
}
