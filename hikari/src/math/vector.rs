use std::ops::{Index, Neg};

use super::common::{FloatValueType, ValueType};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector
    pub x: T,
    /// The y component of the vector
    pub y: T,
}

/// A three-dimensional vector
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector
    pub x: T,
    /// The y component of the vector
    pub y: T,
    /// The z component of the vector
    pub z: T,
}

/// Shorthand constructor for [Vec2].
#[inline]
pub fn vec2<T: ValueType>(x: T, y: T) -> Vec2<T> {
    Vec2::new(x, y)
}

/// Shorthand constructor for [Vec3].
#[inline]
pub fn vec3<T: ValueType>(x: T, y: T, z: T) -> Vec3<T> {
    Vec3::new(x, y, z)
}

/// Implements the component-wise container interface shared by vectors and spectra.
#[macro_export]
macro_rules! impl_vec_like {
    ( $( $vec_type:ident [ $( $component:ident )+ ] ),+ ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                /// Constructs a new value.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($component: T),*) -> Self {
                    let v = Self { $($component),* };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new value of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $($component: T::zero(),)*
                    }
                }

                /// Constructs a new value of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self {
                        $($component: T::one(),)*
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    #[allow(clippy::eq_op)]
                    let nan = $(self.$component != self.$component)||*;
                    nan
                }
            }

            impl<T> std::ops::Add for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                type Output = Self;

                #[inline]
                fn add(self, other: Self) -> Self {
                    Self { $($component: self.$component + other.$component,)* }
                }
            }

            impl<T> std::ops::AddAssign for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                #[inline]
                fn add_assign(&mut self, other: Self) {
                    $(self.$component += other.$component;)*
                }
            }

            impl<T> std::ops::Sub for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                type Output = Self;

                #[inline]
                fn sub(self, other: Self) -> Self {
                    Self { $($component: self.$component - other.$component,)* }
                }
            }

            impl<T> std::ops::SubAssign for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                #[inline]
                fn sub_assign(&mut self, other: Self) {
                    $(self.$component -= other.$component;)*
                }
            }

            impl<T> std::ops::Mul<T> for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                type Output = Self;

                #[inline]
                fn mul(self, s: T) -> Self {
                    Self { $($component: self.$component * s,)* }
                }
            }

            impl<T> std::ops::MulAssign<T> for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                #[inline]
                fn mul_assign(&mut self, s: T) {
                    $(self.$component *= s;)*
                }
            }

            impl<T> std::ops::Div<T> for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                type Output = Self;

                #[inline]
                fn div(self, s: T) -> Self {
                    Self { $($component: self.$component / s,)* }
                }
            }

            impl<T> std::ops::DivAssign<T> for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                #[inline]
                fn div_assign(&mut self, s: T) {
                    $(self.$component /= s;)*
                }
            }

            impl<T> approx::AbsDiffEq for $vec_type<T>
            where
                T: $crate::math::ValueType + approx::AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    $(self.$component.abs_diff_eq(&other.$component, epsilon))&&*
                }
            }

            impl<T> approx::RelativeEq for $vec_type<T>
            where
                T: $crate::math::ValueType + approx::RelativeEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    $(self.$component.relative_eq(&other.$component, epsilon, max_relative))&&*
                }
            }
        )*
    };
}

impl_vec_like!(Vec2 [x y], Vec3 [x y z]);

impl<T> Vec2<T>
where
    T: ValueType,
{
    /// Returns the dot product of the two vectors.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Returns the dot product of the two vectors.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of the two vectors.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the vector's squared length.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Returns the vector's length.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns the normalized vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        debug_assert!(self.len_sqr() > T::zero());

        *self / self.len()
    }

    /// Returns the vector with the absolute values of the components.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
}

impl<T> Neg for Vec3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T> Index<usize> for Vec3<T>
where
    T: ValueType,
{
    type Output = T;

    fn index(&self, component: usize) -> &T {
        match component {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Out of bounds Vec3 access with component {}", component),
        }
    }
}

