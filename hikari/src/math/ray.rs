use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A ray with an origin and a direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    /// Origin
    pub o: Vec3<T>,
    /// Direction
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    #[inline]
    pub fn new(o: Vec3<T>, d: Vec3<T>) -> Self {
        debug_assert!(!o.has_nans());
        debug_assert!(!d.has_nans());

        Self { o, d }
    }

    /// Finds the point on the `Ray` at distance `t`.
    #[inline]
    pub fn point(&self, t: T) -> Vec3<T> {
        self.o + self.d * t
    }

    /// Returns `true` if any component of the `Ray` is NaN.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }
}

impl<T> Default for Ray<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self {
            o: Vec3::zeros(),
            d: Vec3::new(T::zero(), T::zero(), -T::one()),
        }
    }
}
