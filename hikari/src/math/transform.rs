use std::ops::Mul;

use super::{common::FloatValueType, matrix::Matrix4x4, ray::Ray, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transforms/Transforms.html

/// An affine transformation with its cached inverse.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform<T>
where
    T: FloatValueType,
{
    m: Matrix4x4<T>,
    m_inv: Matrix4x4<T>,
}

impl<T> Transform<T>
where
    T: FloatValueType,
{
    /// Creates a new `Transform` from a [Matrix4x4] and its inverse.
    pub fn new_full(m: Matrix4x4<T>, m_inv: Matrix4x4<T>) -> Self {
        debug_assert!(!m.has_nans());
        debug_assert!(!m_inv.has_nans());
        Self { m, m_inv }
    }

    /// Creates a new identity `Transform`.
    pub fn identity() -> Self {
        let m = Matrix4x4::identity();
        Self::new_full(m, m)
    }

    /// Returns a reference to the [Matrix4x4] of this `Transform`.
    pub fn m(&self) -> &Matrix4x4<T> {
        &self.m
    }

    /// Returns a reference to the inverse [Matrix4x4] of this `Transform`.
    pub fn m_inv(&self) -> &Matrix4x4<T> {
        &self.m_inv
    }

    /// Returns the inverse of this `Transform`.
    pub fn inverted(&self) -> Self {
        Self::new_full(self.m_inv, self.m)
    }

    /// Transforms `p` as a point.
    pub fn point(&self, p: Vec3<T>) -> Vec3<T> {
        let m = &self.m.m;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let z = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let w = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];
        if w == T::one() {
            Vec3::new(x, y, z)
        } else {
            Vec3::new(x, y, z) / w
        }
    }

    /// Transforms `v` as a direction, ignoring translation.
    pub fn vector(&self, v: Vec3<T>) -> Vec3<T> {
        let m = &self.m.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Transforms `n` as a surface normal using the inverse transpose. The result is not normalized.
    pub fn normal(&self, n: Vec3<T>) -> Vec3<T> {
        let m = &self.m_inv.m;
        Vec3::new(
            m[0][0] * n.x + m[1][0] * n.y + m[2][0] * n.z,
            m[0][1] * n.x + m[1][1] * n.y + m[2][1] * n.z,
            m[0][2] * n.x + m[1][2] * n.y + m[2][2] * n.z,
        )
    }

    /// Transforms `ray` without renormalizing its direction, so hit distances carry over.
    pub fn ray(&self, ray: Ray<T>) -> Ray<T> {
        Ray::new(self.point(ray.o), self.vector(ray.d))
    }
}

impl<T> Default for Transform<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<'a, T> Mul<&'a Transform<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Transform<T>;

    fn mul(self, other: &'a Transform<T>) -> Transform<T> {
        Transform::new_full(&self.m * &other.m, &other.m_inv * &self.m_inv)
    }
}
