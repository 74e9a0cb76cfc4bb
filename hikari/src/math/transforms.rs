use super::{common::FloatValueType, matrix::Matrix4x4, transform::Transform, vector::Vec3};

/// Creates a new `Transform` that is a translation by `delta`.
pub fn translation<T>(delta: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let (o, z) = (T::one(), T::zero());
    let m = Matrix4x4::new([
        [o, z, z, delta.x],
        [z, o, z, delta.y],
        [z, z, o, delta.z],
        [z, z, z, o],
    ]);
    let m_inv = Matrix4x4::new([
        [o, z, z, -delta.x],
        [z, o, z, -delta.y],
        [z, z, o, -delta.z],
        [z, z, z, o],
    ]);

    Transform::new_full(m, m_inv)
}

/// Creates a new `Transform` that is a scaling by `s`.
pub fn scale<T>(s: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let (o, z) = (T::one(), T::zero());
    let m = Matrix4x4::new([
        [s.x, z, z, z],
        [z, s.y, z, z],
        [z, z, s.z, z],
        [z, z, z, o],
    ]);
    let m_inv = Matrix4x4::new([
        [o / s.x, z, z, z],
        [z, o / s.y, z, z],
        [z, z, o / s.z, z],
        [z, z, z, o],
    ]);

    Transform::new_full(m, m_inv)
}

// Rotations are orthonormal so the transpose is the inverse

/// Creates a new `Transform` that is a rotation of `theta` radians around the x-axis.
pub fn rotation_x<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (o, z) = (T::one(), T::zero());
    let (sin, cos) = theta.sin_cos();
    let m = Matrix4x4::new([
        [o, z, z, z],
        [z, cos, -sin, z],
        [z, sin, cos, z],
        [z, z, z, o],
    ]);

    Transform::new_full(m, m.transposed())
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the y-axis.
pub fn rotation_y<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (o, z) = (T::one(), T::zero());
    let (sin, cos) = theta.sin_cos();
    let m = Matrix4x4::new([
        [cos, z, sin, z],
        [z, o, z, z],
        [-sin, z, cos, z],
        [z, z, z, o],
    ]);

    Transform::new_full(m, m.transposed())
}

/// Creates a new `Transform` that is a rotation of `theta` radians around the z-axis.
pub fn rotation_z<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (o, z) = (T::one(), T::zero());
    let (sin, cos) = theta.sin_cos();
    let m = Matrix4x4::new([
        [cos, -sin, z, z],
        [sin, cos, z, z],
        [z, z, o, z],
        [z, z, z, o],
    ]);

    Transform::new_full(m, m.transposed())
}

/// Creates the object-to-world `Transform` of a scene object as translate * rotate * scale.
/// `rotation` holds per-axis angles in degrees, applied in x, y, z order.
pub fn placement<T>(position: Vec3<T>, rotation: Vec3<T>, extent: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let rotate = &rotation_z(rotation.z.to_radians())
        * &(&rotation_y(rotation.y.to_radians()) * &rotation_x(rotation.x.to_radians()));
    &translation(position) * &(&rotate * &scale(extent))
}
