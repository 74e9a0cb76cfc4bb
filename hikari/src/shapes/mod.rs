mod cube;
mod sphere;

pub use cube::Cube;
pub use sphere::Sphere;

use crate::math::{Ray, Vec3};

/// Info of a surface hit
#[derive(Copy, Clone, Debug)]
pub struct SurfaceHit {
    /// Hit distance along the world ray
    pub t: f32,
    /// World space surface normal, facing against the ray
    pub n: Vec3<f32>,
    /// `true` if the ray arrived from the outside of the surface
    pub outside: bool,
}

/// The closed set of supported primitive shapes.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Cube(Cube),
}

impl Shape {
    /// Intersects [Ray] with this shape, returning the nearest hit in front of the origin.
    #[inline]
    pub fn intersect(&self, ray: Ray<f32>) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Cube(c) => c.intersect(ray),
        }
    }
}

/// A shape placed in the scene together with the index of its material.
#[derive(Clone, Debug)]
pub struct Primitive {
    pub shape: Shape,
    pub material_id: usize,
}

impl Primitive {
    pub fn new(shape: Shape, material_id: usize) -> Self {
        Self { shape, material_id }
    }
}

/// Normalizes the outward `world_normal` and flips it to face against `d`.
/// Also returns `true` if no flip was needed, i.e. the hit is from the outside.
fn facing_normal(world_normal: Vec3<f32>, d: Vec3<f32>) -> (Vec3<f32>, bool) {
    let n = world_normal.normalized();
    if n.dot(d) > 0.0 {
        (-n, false)
    } else {
        (n, true)
    }
}
