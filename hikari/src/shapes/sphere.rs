use super::{facing_normal, SurfaceHit};
use crate::math::{Ray, Transform};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Spheres.html

/// A sphere object. In object space it is centered at the origin with a diameter of 1.
#[derive(Clone, Debug)]
pub struct Sphere {
    object_to_world: Transform<f32>,
    world_to_object: Transform<f32>,
}

const RADIUS: f32 = 0.5;

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(object_to_world: &Transform<f32>) -> Self {
        Self {
            object_to_world: object_to_world.clone(),
            world_to_object: object_to_world.inverted(),
        }
    }

    /// Intersects `ray` with this `Sphere`.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<SurfaceHit> {
        // Object space direction is left unnormalized so t stays in world units
        let Ray { o, d } = self.world_to_object.ray(ray);

        // Quadratic coefficients
        let a = d.len_sqr();
        let b = 2.0 * d.dot(o);
        let c = o.len_sqr() - RADIUS * RADIUS;

        // Solve quadratic equation for ts
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }
        let rd = discriminant.sqrt();

        let q = if b < 0.0 {
            -0.5 * (b - rd)
        } else {
            -0.5 * (b + rd)
        };
        if q == 0.0 {
            return None;
        }

        // Find hit points
        let mut t0 = q / a;
        let mut t1 = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t1 <= 0.0 {
            return None;
        }
        // Origin inside the sphere hits the far side
        let t = if t0 > 0.0 { t0 } else { t1 };

        let p_obj = o + d * t;
        let (n, outside) = facing_normal(self.object_to_world.normal(p_obj), ray.d);

        Some(SurfaceHit { t, n, outside })
    }
}
