use super::{facing_normal, SurfaceHit};
use crate::math::{Ray, Transform, Vec3};

/// An axis-aligned unit cube in object space, centered at the origin.
#[derive(Clone, Debug)]
pub struct Cube {
    object_to_world: Transform<f32>,
    world_to_object: Transform<f32>,
}

const HALF_EXTENT: f32 = 0.5;

impl Cube {
    /// Creates a new `Cube`.
    pub fn new(object_to_world: &Transform<f32>) -> Self {
        Self {
            object_to_world: object_to_world.clone(),
            world_to_object: object_to_world.inverted(),
        }
    }

    /// Intersects `ray` with this `Cube` using the slab test.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<SurfaceHit> {
        let Ray { o, d } = self.world_to_object.ray(ray);

        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let (o_a, d_a) = (o[axis], d[axis]);
            if d_a == 0.0 {
                // Parallel to the slab, reject if outside
                if o_a.abs() > HALF_EXTENT {
                    return None;
                }
                continue;
            }
            let inv_d = 1.0 / d_a;
            let mut t_near = (-HALF_EXTENT - o_a) * inv_d;
            let mut t_far = (HALF_EXTENT - o_a) * inv_d;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            t_min = t_min.max(t_near);
            t_max = t_max.min(t_far);
            if t_min > t_max {
                return None;
            }
        }

        if t_max <= 0.0 {
            return None;
        }
        // Origin inside the cube hits the far side
        let t = if t_min > 0.0 { t_min } else { t_max };

        let p_obj = o + d * t;
        let n_obj = {
            let a = p_obj.abs();
            if a.x >= a.y && a.x >= a.z {
                Vec3::new(p_obj.x.signum(), 0.0, 0.0)
            } else if a.y >= a.z {
                Vec3::new(0.0, p_obj.y.signum(), 0.0)
            } else {
                Vec3::new(0.0, 0.0, p_obj.z.signum())
            }
        };
        let (n, outside) = facing_normal(self.object_to_world.normal(n_obj), ray.d);

        Some(SurfaceHit { t, n, outside })
    }
}
