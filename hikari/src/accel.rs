use crate::{
    math::Ray,
    path::Intersection,
    shapes::{Primitive, SurfaceHit},
};

/// Nearest-hit queries against the scene primitives.
///
/// This is the single seam for swapping in an acceleration structure.
pub trait Accelerator: Send + Sync {
    /// Returns the nearest intersection of `ray` or [Intersection::MISS].
    fn intersect(&self, ray: Ray<f32>) -> Intersection;
    /// Returns the number of primitives that can be hit.
    fn primitive_count(&self) -> usize;
}

/// Brute-force scan over every primitive.
pub struct LinearScan {
    primitives: Vec<Primitive>,
}

impl LinearScan {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }
}

impl Accelerator for LinearScan {
    fn intersect(&self, ray: Ray<f32>) -> Intersection {
        self.primitives
            .iter()
            .filter_map(|p| p.shape.intersect(ray).map(|hit| (hit, p.material_id)))
            .filter(|(hit, _)| hit.t > 0.0)
            .min_by(|(a, _), (b, _)| a.t.total_cmp(&b.t))
            .map_or(Intersection::MISS, |(SurfaceHit { t, n, outside }, material_id)| {
                Intersection {
                    t,
                    material_id,
                    normal: n,
                    outside,
                }
            })
    }

    fn primitive_count(&self) -> usize {
        self.primitives.len()
    }
}
