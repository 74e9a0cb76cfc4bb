use crate::math::{Ray, Spectrum, Vec3};

/// State of a single in-flight path.
#[derive(Copy, Clone, Debug)]
pub struct PathState {
    pub ray: Ray<f32>,
    /// Accumulated multiplicative color carried by the path
    pub throughput: Spectrum<f32>,
    /// Flattened index of the pixel the path was spawned from
    pub pixel_index: usize,
    pub remaining_bounces: u32,
}

impl PathState {
    /// Creates a new path for `pixel_index` with unit throughput.
    pub fn new(ray: Ray<f32>, pixel_index: usize, remaining_bounces: u32) -> Self {
        Self {
            ray,
            throughput: Spectrum::ones(),
            pixel_index,
            remaining_bounces,
        }
    }

    /// Returns `true` if the path still has bounces left.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining_bounces > 0
    }

    /// Ends the path without changing its throughput.
    #[inline]
    pub fn terminate(&mut self) {
        self.remaining_bounces = 0;
    }
}

impl Default for PathState {
    fn default() -> Self {
        Self::new(Ray::default(), 0, 0)
    }
}

/// Nearest hit of a path's ray in the current bounce.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Hit distance, negative on a miss
    pub t: f32,
    pub material_id: usize,
    /// World space normal facing against the ray
    pub normal: Vec3<f32>,
    /// `true` if the ray hit the surface from the outside
    pub outside: bool,
}

impl Intersection {
    /// The cleared state that also encodes a miss.
    pub const MISS: Intersection = Intersection {
        t: -1.0,
        material_id: 0,
        normal: Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        outside: true,
    };

    /// Returns `true` if this records a valid hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.t > 0.0
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::MISS
    }
}

/// Surface point handed to a scatter function.
#[derive(Copy, Clone, Debug)]
pub struct HitPoint {
    /// Hit position pulled back along the incoming ray to avoid self-intersection
    pub biased: Vec3<f32>,
    /// Exact hit position
    pub unbiased: Vec3<f32>,
    pub normal: Vec3<f32>,
    pub outside: bool,
}
