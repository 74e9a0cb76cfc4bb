mod jitter;

pub use jitter::{generate_jitter, JITTER_SHUFFLE_STREAM};

use crate::math::{Vec2, Vec3};

use rand_pcg::Pcg32;

/// Mixes the bits of `a` so that neighbouring inputs land far apart.
#[inline]
pub fn hash(a: u32) -> u32 {
    let a = a.wrapping_add(0x7ed5_5d16).wrapping_add(a << 12);
    let a = (a ^ 0xc761_c23c) ^ (a >> 19);
    let a = a.wrapping_add(0x1656_67b1).wrapping_add(a << 5);
    let a = a.wrapping_add(0xd3a2_646c) ^ (a << 9);
    let a = a.wrapping_add(0xfd70_46c5).wrapping_add(a << 3);
    (a ^ 0xb55a_4f09) ^ (a >> 16)
}

// Bit layout of the packed seed word: [reserved:1][depth:9][iteration:22]
const ITERATION_BITS: u32 = 22;
const DEPTH_BITS: u32 = 9;

/// Largest iteration index that gets a unique stream.
pub const MAX_ITERATION: u32 = (1 << ITERATION_BITS) - 1;
/// Largest trace depth whose bounces all get unique streams. Depth 0 is taken by the jitter.
pub const MAX_TRACE_DEPTH: u32 = (1 << DEPTH_BITS) - 1;

/// Returns the random stream for the given `iteration`, `pixel_index` and bounce `depth`.
///
/// This is a pure function of its inputs: the same triple always produces the same sequence
/// and streams for different triples are independent.
pub fn seeded_engine(iteration: u32, pixel_index: u32, depth: u32) -> Pcg32 {
    debug_assert!(iteration < (1 << ITERATION_BITS));
    debug_assert!(depth < (1 << DEPTH_BITS));

    let packed = (1 << 31) | ((depth & ((1 << DEPTH_BITS) - 1)) << ITERATION_BITS) | iteration;
    let seed = hash(packed) ^ hash(pixel_index);
    // Pcg has uncorrelated streams so let's leverage that
    Pcg32::new(
        (u64::from(seed) << 32) | u64::from(packed),
        u64::from(hash(pixel_index)),
    )
}

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Monte_Carlo_Integration/2D_Sampling_with_Multidimensional_Transformations

/// Samples a direction in the +z hemisphere with a cosine-weighted density.
pub fn cosine_sample_hemisphere(u: Vec2<f32>) -> Vec3<f32> {
    let d = concentric_sample_disk(u);
    let z = (1.0 - d.x * d.x - d.y * d.y).max(0.0).sqrt();
    Vec3::new(d.x, d.y, z)
}

/// Maps a uniform sample in [0,1)^2 onto the unit disk while preserving stratification.
pub fn concentric_sample_disk(u: Vec2<f32>) -> Vec2<f32> {
    let offset = u * 2.0 - Vec2::new(1.0, 1.0);
    if offset == Vec2::zeros() {
        return Vec2::zeros();
    }

    let (theta, r) = if offset.x.abs() > offset.y.abs() {
        (
            std::f32::consts::FRAC_PI_4 * (offset.y / offset.x),
            offset.x,
        )
    } else {
        (
            std::f32::consts::FRAC_PI_2 - std::f32::consts::FRAC_PI_4 * (offset.x / offset.y),
            offset.y,
        )
    };

    Vec2::new(theta.cos(), theta.sin()) * r
}
