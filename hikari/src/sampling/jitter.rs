use super::{hash, seeded_engine};
use crate::math::Vec2;

use rand::{
    distributions::{Standard, Uniform},
    Rng,
};
use rand_pcg::Pcg32;
use rayon::prelude::*;

/// Stream used for the per-iteration jitter permutation, distinct from all pixel streams.
pub const JITTER_SHUFFLE_STREAM: u64 = 0x6a09_e667_f3bc_c909;

/// Fills `jitter` with one sub-pixel offset in [-0.5, 0.5)^2 per pixel for `iteration`.
///
/// Offsets are drawn from each pixel's depth 0 stream and then permuted across the whole
/// image to decorrelate the noise patterns of neighbouring pixels.
pub fn generate_jitter(iteration: u32, jitter: &mut [Vec2<f32>]) {
    jitter.par_iter_mut().enumerate().for_each(|(i, offset)| {
        let mut rng = seeded_engine(iteration, i as u32, 0);
        let u: f32 = rng.sample(Standard);
        let v: f32 = rng.sample(Standard);
        *offset = Vec2::new(u - 0.5, v - 0.5);
    });

    let mut rng = Pcg32::new(u64::from(hash(iteration)), JITTER_SHUFFLE_STREAM);
    shuffle(jitter, &mut rng);
}

// Fisher-Yates
fn shuffle<T>(samples: &mut [T], rng: &mut Pcg32) {
    for i in 0..samples.len() {
        let other = i + rng.sample(Uniform::from(0..(samples.len() - i)));
        samples.swap(i, other);
    }
}
