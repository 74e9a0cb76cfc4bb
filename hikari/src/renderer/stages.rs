use crate::{
    accel::Accelerator,
    camera::Camera,
    gbuffer::GBufferPixel,
    materials::{Material, ScatterFunction},
    math::{Spectrum, Vec2},
    path::{HitPoint, Intersection, PathState},
    sampling::seeded_engine,
};
use rayon::prelude::*;

/// Distance a hit point is pulled back along the incoming ray before spawning bounces.
pub const HIT_BIAS: f32 = 1e-4;

/// A radiance contribution for a single pixel.
pub type Deposit = (usize, Spectrum<f32>);

/// Initializes one path per pixel from the camera, offset by the per-pixel `jitter`.
pub fn generate_camera_rays(
    camera: &Camera,
    jitter: &[Vec2<f32>],
    trace_depth: u32,
    paths: &mut [PathState],
) {
    let width = camera.resolution.x as usize;
    paths
        .par_iter_mut()
        .zip(jitter.par_iter())
        .enumerate()
        .for_each(|(i, (path, &offset))| {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            *path = PathState::new(camera.ray(x, y, offset), i, trace_depth);
        });
}

/// Resets every record to [Intersection::MISS] so no stale hits survive to the next bounce.
pub fn clear_intersections(intersections: &mut [Intersection]) {
    intersections
        .par_iter_mut()
        .for_each(|isect| *isect = Intersection::MISS);
}

/// Finds the nearest hit for each active path.
pub fn compute_intersections(
    accel: &dyn Accelerator,
    paths: &[PathState],
    intersections: &mut [Intersection],
) {
    debug_assert_eq!(paths.len(), intersections.len());

    intersections
        .par_iter_mut()
        .zip(paths.par_iter())
        .for_each(|(isect, path)| *isect = accel.intersect(path.ray));
}

/// Records the first-hit position and normal of every pixel.
///
/// Only valid before the first compaction, while path `i` still belongs to pixel `i`.
pub fn capture_gbuffer(
    paths: &[PathState],
    intersections: &[Intersection],
    gbuffer: &mut [GBufferPixel],
) {
    assert_eq!(paths.len(), gbuffer.len());
    debug_assert_eq!(paths.len(), intersections.len());

    gbuffer
        .par_iter_mut()
        .zip(paths.par_iter().zip(intersections.par_iter()))
        .enumerate()
        .for_each(|(i, (pixel, (path, isect)))| {
            debug_assert_eq!(path.pixel_index, i);
            *pixel = if isect.is_hit() {
                GBufferPixel {
                    position: path.ray.point(isect.t),
                    normal: isect.normal,
                }
            } else {
                GBufferPixel::default()
            };
        });
}

/// Shades each active path against its intersection.
///
/// Returns the contributions of the paths that terminated in this bounce. A path never
/// deposits more than once as it is compacted away right after.
pub fn shade(
    iteration: u32,
    depth: u32,
    paths: &mut [PathState],
    intersections: &[Intersection],
    materials: &[Material],
    scatter: &dyn ScatterFunction,
) -> Vec<Deposit> {
    debug_assert_eq!(paths.len(), intersections.len());

    paths
        .par_iter_mut()
        .zip(intersections.par_iter())
        .filter_map(|(path, isect)| {
            if !isect.is_hit() {
                path.throughput = Spectrum::zeros();
                path.terminate();
                return None;
            }

            let material = &materials[isect.material_id];
            if material.is_emissive() {
                path.throughput *= material.color * material.emittance;
                path.terminate();
                return Some((path.pixel_index, path.throughput));
            }

            let unbiased = path.ray.point(isect.t);
            let hit = HitPoint {
                biased: path.ray.point(isect.t - HIT_BIAS),
                unbiased,
                normal: isect.normal,
                outside: isect.outside,
            };
            // Jitter draws from depth 0 of this pixel, bounces from depth + 1 to stay independent of it
            let mut rng = seeded_engine(iteration, path.pixel_index as u32, depth + 1);
            scatter.scatter(path, &hit, material, &mut rng);

            if path.is_active() {
                None
            } else {
                Some((path.pixel_index, path.throughput))
            }
        })
        .collect()
}

/// Moves the paths that still have bounces left to the front and returns their count.
///
/// Relative order of the surviving paths is not preserved.
pub fn compact(paths: &mut [PathState]) -> usize {
    itertools::partition(paths.iter_mut(), |p| p.is_active())
}

/// Returns the contributions of the paths that survived to the depth limit.
pub fn final_gather(paths: &[PathState]) -> Vec<Deposit> {
    paths
        .par_iter()
        .map(|p| (p.pixel_index, p.throughput))
        .collect()
}
