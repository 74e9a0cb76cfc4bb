pub mod stages;

use stages::{
    capture_gbuffer, clear_intersections, compact, compute_intersections, final_gather,
    generate_camera_rays, shade, Deposit,
};

use std::time::Instant;

use crate::{
    accel::{Accelerator, LinearScan},
    camera::Camera,
    denoise::{DenoiseSettings, Denoiser},
    error::{RenderError, Result},
    film::{try_alloc, Film},
    gbuffer::GBufferPixel,
    materials::{BsdfScatter, Material, ScatterFunction},
    math::{Spectrum, Vec2},
    path::{Intersection, PathState},
    sampling::{generate_jitter, MAX_ITERATION},
    scene::Scene,
    hikari_debug, hikari_info, hikari_trace,
};

/// Diagnostics of a single rendered iteration.
#[derive(Clone, Debug, Default)]
pub struct RenderStats {
    /// Number of bounces the loop ran
    pub bounces: u32,
    /// Active batch size after the compaction of each bounce
    pub active_paths: Vec<usize>,
    /// Rays intersected with the scene
    pub ray_count: usize,
    /// Contributions made by paths that terminated while shading
    pub shading_deposits: usize,
    /// Contributions made by paths that reached the depth limit
    pub final_gather_deposits: usize,
    pub secs: f32,
}

// Per-run buffers, sized by the camera
struct Buffers {
    jitter: Vec<Vec2<f32>>,
    paths: Vec<PathState>,
    intersections: Vec<Intersection>,
    gbuffer: Vec<GBufferPixel>,
    film: Film,
    denoiser: Denoiser,
    output: Vec<Spectrum<f32>>,
}

impl Buffers {
    fn new(res: Vec2<u32>) -> Result<Self> {
        let pixel_count = (res.x as usize) * (res.y as usize);
        hikari_debug!(
            "Allocating buffers for {}x{} ({} pixels)",
            res.x,
            res.y,
            pixel_count
        );
        Ok(Self {
            jitter: try_alloc("jitter", pixel_count, Vec2::zeros())?,
            paths: try_alloc("paths", pixel_count, PathState::default())?,
            intersections: try_alloc("intersections", pixel_count, Intersection::MISS)?,
            gbuffer: try_alloc("gbuffer", pixel_count, GBufferPixel::default())?,
            film: Film::new(res)?,
            denoiser: Denoiser::new(res)?,
            output: try_alloc("output", pixel_count, Spectrum::zeros())?,
        })
    }
}

/// Owns everything needed to render iterations of a [Scene].
///
/// Buffers are allocated on creation and released on [RenderContext::release] or drop.
pub struct RenderContext {
    name: String,
    camera: Camera,
    trace_depth: u32,
    materials: Vec<Material>,
    accel: Box<dyn Accelerator>,
    scatter: Box<dyn ScatterFunction>,
    buffers: Option<Buffers>,
}

impl RenderContext {
    /// Creates a new `RenderContext` that scatters with [BsdfScatter].
    pub fn new(scene: &Scene) -> Result<Self> {
        Self::with_scatter(scene, Box::new(BsdfScatter))
    }

    /// Creates a new `RenderContext` that scatters with `scatter`.
    pub fn with_scatter(scene: &Scene, scatter: Box<dyn ScatterFunction>) -> Result<Self> {
        scene.validate()?;

        let camera = Camera::new(scene.camera);
        let buffers = Buffers::new(camera.resolution)?;

        hikari_info!("{}: Render context ready", scene.name);

        Ok(Self {
            name: scene.name.clone(),
            camera,
            trace_depth: scene.trace_depth,
            materials: scene.materials.clone(),
            accel: Box::new(LinearScan::new(scene.primitives.clone())),
            scatter,
            buffers: Some(buffers),
        })
    }

    /// Returns the [Camera] rays are generated from.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns `true` if the buffers have been released.
    pub fn is_released(&self) -> bool {
        self.buffers.is_none()
    }

    /// Frees all buffers. Calling this on a released context does nothing.
    pub fn release(&mut self) {
        if let Some(mut buffers) = self.buffers.take() {
            hikari_debug!("{}: Releasing render buffers", self.name);
            buffers.film.release();
            buffers.denoiser.release();
        }
    }

    /// Returns the accumulated, unnormalized radiance.
    pub fn film(&self) -> Result<&Film> {
        Ok(&self.buffers()?.film)
    }

    /// Returns the number of iterations accumulated so far.
    pub fn iterations(&self) -> Result<u32> {
        Ok(self.buffers()?.film.iterations())
    }

    /// Returns the first-hit geometry of the latest iteration.
    pub fn gbuffer(&self) -> Result<&[GBufferPixel]> {
        Ok(&self.buffers()?.gbuffer)
    }

    /// Returns the image produced by the latest [RenderContext::render] call.
    pub fn output(&self) -> Result<&[Spectrum<f32>]> {
        Ok(&self.buffers()?.output)
    }

    fn buffers(&self) -> Result<&Buffers> {
        self.buffers.as_ref().ok_or(RenderError::Released)
    }

    /// Renders one iteration into the accumulation film and updates the output image,
    /// denoised if `denoise.enabled` is set.
    ///
    /// `frame` is only used for diagnostics. `iteration` selects the random streams, so the
    /// same value always reproduces the same contribution.
    pub fn render(
        &mut self,
        frame: u32,
        iteration: u32,
        denoise: &DenoiseSettings,
    ) -> Result<RenderStats> {
        let buffers = self.buffers.as_mut().ok_or(RenderError::Released)?;
        if iteration > MAX_ITERATION {
            return Err(RenderError::LaunchConfig(format!(
                "Iteration {} is over the maximum of {}",
                iteration, MAX_ITERATION
            )));
        }
        let start = Instant::now();
        let pixel_count = self.camera.pixel_count();

        hikari_trace!("{}: Frame {} begins iteration {}", self.name, frame, iteration);
        buffers.film.begin_iteration();

        generate_jitter(iteration, &mut buffers.jitter);
        generate_camera_rays(
            &self.camera,
            &buffers.jitter,
            self.trace_depth,
            &mut buffers.paths,
        );

        // Contributions land on the film only once the whole iteration succeeded
        let mut pending: Vec<Deposit> = Vec::new();
        let mut stats = RenderStats::default();
        let mut active = pixel_count;
        let mut depth = 0;
        while active > 0 && depth < self.trace_depth {
            hikari_trace!(
                "Iteration {}: Bounce {} with {} active paths",
                iteration,
                depth,
                active
            );

            clear_intersections(&mut buffers.intersections);
            compute_intersections(
                self.accel.as_ref(),
                &buffers.paths[..active],
                &mut buffers.intersections[..active],
            );
            stats.ray_count += active;

            if depth == 0 {
                capture_gbuffer(
                    &buffers.paths[..active],
                    &buffers.intersections[..active],
                    &mut buffers.gbuffer,
                );
            }

            let deposits = shade(
                iteration,
                depth,
                &mut buffers.paths[..active],
                &buffers.intersections[..active],
                &self.materials,
                self.scatter.as_ref(),
            );
            stats.shading_deposits += deposits.len();
            check_deposits("shade", &deposits)?;
            pending.extend(deposits);

            let survivors = compact(&mut buffers.paths[..active]);
            debug_assert!(survivors <= active);
            active = survivors;
            stats.active_paths.push(active);
            depth += 1;
        }

        let deposits = final_gather(&buffers.paths[..active]);
        stats.final_gather_deposits = deposits.len();
        check_deposits("final gather", &deposits)?;
        pending.extend(deposits);

        for (pixel_index, radiance) in pending {
            buffers.film.deposit(pixel_index, radiance);
        }
        buffers.film.end_iteration();
        stats.bounces = depth;

        if denoise.enabled {
            // Color weights expect averaged radiance, not sums
            let iterations = buffers.film.iterations() as f32;
            for (out, &sum) in buffers.output.iter_mut().zip(buffers.film.pixels()) {
                *out = sum / iterations;
            }
            let filtered = buffers
                .denoiser
                .filter(&buffers.output, &buffers.gbuffer, denoise);
            for (out, &average) in buffers.output.iter_mut().zip(filtered) {
                *out = average * iterations;
            }
        } else {
            buffers.output.copy_from_slice(buffers.film.pixels());
        }

        stats.secs = start.elapsed().as_secs_f32();
        hikari_trace!(
            "Iteration {}: {} bounces, {} rays in {:.3}s",
            iteration,
            stats.bounces,
            stats.ray_count,
            stats.secs
        );

        Ok(stats)
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        self.release();
    }
}

fn check_deposits(stage: &'static str, deposits: &[Deposit]) -> Result<()> {
    match deposits.iter().find(|(_, radiance)| !radiance.is_finite()) {
        Some((pixel_index, radiance)) => Err(RenderError::Stage {
            stage,
            reason: format!("Non-finite radiance {:?} for pixel {}", radiance, pixel_index),
        }),
        None => Ok(()),
    }
}
