use crate::{
    error::Result,
    film::try_alloc,
    gbuffer::GBufferPixel,
    math::{Spectrum, Vec2, Vec3},
    hikari_trace,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// Based on Dammertz et al. 2010, "Edge-Avoiding À-Trous Wavelet Transform for fast Global
// Illumination Filtering"

/// Settings for the edge-avoiding À-Trous filter.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DenoiseSettings {
    pub enabled: bool,
    /// Number of filter rounds, tap spacing doubles on each round
    pub filter_passes: u32,
    /// Use the color, normal and position edge-stopping functions
    pub weighted: bool,
    /// Color bandwidth
    pub c_phi: f32,
    /// Normal bandwidth
    pub n_phi: f32,
    /// Position bandwidth
    pub p_phi: f32,
}

impl Default for DenoiseSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            filter_passes: 5,
            weighted: true,
            c_phi: 0.45,
            n_phi: 0.35,
            p_phi: 0.2,
        }
    }
}

const KERNEL_1D: [f32; 5] = [1.0 / 16.0, 1.0 / 4.0, 3.0 / 8.0, 1.0 / 4.0, 1.0 / 16.0];

/// Weights of the 5x5 B3 spline kernel, row-major to match [TAP_OFFSETS].
pub const KERNEL: [f32; 25] = kernel();

/// Pixel offsets of the 25 taps before dilation.
pub const TAP_OFFSETS: [(i32, i32); 25] = tap_offsets();

const fn kernel() -> [f32; 25] {
    let mut k = [0.0; 25];
    let mut i = 0;
    while i < 25 {
        k[i] = KERNEL_1D[i / 5] * KERNEL_1D[i % 5];
        i += 1;
    }
    k
}

const fn tap_offsets() -> [(i32, i32); 25] {
    let mut o = [(0, 0); 25];
    let mut i = 0;
    while i < 25 {
        o[i] = ((i % 5) as i32 - 2, (i / 5) as i32 - 2);
        i += 1;
    }
    o
}

// Step widths past this are wider than any image we render
const MAX_STEP_SHIFT: u32 = 24;

/// Multi-pass edge-avoiding blur with two ping-pong buffers.
pub struct Denoiser {
    res: Vec2<u32>,
    front: Vec<Spectrum<f32>>,
    back: Vec<Spectrum<f32>>,
}

impl Denoiser {
    /// Creates a new `Denoiser` for images of `res`.
    pub fn new(res: Vec2<u32>) -> Result<Self> {
        let pixel_count = (res.x as usize) * (res.y as usize);
        Ok(Self {
            res,
            front: try_alloc("denoise front", pixel_count, Spectrum::zeros())?,
            back: try_alloc("denoise back", pixel_count, Spectrum::zeros())?,
        })
    }

    /// Filters `input` with `settings.filter_passes` rounds and returns the result.
    ///
    /// Zero passes returns an unfiltered copy of `input`.
    pub fn filter(
        &mut self,
        input: &[Spectrum<f32>],
        gbuffer: &[GBufferPixel],
        settings: &DenoiseSettings,
    ) -> &[Spectrum<f32>] {
        assert_eq!(input.len(), self.front.len());
        assert_eq!(gbuffer.len(), self.front.len());

        self.front.copy_from_slice(input);
        let edge_stopping = if settings.weighted {
            Some(EdgeStopping {
                c_phi: settings.c_phi,
                n_phi: settings.n_phi,
                p_phi: settings.p_phi,
            })
        } else {
            None
        };

        for pass in 0..settings.filter_passes {
            let step = 1 << pass.min(MAX_STEP_SHIFT);
            hikari_trace!("Denoise pass {} with step {}", pass, step);
            atrous_pass(
                &self.front,
                &mut self.back,
                gbuffer,
                self.res,
                step,
                edge_stopping.as_ref(),
            );
            std::mem::swap(&mut self.front, &mut self.back);
        }

        &self.front
    }

    /// Frees the ping-pong buffers.
    pub fn release(&mut self) {
        self.front = Vec::new();
        self.back = Vec::new();
    }
}

/// Bandwidths of the edge-stopping functions.
#[derive(Copy, Clone, Debug)]
pub struct EdgeStopping {
    pub c_phi: f32,
    pub n_phi: f32,
    pub p_phi: f32,
}

/// Runs one filter round with taps spaced `step` pixels apart from `input` into `output`.
///
/// Without `edge_stopping` only the kernel weights are used. Taps outside the image are dropped
/// and the remaining weights renormalized.
pub fn atrous_pass(
    input: &[Spectrum<f32>],
    output: &mut [Spectrum<f32>],
    gbuffer: &[GBufferPixel],
    res: Vec2<u32>,
    step: i32,
    edge_stopping: Option<&EdgeStopping>,
) {
    let width = res.x as i32;
    let height = res.y as i32;

    output
        .par_chunks_mut(res.x as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as i32;
            for (x, out) in row.iter_mut().enumerate() {
                let x = x as i32;
                let center_index = (y * width + x) as usize;
                let center_color = input[center_index];
                let center_geometry = &gbuffer[center_index];

                let mut sum = Spectrum::zeros();
                let mut weight_sum = 0.0;
                for (&(dx, dy), &k) in TAP_OFFSETS.iter().zip(KERNEL.iter()) {
                    let tx = x + dx * step;
                    let ty = y + dy * step;
                    if tx < 0 || tx >= width || ty < 0 || ty >= height {
                        continue;
                    }
                    let tap_index = (ty * width + tx) as usize;
                    let tap_color = input[tap_index];

                    let w = match edge_stopping {
                        Some(e) => {
                            let tap_geometry = &gbuffer[tap_index];
                            let cw = edge_weight(color_dist_sqr(center_color, tap_color), e.c_phi);
                            let nw = edge_weight(
                                dist_sqr(center_geometry.normal, tap_geometry.normal),
                                e.n_phi,
                            );
                            let pw = edge_weight(
                                dist_sqr(center_geometry.position, tap_geometry.position),
                                e.p_phi,
                            );
                            k * cw * nw * pw
                        }
                        None => k,
                    };

                    sum += tap_color * w;
                    weight_sum += w;
                }

                *out = if weight_sum > 0.0 {
                    sum / weight_sum
                } else {
                    center_color
                };
            }
        });
}

/// Gaussian similarity `min(exp(-dist_sqr / phi), 1)`.
///
/// A non-positive bandwidth only accepts exact matches.
#[inline]
pub fn edge_weight(dist_sqr: f32, phi: f32) -> f32 {
    if phi > 0.0 {
        (-dist_sqr / phi).exp().min(1.0)
    } else if dist_sqr == 0.0 {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn dist_sqr(a: Vec3<f32>, b: Vec3<f32>) -> f32 {
    (a - b).len_sqr()
}

#[inline]
fn color_dist_sqr(a: Spectrum<f32>, b: Spectrum<f32>) -> f32 {
    let d = a - b;
    d.r * d.r + d.g * d.g + d.b * d.b
}
