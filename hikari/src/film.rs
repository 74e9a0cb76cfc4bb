use crate::{
    error::{RenderError, Result},
    math::{Spectrum, Vec2},
};

/// Allocates a buffer of `len` copies of `value`, reporting failures with the buffer's name.
pub fn try_alloc<T: Clone>(buffer: &'static str, len: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|source| RenderError::Allocation {
            buffer,
            len,
            source,
        })?;
    v.resize(len, value);
    Ok(v)
}

/// Running sum of radiance over all rendered iterations.
///
/// Never cleared between iterations: normalize by [Film::iterations] when displaying.
pub struct Film {
    // Resolution of the stored pixel buffer.
    res: Vec2<u32>,
    // Summed pixel values in row-major order.
    pixels: Vec<Spectrum<f32>>,
    // Number of iterations summed into the pixels.
    iterations: u32,
    // Pixels written in the current iteration. Used to catch double deposits.
    #[cfg(debug_assertions)]
    deposited: Vec<bool>,
}

impl Film {
    /// Creates a new black `Film`.
    pub fn new(res: Vec2<u32>) -> Result<Self> {
        let pixel_count = (res.x as usize) * (res.y as usize);
        Ok(Self {
            res,
            pixels: try_alloc("accumulation", pixel_count, Spectrum::zeros())?,
            iterations: 0,
            #[cfg(debug_assertions)]
            deposited: try_alloc("deposit markers", pixel_count, false)?,
        })
    }

    /// Returns the resolution of this `Film`.
    pub fn res(&self) -> Vec2<u32> {
        self.res
    }

    /// Returns the summed pixels in row-major order.
    pub fn pixels(&self) -> &[Spectrum<f32>] {
        &self.pixels
    }

    /// Returns the number of iterations summed into this `Film`.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Marks the start of a new iteration.
    pub fn begin_iteration(&mut self) {
        #[cfg(debug_assertions)]
        self.deposited.iter_mut().for_each(|d| *d = false);
    }

    /// Marks the end of the current iteration.
    pub fn end_iteration(&mut self) {
        self.iterations += 1;
    }

    /// Adds `radiance` to pixel `pixel_index`.
    ///
    /// A pixel is written at most once per iteration.
    #[inline]
    pub fn deposit(&mut self, pixel_index: usize, radiance: Spectrum<f32>) {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.deposited[pixel_index],
                "Pixel {} deposited twice in one iteration",
                pixel_index
            );
            self.deposited[pixel_index] = true;
        }
        self.pixels[pixel_index] += radiance;
    }

    /// Frees the pixel storage.
    pub fn release(&mut self) {
        self.pixels = Vec::new();
        #[cfg(debug_assertions)]
        {
            self.deposited = Vec::new();
        }
    }
}
