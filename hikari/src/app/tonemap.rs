use crate::{
    gbuffer::{GBufferPixel, GBufferView},
    math::{Spectrum, Vec2},
};
use image::{Rgb, RgbImage};

/// Maps an accumulated pixel to 8-bit color by averaging over `iterations`.
///
/// Channels are clamped to [0,255], no gamma is applied.
pub fn to_rgb8(accumulated: Spectrum<f32>, iterations: u32) -> [u8; 3] {
    let scale = 255.0 / (iterations.max(1) as f32);
    let map = |v: f32| (v * scale).clamp(0.0, 255.0) as u8;
    [map(accumulated.r), map(accumulated.g), map(accumulated.b)]
}

// Pixel x of the camera grows towards -right so written images flip columns
fn source_index(res: Vec2<u32>, x: u32, y: u32) -> usize {
    (y as usize) * (res.x as usize) + (res.x - 1 - x) as usize
}

/// Returns the displayable image of the `accumulated` sum of `iterations` iterations.
pub fn film_image(accumulated: &[Spectrum<f32>], res: Vec2<u32>, iterations: u32) -> RgbImage {
    assert_eq!(accumulated.len(), (res.x as usize) * (res.y as usize));

    RgbImage::from_fn(res.x, res.y, |x, y| {
        Rgb(to_rgb8(accumulated[source_index(res, x, y)], iterations))
    })
}

/// Returns the `view` channel of `gbuffer` as an image.
pub fn gbuffer_image(gbuffer: &[GBufferPixel], res: Vec2<u32>, view: GBufferView) -> RgbImage {
    assert_eq!(gbuffer.len(), (res.x as usize) * (res.y as usize));

    RgbImage::from_fn(res.x, res.y, |x, y| {
        Rgb(to_rgb8(view.visualize(&gbuffer[source_index(res, x, y)]), 1))
    })
}
