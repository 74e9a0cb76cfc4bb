use chrono::{Datelike, Timelike};
use image::{ImageFormat, RgbImage};

use std::path::{Path, PathBuf};

use crate::{
    math::{Spectrum, Vec2},
    hikari_info,
};

/// Returns a timestamped path for output `kind` of `scene_name` in `dir`.
pub fn output_path(dir: &Path, scene_name: &str, kind: &str, extension: &str) -> PathBuf {
    let now = chrono::Local::now();
    let timestamp = format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    dir.join(format!("{}_{}_{}.{}", scene_name, kind, timestamp, extension))
}

pub fn write_png(image: &RgbImage, path: &Path) -> Result<(), String> {
    hikari_info!("Writing out PNG");
    match image.save_with_format(path, ImageFormat::Png) {
        Ok(()) => {
            hikari_info!("PNG written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing PNG to '{}': {}",
            path.to_string_lossy(),
            why
        )),
    }
}

/// Writes the average of the `accumulated` sum of `iterations` iterations.
pub fn write_exr(
    accumulated: &[Spectrum<f32>],
    res: Vec2<u32>,
    iterations: u32,
    path: &Path,
) -> Result<(), String> {
    hikari_info!("Writing out EXR");
    let width = res.x as usize;
    let scale = 1.0 / (iterations.max(1) as f32);
    match exr::prelude::write_rgb_file(path, width, res.y as usize, |x, y| {
        let px = accumulated[y * width + (width - 1 - x)] * scale;
        (px.r, px.g, px.b)
    }) {
        Ok(_) => {
            hikari_info!("EXR written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing EXR to '{}': {:?}",
            path.to_string_lossy(),
            why
        )),
    }
}
