use super::{
    tonemap::{film_image, gbuffer_image},
    util::{output_path, write_exr, write_png},
    RenderSettings,
};
use crate::{
    denoise::DenoiseSettings,
    renderer::RenderContext,
    scene::Scene,
    hikari_debug, hikari_info,
};

use std::{path::PathBuf, time::Instant};

/// Files written by a headless render.
#[derive(Clone, Debug, Default)]
pub struct RenderOutputs {
    pub image: PathBuf,
    pub gbuffer: Option<PathBuf>,
    pub exr: Option<PathBuf>,
    pub secs: f32,
}

/// Renders `settings.iterations` iterations of the configured scene and writes the results.
///
/// Only the final iteration is denoised.
pub fn render(settings: &RenderSettings) -> Result<RenderOutputs, String> {
    if settings.iterations == 0 {
        return Err("Iteration count must be non-zero".into());
    }

    let mut scene = Scene::builtin(settings.scene, settings.resolution());
    if let Some(depth) = settings.trace_depth {
        hikari_debug!("Overriding trace depth {} with {}", scene.trace_depth, depth);
        scene.trace_depth = depth;
    }

    let mut context = RenderContext::new(&scene).map_err(|why| why.to_string())?;

    let start = Instant::now();
    let intermediate = DenoiseSettings {
        enabled: false,
        ..settings.denoise
    };
    for i in 0..settings.iterations {
        let last = i + 1 == settings.iterations;
        let denoise = if last {
            &settings.denoise
        } else {
            &intermediate
        };
        let stats = context
            .render(i, i, denoise)
            .map_err(|why| why.to_string())?;
        hikari_debug!(
            "Iteration {} took {:.3}s, active paths per bounce {:?}",
            i,
            stats.secs,
            stats.active_paths
        );
    }
    let secs = start.elapsed().as_secs_f32();
    hikari_info!(
        "{}: {} iterations took {:.2}s",
        scene.name,
        settings.iterations,
        secs
    );

    let res = context.camera().resolution;
    let iterations = context.iterations().map_err(|why| why.to_string())?;
    let output = context.output().map_err(|why| why.to_string())?;

    let kind = if settings.denoise.enabled {
        "denoised"
    } else {
        "render"
    };
    let image = output_path(&settings.output_dir, &scene.name, kind, "png");
    write_png(&film_image(output, res, iterations), &image)?;

    let gbuffer = match settings.gbuffer_view {
        Some(view) => {
            let path = output_path(&settings.output_dir, &scene.name, "gbuffer", "png");
            let pixels = context.gbuffer().map_err(|why| why.to_string())?;
            write_png(&gbuffer_image(pixels, res, view), &path)?;
            Some(path)
        }
        None => None,
    };

    let exr = if settings.write_exr {
        let path = output_path(&settings.output_dir, &scene.name, "render", "exr");
        let film = context.film().map_err(|why| why.to_string())?;
        write_exr(film.pixels(), res, iterations, &path)?;
        Some(path)
    } else {
        None
    };

    context.release();

    Ok(RenderOutputs {
        image,
        gbuffer,
        exr,
        secs,
    })
}
