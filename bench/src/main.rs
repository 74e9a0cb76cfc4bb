use std::io::prelude::*;
use std::time::Instant;

use hikari::{
    denoise::DenoiseSettings,
    math::Vec2,
    renderer::RenderContext,
    scene::{BuiltinScene, Scene},
};

const ITERATIONS: u32 = 32;
const RES: u32 = 400;

fn bench_render(scene: &Scene, denoise: &DenoiseSettings, label: &str) {
    let mut context = match RenderContext::new(scene) {
        Ok(context) => context,
        Err(why) => panic!("Failed to create render context: {}", why),
    };

    let mut rays = 0;
    let start = Instant::now();
    for i in 0..ITERATIONS {
        match context.render(i, i, denoise) {
            Ok(stats) => rays += stats.ray_count,
            Err(why) => panic!("Render failed: {}", why),
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ms_per_iteration = elapsed_ms / (ITERATIONS as f64);
    let mrays_per_s = (rays as f64) / ((elapsed_ns as f64) * 1e-9) * 1e-6;
    println!(
        "{:10} took {:6.1} ms total, {:6.2} ms per iteration, {:5.2} Mrays/s",
        label, elapsed_ms, ms_per_iteration, mrays_per_s
    );
}

fn main() {
    let scene = Scene::builtin(BuiltinScene::Cornell, Vec2::new(RES, RES));

    println!("Cornell {}x{}, {} iterations", RES, RES, ITERATIONS);
    bench_render(&scene, &DenoiseSettings::default(), "Raw");

    let denoise = DenoiseSettings {
        enabled: true,
        ..DenoiseSettings::default()
    };
    bench_render(&scene, &denoise, "Denoised");

    println!("Press enter to quit...");
    // Read a single byte and discard
    let _ = std::io::stdin().read(&mut [0u8]).unwrap();
}
