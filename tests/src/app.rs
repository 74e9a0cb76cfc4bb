#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use image::Rgb;

    use hikari::{
        app::{
            headless,
            tonemap::{film_image, gbuffer_image, to_rgb8},
            util::output_path,
            RenderSettings,
        },
        denoise::DenoiseSettings,
        gbuffer::{GBufferPixel, GBufferView},
        math::{Spectrum, Vec2, Vec3},
        scene::BuiltinScene,
    };

    #[test]
    fn tonemap_averages_and_clamps() {
        assert_eq!(to_rgb8(Spectrum::new(4.0, 2.0, 0.0), 4), [255, 127, 0]);
        assert_eq!(to_rgb8(Spectrum::new(8.0, -1.0, 1.0), 2), [255, 0, 127]);
        // No iterations yet is treated as one
        assert_eq!(to_rgb8(Spectrum::new(0.5, 0.5, 0.5), 0), [127, 127, 127]);
    }

    #[test]
    fn film_image_flips_columns() {
        let pixels = vec![
            Spectrum::new(1.0, 0.0, 0.0),
            Spectrum::new(0.0, 1.0, 0.0),
            Spectrum::new(0.0, 0.0, 1.0),
            Spectrum::new(1.0, 1.0, 1.0),
        ];
        let image = film_image(&pixels, Vec2::new(2, 2), 1);
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(*image.get_pixel(0, 0), Rgb([0, 255, 0]));
        assert_eq!(*image.get_pixel(1, 0), Rgb([255, 0, 0]));
        assert_eq!(*image.get_pixel(0, 1), Rgb([255, 255, 255]));
        assert_eq!(*image.get_pixel(1, 1), Rgb([0, 0, 255]));
    }

    #[test]
    fn gbuffer_views() {
        let pixel = GBufferPixel {
            position: Vec3::new(-5.0, 10.0, 0.0),
            normal: Vec3::new(0.0, -1.0, 0.0),
        };
        assert_eq!(
            GBufferView::Normals.visualize(&pixel),
            Spectrum::new(0.0, 1.0, 0.0)
        );
        assert_abs_diff_eq!(
            GBufferView::Positions.visualize(&pixel),
            Spectrum::new(0.5, 1.0, 0.0),
            epsilon = 1e-6
        );

        let image = gbuffer_image(&[pixel], Vec2::new(1, 1), GBufferView::Normals);
        assert_eq!(*image.get_pixel(0, 0), Rgb([0, 255, 0]));
    }

    #[test]
    fn settings_defaults() {
        let settings = RenderSettings::from_yaml("{}").unwrap();
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(settings.scene, BuiltinScene::Cornell);
        assert_eq!(settings.denoise, DenoiseSettings::default());
        assert!(!settings.denoise.enabled);
    }

    #[test]
    fn settings_yaml() {
        let yaml = "
scene: emissive-sphere
width: 64
height: 32
iterations: 3
trace_depth: 2
gbuffer_view: positions
denoise:
  enabled: true
  filter_passes: 2
";
        let settings = RenderSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.scene, BuiltinScene::EmissiveSphere);
        assert_eq!(settings.resolution(), Vec2::new(64, 32));
        assert_eq!(settings.iterations, 3);
        assert_eq!(settings.trace_depth, Some(2));
        assert_eq!(settings.gbuffer_view, Some(GBufferView::Positions));
        assert!(settings.denoise.enabled);
        assert_eq!(settings.denoise.filter_passes, 2);
        // Unset fields keep their defaults
        assert_eq!(settings.denoise.c_phi, DenoiseSettings::default().c_phi);
        assert_eq!(settings.threads, None);

        assert!(RenderSettings::from_yaml("scene: teapot").is_err());
    }

    #[test]
    fn output_naming() {
        let path = output_path(std::path::Path::new("out"), "cornell", "render", "png");
        assert!(path.starts_with("out"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("cornell_render_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn headless_writes_outputs() {
        let dir = std::env::temp_dir().join(format!("hikari_headless_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let settings = RenderSettings {
            scene: BuiltinScene::EmissiveSphere,
            width: 8,
            height: 8,
            iterations: 2,
            output_dir: dir.clone(),
            gbuffer_view: Some(GBufferView::Normals),
            write_exr: true,
            denoise: DenoiseSettings {
                enabled: true,
                ..DenoiseSettings::default()
            },
            ..RenderSettings::default()
        };
        let outputs = headless::render(&settings).unwrap();

        assert!(outputs.image.exists());
        assert!(outputs.gbuffer.as_ref().unwrap().exists());
        assert!(outputs.exr.as_ref().unwrap().exists());

        // Every pixel sees the light once per iteration, filtering a flat image keeps it flat
        let image = image::open(&outputs.image).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (8, 8));
        assert!(image.pixels().all(|p| p.0.iter().all(|&c| c >= 254)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn headless_rejects_zero_iterations() {
        let settings = RenderSettings {
            iterations: 0,
            ..RenderSettings::default()
        };
        assert!(headless::render(&settings).is_err());
    }
}
