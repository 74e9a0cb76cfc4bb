#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use hikari::{
        camera::CameraParameters,
        error::RenderError,
        materials::{BsdfScatter, Material, ScatterFunction},
        math::{transforms::translation, Ray, Spectrum, Vec2, Vec3},
        path::{HitPoint, PathState},
        sampling::{seeded_engine, MAX_TRACE_DEPTH},
        scene::{BuiltinScene, Scene},
        shapes::{Primitive, Shape, Sphere},
    };

    fn ball(material_id: usize) -> Primitive {
        Primitive::new(
            Shape::Sphere(Sphere::new(&translation(Vec3::new(0.0, 0.0, -3.0)))),
            material_id,
        )
    }

    #[test]
    fn builtins_are_valid() {
        let res = Vec2::new(32, 24);
        for builtin in [
            BuiltinScene::Cornell,
            BuiltinScene::EmissiveSphere,
            BuiltinScene::Empty,
        ] {
            let scene = Scene::builtin(builtin, res);
            assert!(scene.validate().is_ok());
            assert_eq!(scene.camera.resolution, res);
            assert_eq!(scene.name, builtin.to_string());
        }
    }

    #[test]
    fn cornell_contents() {
        let scene = Scene::cornell(Vec2::new(8, 8));
        assert_eq!(scene.materials.len(), 6);
        assert_eq!(scene.primitives.len(), 9);
        assert_eq!(scene.trace_depth, 8);
        assert_eq!(
            scene.materials.iter().filter(|m| m.is_emissive()).count(),
            1
        );
    }

    #[test]
    fn builtin_names() {
        assert_eq!(BuiltinScene::default(), BuiltinScene::Cornell);
        assert_eq!(
            BuiltinScene::from_str("emissive-sphere").unwrap(),
            BuiltinScene::EmissiveSphere
        );
        assert_eq!(BuiltinScene::Empty.to_string(), "empty");
        assert!(BuiltinScene::from_str("teapot").is_err());
    }

    #[test]
    fn missing_material() {
        let result = Scene::new(
            "broken",
            vec![ball(0), ball(2)],
            vec![Material::diffuse(Spectrum::ones())],
            CameraParameters::default(),
            4,
        );
        assert!(matches!(
            result,
            Err(RenderError::MissingMaterial {
                primitive: 1,
                material: 2,
                material_count: 1
            })
        ));
    }

    #[test]
    fn launch_config() {
        let zero_res = CameraParameters {
            resolution: Vec2::new(16, 0),
            ..CameraParameters::default()
        };
        assert!(matches!(
            Scene::new("zero", Vec::new(), Vec::new(), zero_res, 4),
            Err(RenderError::LaunchConfig(_))
        ));
        assert!(matches!(
            Scene::new("shallow", Vec::new(), Vec::new(), CameraParameters::default(), 0),
            Err(RenderError::LaunchConfig(_))
        ));
        assert!(matches!(
            Scene::new(
                "deep",
                Vec::new(),
                Vec::new(),
                CameraParameters::default(),
                MAX_TRACE_DEPTH + 1
            ),
            Err(RenderError::LaunchConfig(_))
        ));
        assert!(Scene::new(
            "deepest",
            Vec::new(),
            Vec::new(),
            CameraParameters::default(),
            MAX_TRACE_DEPTH
        )
        .is_ok());
    }

    #[test]
    fn materials() {
        let light = Material::emissive(Spectrum::new(1.0, 0.5, 0.25), 2.0);
        assert!(light.is_emissive());
        assert!(!Material::diffuse(Spectrum::ones()).is_emissive());
        assert_eq!(Material::mirror(Spectrum::ones()).reflective, 1.0);
        let glass = Material::glass(Spectrum::ones(), 1.5);
        assert_eq!(glass.refractive, 1.0);
        assert_eq!(glass.ior, 1.5);
    }

    #[test]
    fn mirror_tints_with_specular_color() {
        let tint = Spectrum::new(0.5, 0.25, 1.0);
        let mirror = Material {
            color: Spectrum::zeros(),
            ..Material::mirror(tint)
        };
        let mut path = PathState::new(
            Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0)),
            0,
            3,
        );
        let hit = HitPoint {
            biased: Vec3::new(0.0, 0.0, 4.999),
            unbiased: Vec3::new(0.0, 0.0, 5.0),
            normal: Vec3::new(0.0, 0.0, -1.0),
            outside: true,
        };
        let mut rng = seeded_engine(0, 0, 1);
        BsdfScatter.scatter(&mut path, &hit, &mirror, &mut rng);

        assert_eq!(path.throughput, tint);
        assert_eq!(path.ray.o, hit.biased);
        assert_eq!(path.ray.d, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(path.remaining_bounces, 2);
    }
}
