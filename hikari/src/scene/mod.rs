use crate::{
    camera::CameraParameters,
    error::{RenderError, Result},
    materials::Material,
    math::{transforms::placement, Spectrum, Vec2, Vec3},
    sampling::MAX_TRACE_DEPTH,
    shapes::{Cube, Primitive, Shape, Sphere},
    hikari_info,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use std::time::Instant;

/// Scenes that can be constructed without any input files.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BuiltinScene {
    #[default]
    Cornell,
    EmissiveSphere,
    Empty,
}

/// Everything the renderer needs to know about the world.
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub primitives: Vec<Primitive>,
    pub materials: Vec<Material>,
    pub camera: CameraParameters,
    /// Maximum number of bounces per path
    pub trace_depth: u32,
}

impl Scene {
    /// Creates a new `Scene`, checking that it can be rendered.
    pub fn new(
        name: &str,
        primitives: Vec<Primitive>,
        materials: Vec<Material>,
        camera: CameraParameters,
        trace_depth: u32,
    ) -> Result<Self> {
        let scene = Self {
            name: name.into(),
            primitives,
            materials,
            camera,
            trace_depth,
        };
        scene.validate()?;
        Ok(scene)
    }

    /// Checks material references, resolution and trace depth.
    pub fn validate(&self) -> Result<()> {
        for (i, p) in self.primitives.iter().enumerate() {
            if p.material_id >= self.materials.len() {
                return Err(RenderError::MissingMaterial {
                    primitive: i,
                    material: p.material_id,
                    material_count: self.materials.len(),
                });
            }
        }
        if self.camera.resolution.x == 0 || self.camera.resolution.y == 0 {
            return Err(RenderError::LaunchConfig(format!(
                "Zero sized resolution {}x{}",
                self.camera.resolution.x, self.camera.resolution.y
            )));
        }
        if self.trace_depth == 0 {
            return Err(RenderError::LaunchConfig("Trace depth must be non-zero".into()));
        }
        if self.trace_depth > MAX_TRACE_DEPTH {
            return Err(RenderError::LaunchConfig(format!(
                "Trace depth {} is over the maximum of {}",
                self.trace_depth, MAX_TRACE_DEPTH
            )));
        }
        Ok(())
    }

    /// Constructs the given built-in scene at `resolution`.
    pub fn builtin(scene: BuiltinScene, resolution: Vec2<u32>) -> Scene {
        let load_start = Instant::now();

        let scene = match scene {
            BuiltinScene::Cornell => Self::cornell(resolution),
            BuiltinScene::EmissiveSphere => Self::emissive_sphere(resolution, 1),
            BuiltinScene::Empty => Self::empty(resolution),
        };

        hikari_info!(
            "{}: Construction took {:.2}s",
            scene.name,
            load_start.elapsed().as_secs_f32()
        );

        scene
    }

    /// Constructs a Cornell box holding a diffuse sphere, a mirror sphere and a glass cube
    /// under an area light.
    pub fn cornell(resolution: Vec2<u32>) -> Scene {
        let materials = vec![
            // Light
            Material::emissive(Spectrum::ones(), 5.0),
            // White
            Material::diffuse(Spectrum::new(0.98, 0.98, 0.98)),
            // Red
            Material::diffuse(Spectrum::new(0.85, 0.35, 0.35)),
            // Green
            Material::diffuse(Spectrum::new(0.35, 0.85, 0.35)),
            // Mirror
            Material::mirror(Spectrum::new(0.98, 0.98, 0.98)),
            // Glass
            Material::glass(Spectrum::new(0.9, 0.95, 1.0), 1.5),
        ];

        let cube = |position, rotation, extent, material_id| {
            Primitive::new(
                Shape::Cube(Cube::new(&placement(position, rotation, extent))),
                material_id,
            )
        };
        let sphere = |position, diameter: f32, material_id| {
            Primitive::new(
                Shape::Sphere(Sphere::new(&placement(
                    position,
                    Vec3::zeros(),
                    Vec3::ones() * diameter,
                ))),
                material_id,
            )
        };

        let primitives = vec![
            // Ceiling light
            cube(Vec3::new(0.0, 10.0, 0.0), Vec3::zeros(), Vec3::new(3.0, 0.3, 3.0), 0),
            // Floor
            cube(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), Vec3::new(10.0, 0.01, 10.0), 1),
            // Ceiling
            cube(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 0.0, 90.0), Vec3::new(0.01, 10.0, 10.0), 1),
            // Back wall
            cube(Vec3::new(0.0, 5.0, -5.0), Vec3::new(0.0, 90.0, 0.0), Vec3::new(0.01, 10.0, 10.0), 1),
            // Left wall
            cube(Vec3::new(-5.0, 5.0, 0.0), Vec3::zeros(), Vec3::new(0.01, 10.0, 10.0), 2),
            // Right wall
            cube(Vec3::new(5.0, 5.0, 0.0), Vec3::zeros(), Vec3::new(0.01, 10.0, 10.0), 3),
            sphere(Vec3::new(-1.5, 2.0, -1.5), 4.0, 1),
            sphere(Vec3::new(2.5, 1.5, 1.0), 3.0, 4),
            cube(Vec3::new(2.0, 1.0, -2.5), Vec3::new(0.0, 30.0, 0.0), Vec3::new(2.0, 2.0, 2.0), 5),
        ];

        Scene {
            name: "cornell".into(),
            primitives,
            materials,
            camera: CameraParameters {
                resolution,
                position: Vec3::new(0.0, 5.0, 10.5),
                look_at: Vec3::new(0.0, 5.0, 0.0),
                up: Vec3::new(0.0, 1.0, 0.0),
                fov_y: 45.0,
            },
            trace_depth: 8,
        }
    }

    /// Constructs a single white light sphere enclosing the camera so that it fills the view.
    pub fn emissive_sphere(resolution: Vec2<u32>, trace_depth: u32) -> Scene {
        let light = Primitive::new(
            Shape::Sphere(Sphere::new(&placement(
                Vec3::zeros(),
                Vec3::zeros(),
                Vec3::ones() * 20.0,
            ))),
            0,
        );

        Scene {
            name: "emissive-sphere".into(),
            primitives: vec![light],
            materials: vec![Material::emissive(Spectrum::ones(), 1.0)],
            camera: CameraParameters {
                resolution,
                ..CameraParameters::default()
            },
            trace_depth,
        }
    }

    /// Constructs a scene without any primitives.
    pub fn empty(resolution: Vec2<u32>) -> Scene {
        Scene {
            name: "empty".into(),
            primitives: Vec::new(),
            materials: Vec::new(),
            camera: CameraParameters {
                resolution,
                ..CameraParameters::default()
            },
            trace_depth: 8,
        }
    }
}
