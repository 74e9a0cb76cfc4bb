mod scatter;

pub use scatter::BsdfScatter;

use crate::{
    math::Spectrum,
    path::{HitPoint, PathState},
};

use rand_pcg::Pcg32;

/// Surface description shared by every primitive that references it.
#[derive(Copy, Clone, Debug)]
pub struct Material {
    /// Diffuse albedo, also the emitted color for lights
    pub color: Spectrum<f32>,
    pub specular_color: Spectrum<f32>,
    /// Probability of an ideal mirror bounce
    pub reflective: f32,
    /// Probability of a dielectric bounce
    pub refractive: f32,
    /// Index of refraction
    pub ior: f32,
    pub emittance: f32,
}

impl Material {
    /// Creates a purely diffuse `Material`.
    pub fn diffuse(color: Spectrum<f32>) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Creates a light with the given color and strength.
    pub fn emissive(color: Spectrum<f32>, emittance: f32) -> Self {
        Self {
            color,
            emittance,
            ..Self::default()
        }
    }

    /// Creates an ideal mirror.
    pub fn mirror(specular_color: Spectrum<f32>) -> Self {
        Self {
            specular_color,
            reflective: 1.0,
            ..Self::default()
        }
    }

    /// Creates a clear dielectric with index of refraction `ior`.
    pub fn glass(specular_color: Spectrum<f32>, ior: f32) -> Self {
        Self {
            specular_color,
            refractive: 1.0,
            ior,
            ..Self::default()
        }
    }

    /// Returns `true` if hitting this `Material` ends a path at a light.
    #[inline]
    pub fn is_emissive(&self) -> bool {
        self.emittance > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Spectrum::ones(),
            specular_color: Spectrum::ones(),
            reflective: 0.0,
            refractive: 0.0,
            ior: 1.0,
            emittance: 0.0,
        }
    }
}

/// Turns a surface hit into the continuation of a path.
pub trait ScatterFunction: Send + Sync {
    /// Updates the ray and throughput of `path` for a bounce at `hit` on `material`.
    ///
    /// Implementations consume one bounce of the path's budget and may end the path by
    /// setting its remaining bounces to zero.
    fn scatter(&self, path: &mut PathState, hit: &HitPoint, material: &Material, rng: &mut Pcg32);
}
