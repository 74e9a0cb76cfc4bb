use super::{Material, ScatterFunction};
use crate::{
    math::{Ray, Vec2, Vec3},
    path::{HitPoint, PathState},
    sampling::cosine_sample_hemisphere,
};

use rand::{distributions::Standard, Rng};
use rand_pcg::Pcg32;

/// Offset used to move spawned rays off the surface they left.
pub const RAY_EPSILON: f32 = 1e-3;

/// Stochastic mix of a diffuse, an ideal mirror and a dielectric lobe.
///
/// A lobe is picked with the probabilities given by the [Material] so the throughput is only
/// scaled by the color of the chosen lobe.
#[derive(Copy, Clone, Debug, Default)]
pub struct BsdfScatter;

impl ScatterFunction for BsdfScatter {
    fn scatter(&self, path: &mut PathState, hit: &HitPoint, material: &Material, rng: &mut Pcg32) {
        let d = path.ray.d;
        let n = hit.normal;

        let u: f32 = rng.sample(Standard);
        let (o, wi, tint) = if u < material.reflective {
            (hit.biased, reflect(d, n), material.specular_color)
        } else if u < material.reflective + material.refractive {
            let fresnel_u: f32 = rng.sample(Standard);
            let eta = if hit.outside {
                1.0 / material.ior
            } else {
                material.ior
            };
            match refract(d, n, eta) {
                Some(t) if fresnel_u >= schlick(-d.dot(n), material.ior) => {
                    // Transmitted rays continue on the far side of the surface
                    (hit.unbiased + t * RAY_EPSILON, t, material.specular_color)
                }
                _ => (hit.biased, reflect(d, n), material.specular_color),
            }
        } else {
            let u = Vec2::new(rng.sample(Standard), rng.sample(Standard));
            let wi = to_world(cosine_sample_hemisphere(u), n);
            (hit.biased, wi, material.color)
        };

        path.ray = Ray::new(o, wi.normalized());
        path.throughput *= tint;
        path.remaining_bounces = path.remaining_bounces.saturating_sub(1);
        if path.throughput.is_black() {
            path.terminate();
        }
    }
}

fn reflect(d: Vec3<f32>, n: Vec3<f32>) -> Vec3<f32> {
    d - n * (2.0 * d.dot(n))
}

/// Refracts `d` through a surface with normal `n` facing against it. `eta` is the ratio of the
/// incident and transmitted indices. Returns `None` on total internal reflection.
fn refract(d: Vec3<f32>, n: Vec3<f32>, eta: f32) -> Option<Vec3<f32>> {
    let cos_i = -d.dot(n);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        None
    } else {
        Some(d * eta + n * (eta * cos_i - k.sqrt()))
    }
}

// Schlick's approximation of the dielectric Fresnel reflectance
fn schlick(cos_i: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_i.clamp(0.0, 1.0)).powi(5)
}

// Rotates a +z hemisphere direction into the frame around `n`
fn to_world(v: Vec3<f32>, n: Vec3<f32>) -> Vec3<f32> {
    let helper = if n.x.abs() > 0.9 {
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        Vec3::new(1.0, 0.0, 0.0)
    };
    let tangent = helper.cross(n).normalized();
    let bitangent = n.cross(tangent);
    tangent * v.x + bitangent * v.y + n * v.z
}

