mod common;
mod matrix;
mod ray;
mod spectrum;
mod transform;
pub mod transforms;
mod vector;

pub use common::{FloatValueType, ValueType};
pub use matrix::Matrix4x4;
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use transform::Transform;
pub use vector::{vec2, vec3, Vec2, Vec3};
