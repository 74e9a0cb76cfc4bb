use crate::math::{Spectrum, Vec3};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

/// First-hit geometry of a pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GBufferPixel {
    /// World space position, zero on a miss
    pub position: Vec3<f32>,
    /// World space normal, zero on a miss
    pub normal: Vec3<f32>,
}

/// Which G-buffer channel to visualize.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumString, EnumVariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GBufferView {
    #[default]
    Normals,
    Positions,
}

// Maps scene units so that the built-in scenes span most of the displayable range
const POSITION_SCALE: f32 = 0.1;

impl GBufferView {
    /// Returns the display color of `pixel`, nominally in [0,1].
    pub fn visualize(&self, pixel: &GBufferPixel) -> Spectrum<f32> {
        let v = match self {
            GBufferView::Normals => pixel.normal.abs(),
            GBufferView::Positions => pixel.position.abs() * POSITION_SCALE,
        };
        Spectrum::new(v.x, v.y, v.z)
    }
}
