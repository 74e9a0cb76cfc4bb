use std::collections::TryReserveError;
use thiserror::Error;

/// Errors surfaced by the rendering core. All of them are fatal for the current run.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to allocate {len} elements for buffer '{buffer}'")]
    Allocation {
        buffer: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("Invalid launch configuration: {0}")]
    LaunchConfig(String),
    #[error("Primitive {primitive} references material {material} but the scene only has {material_count}")]
    MissingMaterial {
        primitive: usize,
        material: usize,
        material_count: usize,
    },
    #[error("Stage '{stage}' failed: {reason}")]
    Stage { stage: &'static str, reason: String },
    #[error("Render context buffers have been released")]
    Released,
}

pub type Result<T> = std::result::Result<T, RenderError>;
