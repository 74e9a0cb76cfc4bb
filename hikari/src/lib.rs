pub mod accel;
pub mod app;
pub mod camera;
pub mod denoise;
pub mod error;
pub mod film;
pub mod gbuffer;
mod macros;
pub mod materials;
pub mod math;
pub mod path;
pub mod renderer;
pub mod sampling;
pub mod scene;
pub mod shapes;

// Used by the logging macros
#[doc(hidden)]
pub use log;
