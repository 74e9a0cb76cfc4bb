pub mod headless;
mod settings;
pub mod tonemap;
pub mod util;

pub use settings::RenderSettings;
