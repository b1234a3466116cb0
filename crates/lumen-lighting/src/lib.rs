pub mod light;
pub mod setup;

pub use light::{LightInfo, LightPositionModel, LightSetup};
pub use setup::{LightSetupRegistry, DEFAULT_LIGHTING_KEY, NO_LIGHT_KEY};
