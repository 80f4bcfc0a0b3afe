//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BakeryPaths;
pub use settings::Settings;
