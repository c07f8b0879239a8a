//! Configuration module — project-level settings from `.passkeep.toml`.

pub mod settings;

pub use settings::Settings;
