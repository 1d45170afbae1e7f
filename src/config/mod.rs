//! Configuration loaded from `<config_dir>/saltfile/config.toml`.

pub mod settings;

pub use settings::Settings;
