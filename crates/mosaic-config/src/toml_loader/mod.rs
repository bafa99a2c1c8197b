//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{from_toml_str, load_default, load_from_path};
pub use paths::{create_default_config, default_config_path};
