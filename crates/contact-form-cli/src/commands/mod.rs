pub mod render;
pub mod replay;

use anyhow::Result;
use contact_form::Config;
use std::path::Path;

/// Load the config file given on the command line, or ./contact-form.toml
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
}
