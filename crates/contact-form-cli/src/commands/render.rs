use anyhow::Result;
use contact_form::{render, ContactForm};
use std::path::Path;

use super::load_config;

/// Print the markup of an untouched form
pub fn execute(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let form = ContactForm::with_validator(config.rules());

    println!("{}", render(&form, &config.view_options()).into_string());

    Ok(())
}
