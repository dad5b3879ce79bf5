use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::{
    config::{CONFIG_FILE_NAME, default_config_json},
    report::SUCCESS_MARK,
};

pub fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    Ok(())
}
