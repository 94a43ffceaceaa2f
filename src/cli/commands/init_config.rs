use std::path::Path;

use crate::config::Config;

pub fn cmd_init_config(path: Option<&Path>) -> anyhow::Result<()> {
    let default_path = Config::default_config_path();
    let path = path.unwrap_or(&default_path);

    if Config::create_default_if_missing(path)? {
        println!("✓ Config file created at {}. Edit it and run again.", path.display());
    } else {
        println!("Config file already exists at {}", path.display());
    }
    Ok(())
}
