use anyhow::Result;

use crate::configtool::{ConfigFile, config_file_path};

pub fn init_config() -> Result<()> {
    let path = config_file_path()?;
    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    let mut config = ConfigFile::new();
    config.save_to(&path)?;
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}
