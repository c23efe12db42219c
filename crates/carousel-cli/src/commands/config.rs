use std::path::Path;

use anyhow::Result;

use carousel_core::AppConfig;

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("\nTo overwrite it with the defaults, run:");
        println!("  carousel config init --force");
        return Ok(());
    }

    AppConfig::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
