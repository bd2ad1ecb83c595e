use std::path::Path;

use anyhow::Result;

use smoothscroll_core::AppConfig;

/// `path` is the `--config` override; `None` means the default location
pub fn run(config: &AppConfig, path: Option<&Path>, init: bool) -> Result<()> {
    let shown = path.map(Path::to_path_buf).unwrap_or_else(AppConfig::config_path);

    if init {
        if shown.exists() {
            println!("Configuration already exists at {}", shown.display());
            return Ok(());
        }
        match path {
            Some(path) => AppConfig::default().save_to(path)?,
            None => AppConfig::default().save()?,
        }
        println!("Wrote default configuration to {}", shown.display());
        return Ok(());
    }

    if shown.exists() {
        println!("# Loaded from {}\n", shown.display());
    } else {
        println!("# No file at {}, showing defaults\n", shown.display());
    }
    print!("{}", config.to_toml()?);

    Ok(())
}
