use cloud_gallery_core::config::default_config_path;
use cloud_gallery_core::GalleryConfig;

use crate::cli::ConfigCommands;
use crate::commands::common::resolve_config;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, api_url: Option<&str>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { base_url } => run_config_init(&base_url),
        ConfigCommands::Show => run_config_show(api_url),
    }
}

pub fn run_config_init(base_url: &str) -> Result<(), CliError> {
    let config = GalleryConfig::new(base_url)?;
    let path = config.save()?;
    println!("Saved {} to {}", config.api_base_url, path.display());
    Ok(())
}

fn run_config_show(api_url: Option<&str>) -> Result<(), CliError> {
    let config = resolve_config(api_url)?;
    let location = default_config_path()
        .map_or_else(|| "(unavailable)".to_string(), |path| path.display().to_string());
    println!("config file:  {location}");
    println!("api base url: {}", config.api_base_url);
    Ok(())
}
