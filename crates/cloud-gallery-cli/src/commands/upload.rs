use std::path::Path;

use cloud_gallery_core::{LocalFile, UploadOutcome};

use crate::commands::common::open_gallery;
use crate::error::CliError;

pub async fn run_upload(path: &Path, api_url: Option<&str>) -> Result<(), CliError> {
    let local_file = read_local_file(path)?;
    let gallery = open_gallery(api_url)?;

    gallery.select_file(local_file);
    match gallery.upload().await.map_err(CliError::Reported)? {
        UploadOutcome::Uploaded => {
            println!("{}", path.display());
        }
        UploadOutcome::Ignored => {
            tracing::warn!("Upload skipped: another request is in flight");
        }
    }
    Ok(())
}

pub fn read_local_file(path: &Path) -> Result<LocalFile, CliError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| CliError::MissingFileName(path.display().to_string()))?
        .to_string();
    let bytes = std::fs::read(path)?;
    Ok(LocalFile::new(file_name, bytes))
}
