use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use crate::commands::common::{open_gallery, resolve_record};
use crate::error::CliError;

pub async fn run_download(
    key: &str,
    output_path: Option<&Path>,
    api_url: Option<&str>,
) -> Result<(), CliError> {
    let gallery = open_gallery(api_url)?;
    let record = resolve_record(&gallery, key).await?;
    let file = gallery
        .download(&record)
        .await
        .map_err(CliError::Reported)?;

    let path = match output_path {
        Some(path) => path.to_path_buf(),
        None => default_download_path(&file.file_name)?,
    };
    write_new_file(&path, &file.bytes)?;
    println!("{}", path.display());
    Ok(())
}

/// Local path for a download named after the stored file.
///
/// The name comes from the server, so it must be a single plain file name.
pub fn default_download_path(file_name: &str) -> Result<PathBuf, CliError> {
    let unsafe_name = || CliError::UnsafeFileName(file_name.to_string());
    if file_name.contains(['/', '\\']) {
        return Err(unsafe_name());
    }
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Ok(PathBuf::from(name)),
        _ => Err(unsafe_name()),
    }
}

/// Write `bytes` to `path`, refusing to replace an existing file.
pub fn write_new_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|error| match error.kind() {
            io::ErrorKind::AlreadyExists => CliError::FileExists(path.display().to_string()),
            _ => CliError::Io(error),
        })?;
    file.write_all(bytes)?;
    Ok(())
}
