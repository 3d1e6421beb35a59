use std::io::{self, BufRead, Write};

use cloud_gallery_core::{
    FileRecord, GalleryConfig, GalleryViewModel, HttpFileApi, Notice, NoticeLevel, Notifier,
};
use serde::Serialize;

use crate::error::CliError;

pub type CliGallery = GalleryViewModel<HttpFileApi, TerminalNotifier>;

/// Prints notices to stderr so stdout stays machine-readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", format_notice(&notice));
    }
}

pub fn format_notice(notice: &Notice) -> String {
    let prefix = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!("[{prefix}] {notice}")
}

/// Resolve config (explicit URL first, then the config file) and build the gallery.
pub fn open_gallery(api_url: Option<&str>) -> Result<CliGallery, CliError> {
    let config = resolve_config(api_url)?;
    tracing::debug!("Using backend {}", config.api_base_url);
    let api = HttpFileApi::new(&config)?;
    Ok(GalleryViewModel::new(api, TerminalNotifier))
}

pub fn resolve_config(api_url: Option<&str>) -> Result<GalleryConfig, CliError> {
    match api_url {
        Some(url) => Ok(GalleryConfig::new(url)?),
        None => Ok(GalleryConfig::load()?),
    }
}

pub fn normalize_key(key: &str) -> Result<String, CliError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::EmptyKey);
    }
    Ok(key.to_string())
}

/// Fetch the list and pick the record stored under `key`.
pub async fn resolve_record(gallery: &CliGallery, key: &str) -> Result<FileRecord, CliError> {
    let key = normalize_key(key)?;
    gallery.refresh().await.map_err(CliError::Reported)?;
    gallery
        .state()
        .find(&key)
        .cloned()
        .ok_or(CliError::FileNotFound(key))
}

#[derive(Debug, Serialize)]
pub struct FileListItem {
    pub key: String,
    pub name: String,
    pub view_url: Option<String>,
}

pub fn file_to_list_item(file: &FileRecord) -> FileListItem {
    FileListItem {
        key: file.key.clone(),
        name: file.display_name(),
        view_url: file.view_url.clone(),
    }
}

/// One line per file: display name, then the full key.
pub fn format_file_lines(files: &[FileRecord]) -> Vec<String> {
    let width = files
        .iter()
        .map(|file| file.display_name().chars().count())
        .max()
        .unwrap_or(0);

    files
        .iter()
        .map(|file| {
            let link = if file.view_url.is_some() { "" } else { "  (no link)" };
            format!("{:<width$}  {}{link}", file.display_name(), file.key)
        })
        .collect()
}

/// Interpret a y/N answer; anything but yes declines.
pub fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn prompt_confirmation(question: &str) -> Result<bool, CliError> {
    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_confirmation(&answer))
}
