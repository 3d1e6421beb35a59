use crate::commands::common::{file_to_list_item, format_file_lines, open_gallery, FileListItem};
use crate::error::CliError;

pub async fn run_list(as_json: bool, api_url: Option<&str>) -> Result<(), CliError> {
    let gallery = open_gallery(api_url)?;
    gallery.refresh().await.map_err(CliError::Reported)?;
    let files = gallery.state().files;

    if as_json {
        let json_items = files
            .iter()
            .map(file_to_list_item)
            .collect::<Vec<FileListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if files.is_empty() {
        eprintln!("No files yet");
    } else {
        for line in format_file_lines(&files) {
            println!("{line}");
        }
    }

    Ok(())
}
