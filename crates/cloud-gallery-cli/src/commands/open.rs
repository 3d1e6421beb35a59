use crate::commands::common::{open_gallery, resolve_record};
use crate::error::CliError;

pub async fn run_open(key: &str, api_url: Option<&str>) -> Result<(), CliError> {
    let gallery = open_gallery(api_url)?;
    let record = resolve_record(&gallery, key).await?;
    let url = gallery.open(&record).map_err(CliError::Reported)?;
    println!("{url}");
    Ok(())
}
