use cloud_gallery_core::{Confirmation, DeleteOutcome};

use crate::commands::common::{open_gallery, prompt_confirmation, resolve_record};
use crate::error::CliError;

pub async fn run_delete(
    key: &str,
    skip_prompt: bool,
    api_url: Option<&str>,
) -> Result<(), CliError> {
    let gallery = open_gallery(api_url)?;
    let record = resolve_record(&gallery, key).await?;

    let confirmed = skip_prompt
        || prompt_confirmation(&format!(
            "Delete {} permanently?",
            record.display_name()
        ))?;

    match gallery
        .delete(&record.key, Confirmation::from(confirmed))
        .await
        .map_err(CliError::Reported)?
    {
        DeleteOutcome::Deleted => println!("{}", record.key),
        DeleteOutcome::Declined => eprintln!("Cancelled"),
        DeleteOutcome::Ignored => {
            tracing::warn!("Delete skipped: another request is in flight");
        }
    }
    Ok(())
}
