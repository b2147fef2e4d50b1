use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::install::{Confirm, RefreshRunner, install_if_confirmed};
use crate::selection::Partition;
use crate::{archive, catalog, http, selection};
use std::path::PathBuf;

#[derive(Debug)]
pub struct RunOutcome {
    pub downloaded_to: PathBuf,
    pub installed: bool,
    pub invalid_packs: Vec<String>,
}

/// The whole pipeline: Fetch -> BuildRequest -> Locate -> Retrieve ->
/// (prompt) -> Install|Skip. Strictly forward; the first error aborts the
/// run.
pub async fn run(
    config: &FetchConfig,
    confirm: &dyn Confirm,
    refresh: &dyn RefreshRunner,
) -> Result<RunOutcome, FetchError> {
    let client = http::client(config)?;

    let index = catalog::fetch(&client, config).await?;
    let requested = selection::read_requested(&config.packs_file)?;
    let Partition { selection, invalid } = selection::partition(&requested, &index);

    if !invalid.is_empty() {
        println!("Warning: The following packs are invalid:");
        for pack in &invalid {
            println!("- {pack}");
        }
    }
    if selection.is_empty() {
        return Err(FetchError::NoValidPacks);
    }

    let download_url = archive::locate(&client, config, &selection).await?;

    println!("Downloading packs...");
    archive::download(&client, &download_url, &config.archive_file).await?;
    println!("Successfully downloaded to {}", config.archive_file.display());

    let installed = install_if_confirmed(config, confirm, refresh)?;

    Ok(RunOutcome {
        downloaded_to: config.archive_file.clone(),
        installed,
        invalid_packs: invalid,
    })
}
