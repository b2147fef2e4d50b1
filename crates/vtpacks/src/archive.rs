use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::selection::CategorizedSelection;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct LocateResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Build the `packs` form value: interior spaces become literal `+`, the
/// selection is serialized as compact JSON, the JSON is percent-encoded, and
/// `%2B` is rewritten back to `+`. The service form-decodes the value and
/// expects plus-for-space inside pack names, so the plus characters must
/// survive encoding literally.
pub fn packs_payload(selection: &CategorizedSelection) -> Result<String, FetchError> {
    let compact = serde_json::to_string(&selection.plus_encoded())
        .map_err(|e| FetchError::Locate(format!("failed to serialize pack selection: {e}")))?;
    Ok(urlencoding::encode(&compact).replace("%2B", "+"))
}

/// Validate the locate response: only `status == "success"` with a non-empty
/// `link` counts. Anything else surfaces the raw body so the user sees what
/// the service actually said.
pub fn parse_locate_response(body: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let parsed: LocateResponse =
        serde_json::from_str(body).map_err(|e| FetchError::LocateParse(e.to_string()))?;
    match parsed.link {
        Some(link) if parsed.status == "success" && !link.is_empty() => {
            Ok(config.download_url(&link))
        }
        _ => Err(FetchError::Service(body.trim().to_string())),
    }
}

/// Ask the service to generate an archive for the selection; returns the
/// absolute, time-limited download URL.
pub async fn locate(
    client: &reqwest::Client,
    config: &FetchConfig,
    selection: &CategorizedSelection,
) -> Result<String, FetchError> {
    let body = format!(
        "packs={}&version={}",
        packs_payload(selection)?,
        config.game_version
    );
    let response = client
        .post(config.locate_url())
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .header(reqwest::header::ACCEPT, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| FetchError::Locate(e.to_string()))?
        .error_for_status()
        .map_err(|e| FetchError::Locate(e.to_string()))?;
    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Locate(e.to_string()))?;
    parse_locate_response(&text, config)
}

/// Download the generated archive to `dest` in one read.
pub async fn download(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<(), FetchError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/zip")
        .send()
        .await
        .map_err(|e| FetchError::Download(e.to_string()))?
        .error_for_status()
        .map_err(|e| FetchError::Download(e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Download(e.to_string()))?;
    fs::write(dest, &bytes)
        .map_err(|e| FetchError::Download(format!("failed to write {}: {e}", dest.display())))
}
