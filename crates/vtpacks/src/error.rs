use std::path::PathBuf;

/// Every failure the pipeline can hit. All variants are fatal: the binary
/// renders the message, exits 1, and no later stage runs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("error fetching pack catalog: {0}")]
    CatalogFetch(String),
    #[error("invalid JSON from the catalog endpoint: {0}")]
    CatalogParse(String),
    #[error("failed to read pack list {path}: {source}")]
    PackList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no valid packs found to download")]
    NoValidPacks,
    #[error("error getting download link: {0}")]
    Locate(String),
    #[error("invalid JSON response from server: {0}")]
    LocateParse(String),
    #[error("server response: {0}")]
    Service(String),
    #[error("error downloading packs: {0}")]
    Download(String),
    #[error("error installing packs: {0}")]
    Install(String),
}

impl FetchError {
    pub fn code(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "http.client_build_failed",
            FetchError::CatalogFetch(_) => "catalog.fetch_failed",
            FetchError::CatalogParse(_) => "catalog.parse_failed",
            FetchError::PackList { .. } => "packs.list_read_failed",
            FetchError::NoValidPacks => "packs.none_valid",
            FetchError::Locate(_) => "locate.request_failed",
            FetchError::LocateParse(_) => "locate.parse_failed",
            FetchError::Service(_) => "locate.rejected",
            FetchError::Download(_) => "download.failed",
            FetchError::Install(_) => "install.failed",
        }
    }
}
