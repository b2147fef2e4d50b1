use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://vanillatweaks.net";
pub const DEFAULT_PACKS_FILE: &str = "vanillatweaks/datapacks.txt";
pub const DEFAULT_ARCHIVE_FILE: &str = "datapacks.zip";
pub const DEFAULT_INSTALL_DIR: &str = "datapacks";
pub const DEFAULT_GAME_VERSION: &str = "1.21";

/// Run configuration threaded explicitly through every stage. Defaults
/// reproduce the fixed paths and endpoints of the service.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Service origin, no trailing slash.
    pub base_url: String,
    /// Local text file listing one pack name per line.
    pub packs_file: PathBuf,
    /// Where the generated archive is written.
    pub archive_file: PathBuf,
    /// Where the archive is extracted on install.
    pub install_dir: PathBuf,
    /// Game version; selects the catalog edition and is echoed in the
    /// archive-generation request.
    pub game_version: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            packs_file: PathBuf::from(DEFAULT_PACKS_FILE),
            archive_file: PathBuf::from(DEFAULT_ARCHIVE_FILE),
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            game_version: DEFAULT_GAME_VERSION.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/assets/resources/json/{}/dpcategories.json",
            self.base_url, self.game_version
        )
    }

    pub fn locate_url(&self) -> String {
        format!("{}/assets/server/zipdatapacks.php", self.base_url)
    }

    /// The locate endpoint returns a relative path; the download URL is that
    /// path joined onto the service origin.
    pub fn download_url(&self, link: &str) -> String {
        format!("{}{}", self.base_url, link)
    }

    pub fn referer(&self) -> String {
        format!("{}/", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_match_the_service_endpoints() {
        let config = FetchConfig::default();
        assert_eq!(
            config.catalog_url(),
            "https://vanillatweaks.net/assets/resources/json/1.21/dpcategories.json"
        );
        assert_eq!(
            config.locate_url(),
            "https://vanillatweaks.net/assets/server/zipdatapacks.php"
        );
        assert_eq!(config.referer(), "https://vanillatweaks.net/");
    }

    #[test]
    fn download_url_joins_relative_link_onto_origin() {
        let config = FetchConfig::default();
        assert_eq!(
            config.download_url("/assets/server/zip/abc123.zip"),
            "https://vanillatweaks.net/assets/server/zip/abc123.zip"
        );
    }

    #[test]
    fn catalog_url_follows_game_version() {
        let config = FetchConfig {
            game_version: "1.20".to_string(),
            ..FetchConfig::default()
        };
        assert_eq!(
            config.catalog_url(),
            "https://vanillatweaks.net/assets/resources/json/1.20/dpcategories.json"
        );
    }
}
