use crate::config::{
    DEFAULT_ARCHIVE_FILE, DEFAULT_BASE_URL, DEFAULT_GAME_VERSION, DEFAULT_INSTALL_DIR,
    DEFAULT_PACKS_FILE, FetchConfig,
};
use std::path::PathBuf;

const PACKS_FILE_ENV: &str = "VT_PACKS_FILE";
const GAME_VERSION_ENV: &str = "VT_GAME_VERSION";
const BASE_URL_ENV: &str = "VT_BASE_URL";

pub fn print_help() {
    println!(
        "Usage:\n  vtpacks [options]\n  vtpacks help\n  vtpacks version\n\nFetches the datapacks listed in the pack file from vanillatweaks.net,\ndownloads them as one archive, and optionally installs them.\n\nOptions:\n  --packs-file <path>    pack list, one name per line (default: {DEFAULT_PACKS_FILE})\n  --game-version <v>     game version for catalog and archive (default: {DEFAULT_GAME_VERSION})\n  --base-url <url>       service origin (default: {DEFAULT_BASE_URL})\n  --output <file>        archive filename (default: {DEFAULT_ARCHIVE_FILE})\n  --install-dir <dir>    extraction target (default: {DEFAULT_INSTALL_DIR})\n  --yes                  install without prompting\n  --no-refresh           skip `packwiz refresh` after install\n\nDefaults via env:\n  {PACKS_FILE_ENV}=<path>\n  {GAME_VERSION_ENV}=<version>\n  {BASE_URL_ENV}=<url>\n"
    );
}

#[derive(Debug, Clone)]
pub struct Cli {
    pub config: FetchConfig,
    pub assume_yes: bool,
    pub no_refresh: bool,
}

fn env_fallback(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

pub fn parse_cli(args: &[String]) -> Result<Cli, String> {
    let mut packs_file: Option<String> = None;
    let mut game_version: Option<String> = None;
    let mut base_url: Option<String> = None;
    let mut output: Option<String> = None;
    let mut install_dir: Option<String> = None;
    let mut assume_yes = false;
    let mut no_refresh = false;

    let mut i = 0usize;
    while i < args.len() {
        let a = &args[i];
        match a.as_str() {
            "--yes" | "-y" => {
                assume_yes = true;
                i += 1;
            }
            "--no-refresh" => {
                no_refresh = true;
                i += 1;
            }
            "--packs-file" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--packs-file requires a value".to_string())?;
                if v.starts_with("--") {
                    return Err("--packs-file requires a value".to_string());
                }
                packs_file = Some(v.clone());
                i += 2;
            }
            "--game-version" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--game-version requires a value".to_string())?;
                if v.starts_with("--") {
                    return Err("--game-version requires a value".to_string());
                }
                game_version = Some(v.clone());
                i += 2;
            }
            "--base-url" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--base-url requires a value".to_string())?;
                if v.starts_with("--") {
                    return Err("--base-url requires a value".to_string());
                }
                base_url = Some(v.clone());
                i += 2;
            }
            "--output" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--output requires a value".to_string())?;
                if v.starts_with("--") {
                    return Err("--output requires a value".to_string());
                }
                output = Some(v.clone());
                i += 2;
            }
            "--install-dir" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--install-dir requires a value".to_string())?;
                if v.starts_with("--") {
                    return Err("--install-dir requires a value".to_string());
                }
                install_dir = Some(v.clone());
                i += 2;
            }
            _ => return Err(format!("unknown argument: {a}")),
        }
    }

    let base_url = base_url
        .or_else(|| env_fallback(BASE_URL_ENV))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();
    if base_url.is_empty() {
        return Err("--base-url requires a non-empty origin".to_string());
    }

    let config = FetchConfig {
        base_url,
        packs_file: PathBuf::from(
            packs_file
                .or_else(|| env_fallback(PACKS_FILE_ENV))
                .unwrap_or_else(|| DEFAULT_PACKS_FILE.to_string()),
        ),
        archive_file: PathBuf::from(output.unwrap_or_else(|| DEFAULT_ARCHIVE_FILE.to_string())),
        install_dir: PathBuf::from(
            install_dir.unwrap_or_else(|| DEFAULT_INSTALL_DIR.to_string()),
        ),
        game_version: game_version
            .or_else(|| env_fallback(GAME_VERSION_ENV))
            .unwrap_or_else(|| DEFAULT_GAME_VERSION.to_string()),
    };

    Ok(Cli {
        config,
        assume_yes,
        no_refresh,
    })
}
