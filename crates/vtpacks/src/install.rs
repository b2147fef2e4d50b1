use crate::config::FetchConfig;
use crate::error::FetchError;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::process::Command;

pub const INSTALL_PROMPT: &str = "Do you want to install the downloaded packs? (y/n): ";

/// Answers the install question. Production reads stdin; tests script it.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().to_lowercase() == "y"
    }
}

/// `--yes`: skip the prompt entirely.
pub struct AlwaysYes;

impl Confirm for AlwaysYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Runs the build-tool refresh after a successful install. Injected so tests
/// can assert the invocation without spawning a process.
pub trait RefreshRunner {
    fn refresh(&self);
}

pub struct PackwizRefresh;

impl RefreshRunner for PackwizRefresh {
    fn refresh(&self) {
        // Fire-and-forget: a missing packwiz or a failing refresh must not
        // fail the install.
        let _ = Command::new("packwiz").arg("refresh").status();
    }
}

/// `--no-refresh`.
pub struct SkipRefresh;

impl RefreshRunner for SkipRefresh {
    fn refresh(&self) {}
}

fn safe_entry_path(path: &Path) -> Result<(), FetchError> {
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::ParentDir => {
                return Err(FetchError::Install(format!(
                    "unsafe zip entry path: {:?}",
                    path
                )));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}

/// Extract the downloaded zip into `dest`. Entries that would escape `dest`
/// abort the whole install.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<(), FetchError> {
    let file = fs::File::open(archive_path).map_err(|e| {
        FetchError::Install(format!("failed to open {}: {e}", archive_path.display()))
    })?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| FetchError::Install(format!("failed to read zip archive: {e}")))?;

    fs::create_dir_all(dest)
        .map_err(|e| FetchError::Install(format!("failed to create {}: {e}", dest.display())))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| FetchError::Install(format!("failed to read zip entry: {e}")))?;
        let rel = PathBuf::from(entry.name());
        safe_entry_path(&rel)?;
        let out_path = dest.join(&rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| {
                FetchError::Install(format!("failed to create {}: {e}", out_path.display()))
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FetchError::Install(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let mut out = fs::File::create(&out_path).map_err(|e| {
            FetchError::Install(format!("failed to create {}: {e}", out_path.display()))
        })?;
        io::copy(&mut entry, &mut out).map_err(|e| {
            FetchError::Install(format!("failed to write {}: {e}", out_path.display()))
        })?;
    }

    Ok(())
}

/// The post-download step: prompt, and on "y" extract the archive into the
/// install dir, delete the archive, and run the refresh command. Declining
/// skips everything without a message. Returns whether an install happened.
pub fn install_if_confirmed(
    config: &FetchConfig,
    confirm: &dyn Confirm,
    refresh: &dyn RefreshRunner,
) -> Result<bool, FetchError> {
    if !confirm.confirm(INSTALL_PROMPT) {
        return Ok(false);
    }

    println!("Unzipping packs...");
    extract_archive(&config.archive_file, &config.install_dir)?;
    fs::remove_file(&config.archive_file).map_err(|e| {
        FetchError::Install(format!(
            "failed to remove {}: {e}",
            config.archive_file.display()
        ))
    })?;
    refresh.refresh();
    println!("Successfully installed packs.");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_components_are_rejected() {
        let err = safe_entry_path(Path::new("../escape.txt")).unwrap_err();
        assert_eq!(err.code(), "install.failed");
        let err = safe_entry_path(Path::new("nested/../../escape.txt")).unwrap_err();
        assert_eq!(err.code(), "install.failed");
    }

    #[test]
    fn absolute_paths_are_rejected() {
        assert!(safe_entry_path(Path::new("/etc/passwd")).is_err());
    }

    #[test]
    fn normal_relative_paths_pass() {
        assert!(safe_entry_path(Path::new("pack/data/function.mcfunction")).is_ok());
        assert!(safe_entry_path(Path::new("./pack.mcmeta")).is_ok());
    }
}
