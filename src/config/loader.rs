use std::path::{Path, PathBuf};

use crate::error::{CommitGuardError, Result};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".commit-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A parsed configuration together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory that relative wordlist paths are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if no config file is found, or it cannot be read or parsed.
    fn load(&self) -> Result<LoadedConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for commit-guard.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "commit-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order when no explicit path is given:
/// 1. `.commit-guard.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
///    (`~/.config/commit-guard` on Linux)
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    #[must_use]
    pub const fn fs(&self) -> &F {
        &self.fs
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// Make relative paths absolute so wordlists resolve against the config's directory.
    fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.fs
            .current_dir()
            .map_or_else(|_| path.to_path_buf(), |dir| dir.join(path))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadedConfig> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                log::debug!("using config file {}", path.display());
                return self.load_from_path(&path);
            }
        }
        Err(CommitGuardError::Config(format!(
            "no configuration file found (pass --config or create {LOCAL_CONFIG_NAME})"
        )))
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig> {
        let path = self.absolutize(path);
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| CommitGuardError::FileRead {
                path: path.clone(),
                source,
            })?;
        let config: Config = toml::from_str(&content)?;
        Ok(LoadedConfig { config, path })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
