mod loader;
mod model;
mod rule_set;

#[cfg(test)]
mod mock_fs;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadedConfig, RealFileSystem,
};
pub use model::{
    Config, DEFAULT_API_URL, GithubConfig, RepoSlug, RuleDefinition, Settings, StatusConfig,
};
pub use rule_set::RuleSetLoader;

use crate::error::Result;
use crate::rules::RuleSet;

/// Everything a session needs from the configuration file.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub settings: Settings,
    pub rules: RuleSet,
    pub path: std::path::PathBuf,
}

/// Load the config file (explicit path or discovery), then validate settings and rules.
///
/// # Errors
/// Returns a configuration error if the file is missing or malformed, required
/// settings are absent, or any rule definition is invalid.
pub fn prepare<F: FileSystem>(
    loader: &FileConfigLoader<F>,
    path: Option<&std::path::Path>,
) -> Result<Prepared> {
    let loaded = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    let settings = loaded.config.settings()?;
    let rules =
        RuleSetLoader::new(loader.fs(), loaded.base_dir()).load(&loaded.config.rule_definitions())?;
    Ok(Prepared {
        settings,
        rules,
        path: loaded.path,
    })
}
