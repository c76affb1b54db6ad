use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommitGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Reposlug \"{0}\" is not valid")]
    InvalidRepoSlug(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Report error: {0}")]
    Report(String),
}

impl CommitGuardError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidRepoSlug(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidRegex { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::Json(_) => "JSON",
            Self::Fetch(_) => "Fetch",
            Self::Report(_) => "Report",
        }
    }

    /// The primary message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Fetch(msg) | Self::Report(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::InvalidRegex { pattern, .. } => pattern.clone(),
            Self::InvalidRepoSlug(slug) => format!("reposlug \"{slug}\" is not valid"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format and rule definitions"),
            Self::FileRead { source, .. } | Self::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            Self::InvalidRegex { .. } => Some("Check the regex syntax of the match pattern"),
            Self::InvalidRepoSlug(_) => Some("Use the owner/repo format, e.g. octocat/hello-world"),
            Self::TomlParse(_) => Some("Check the TOML syntax of the config file"),
            Self::Json(_) => Some("Check that the payload is valid JSON"),
            Self::Fetch(_) => Some("Check the repository name, the token and network access"),
            Self::Report(_) => None,
        }
    }

    /// True for errors that abort a session before any network activity.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::FileRead { .. }
                | Self::InvalidRegex { .. }
                | Self::InvalidRepoSlug(_)
                | Self::TomlParse(_)
                | Self::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CommitGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
