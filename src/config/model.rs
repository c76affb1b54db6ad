use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CommitGuardError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Parsed configuration file.
///
/// Everything is optional at this level; [`Config::settings`] and the rule set
/// loader turn missing or malformed values into configuration errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub status: StatusConfig,

    /// Rule tables `[rule.<name>]`, in file order.
    #[serde(default)]
    pub rule: IndexMap<String, RuleDefinition>,
}

/// `[github]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GithubConfig {
    /// Personal access token used for every API call.
    #[serde(default)]
    pub token: Option<String>,

    /// API base URL (GitHub Enterprise or a test server).
    #[serde(default)]
    pub api_url: Option<String>,
}

/// `[status]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusConfig {
    /// Label under which statuses are posted; also the dedup key.
    #[serde(default)]
    pub context: Option<String>,
}

/// A raw `[rule.<name>]` table before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDefinition {
    #[serde(default)]
    pub text: Option<String>,

    /// One of `message`, `path`, `stats`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// `plain:<text>`, `regex:<pattern>` or `wordlist:<file>`.
    #[serde(default, rename = "match")]
    pub match_spec: Option<String>,

    /// Path rules: `modified`, `added`, `removed`, `any` or `*`.
    #[serde(default)]
    pub status: Option<String>,

    /// Stats rules: counter name.
    #[serde(default)]
    pub stat: Option<String>,

    /// Stats rules: `commit` or `file`.
    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub min: Option<i64>,

    #[serde(default)]
    pub max: Option<i64>,
}

/// Validated connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub token: String,
    pub api_url: String,
    pub context: String,
}

impl Config {
    /// Extract the required connection settings.
    ///
    /// # Errors
    /// Returns a configuration error if the token or the status context is missing.
    pub fn settings(&self) -> Result<Settings> {
        let token = non_empty(self.github.token.as_deref())
            .ok_or_else(|| CommitGuardError::Config("missing [github] token".to_string()))?;
        let context = non_empty(self.status.context.as_deref())
            .ok_or_else(|| CommitGuardError::Config("missing [status] context".to_string()))?;
        let api_url = non_empty(self.github.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Settings {
            token: token.to_string(),
            api_url,
            context: context.to_string(),
        })
    }

    /// Rule definitions paired with their table names.
    #[must_use]
    pub fn rule_definitions(&self) -> Vec<(String, RuleDefinition)> {
        self.rule
            .iter()
            .map(|(name, def)| (name.clone(), def.clone()))
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Repository identified by `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl std::str::FromStr for RepoSlug {
    type Err = CommitGuardError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CommitGuardError::InvalidRepoSlug(s.to_string());
        let (owner, repo) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
