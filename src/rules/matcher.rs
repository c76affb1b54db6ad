use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use crate::error::{CommitGuardError, Result};

/// The three supported ways of matching text, parsed from `type:pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Plain,
    Regex,
    Wordlist,
}

impl MatchType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Regex => "regex",
            Self::Wordlist => "wordlist",
        }
    }
}

impl std::str::FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "regex" => Ok(Self::Regex),
            "wordlist" => Ok(Self::Wordlist),
            _ => Err(format!("unknown match type '{s}' (expected plain, regex or wordlist)")),
        }
    }
}

/// Case-insensitive text matcher used by message and path rules.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Substring containment; the needle is stored lower-cased.
    Plain(String),
    /// Search anywhere in the target, compiled case-insensitive.
    Regex(Regex),
    /// Any listed word or phrase contained in the target.
    Wordlist { path: PathBuf, words: Vec<String> },
}

impl Matcher {
    #[must_use]
    pub fn plain(pattern: &str) -> Self {
        Self::Plain(pattern.to_lowercase())
    }

    /// # Errors
    /// Returns `InvalidRegex` if the pattern does not compile.
    pub fn regex(pattern: &str) -> Result<Self> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(Self::Regex)
            .map_err(|source| CommitGuardError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Build a wordlist matcher from the file's contents.
    #[must_use]
    pub fn wordlist(path: &Path, content: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim_end_matches('\r').to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self::Wordlist {
            path: path.to_path_buf(),
            words,
        }
    }

    #[must_use]
    pub const fn match_type(&self) -> MatchType {
        match self {
            Self::Plain(_) => MatchType::Plain,
            Self::Regex(_) => MatchType::Regex,
            Self::Wordlist { .. } => MatchType::Wordlist,
        }
    }

    #[must_use]
    pub fn matches(&self, target: &str) -> bool {
        match self {
            Self::Plain(needle) => target.to_lowercase().contains(needle.as_str()),
            Self::Regex(re) => re.is_match(target),
            Self::Wordlist { words, .. } => {
                let target = target.to_lowercase();
                words.iter().any(|word| target.contains(word.as_str()))
            }
        }
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wordlist { path, words } => write!(
                f,
                "{} {} ({} entries)",
                self.match_type().as_str(),
                path.display(),
                words.len()
            ),
            Self::Plain(_) | Self::Regex(_) => f.write_str(self.match_type().as_str()),
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
