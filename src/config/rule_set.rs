use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{CommitGuardError, Result};
use crate::rules::{
    Bounds, CommitStat, FileStat, MatchType, Matcher, Rule, RuleKind, RuleSet, StatScope,
    StatsRule, StatusFilter,
};

use super::{FileSystem, RealFileSystem, RuleDefinition};

/// Builds a validated [`RuleSet`] from raw rule definitions.
///
/// Loading is all-or-nothing: the first malformed definition aborts the load.
#[derive(Debug)]
pub struct RuleSetLoader<'a, F: FileSystem = RealFileSystem> {
    fs: &'a F,
    base_dir: PathBuf,
}

impl<'a, F: FileSystem> RuleSetLoader<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            base_dir: base_dir.into(),
        }
    }

    /// Validate every definition and return the rules sorted by name.
    ///
    /// # Errors
    /// Returns a configuration error for the first invalid definition, including
    /// duplicate names, bad regexes and missing wordlist files.
    pub fn load(&self, definitions: &[(String, RuleDefinition)]) -> Result<RuleSet> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(definitions.len());
        for (name, def) in definitions {
            if !seen.insert(name.as_str()) {
                return Err(rule_error(name, "is defined more than once"));
            }
            let rule = self.build_rule(name, def)?;
            log::debug!("rule '{name}': {}", rule.kind);
            rules.push(rule);
        }
        log::debug!("loaded {} rule(s)", rules.len());
        Ok(RuleSet::new(rules))
    }

    fn build_rule(&self, name: &str, def: &RuleDefinition) -> Result<Rule> {
        let text = def
            .text
            .as_deref()
            .ok_or_else(|| rule_error(name, "is missing 'text'"))?;
        let kind = def
            .kind
            .as_deref()
            .ok_or_else(|| rule_error(name, "is missing 'type'"))?;

        let kind = match kind {
            "message" => RuleKind::Message(self.build_matcher(name, def)?),
            "path" => self.build_path(name, def)?,
            "stats" => RuleKind::Stats(build_stats(name, def)?),
            other => {
                return Err(rule_error(
                    name,
                    &format!("has unknown type '{other}' (expected message, path or stats)"),
                ));
            }
        };

        Ok(Rule::new(name, text, kind))
    }

    fn build_path(&self, name: &str, def: &RuleDefinition) -> Result<RuleKind> {
        let matcher = self.build_matcher(name, def)?;
        let status = match def.status.as_deref() {
            None => StatusFilter::Any,
            Some(s) => StatusFilter::parse(s).ok_or_else(|| {
                rule_error(
                    name,
                    &format!("has invalid status '{s}' (expected modified, added, removed or *)"),
                )
            })?,
        };
        Ok(RuleKind::Path { matcher, status })
    }

    fn build_matcher(&self, name: &str, def: &RuleDefinition) -> Result<Matcher> {
        let spec = def
            .match_spec
            .as_deref()
            .ok_or_else(|| rule_error(name, "is missing 'match'"))?;
        let (match_type, pattern) = parse_match_spec(spec).map_err(|msg| rule_error(name, &msg))?;

        match match_type {
            MatchType::Plain => Ok(Matcher::plain(pattern)),
            MatchType::Regex => Matcher::regex(pattern),
            MatchType::Wordlist => {
                let path = self.resolve(pattern);
                let content =
                    self.fs
                        .read_to_string(&path)
                        .map_err(|source| CommitGuardError::FileRead {
                            path: path.clone(),
                            source,
                        })?;
                Ok(Matcher::wordlist(&path, &content))
            }
        }
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Split `type:pattern` at the first colon.
fn parse_match_spec(spec: &str) -> std::result::Result<(MatchType, &str), String> {
    let (kind, pattern) = spec
        .split_once(':')
        .ok_or_else(|| format!("has malformed match '{spec}' (expected type:pattern)"))?;
    if pattern.is_empty() {
        return Err(format!("has an empty pattern in match '{spec}'"));
    }
    let match_type = kind.parse::<MatchType>()?;
    Ok((match_type, pattern))
}

fn build_stats(name: &str, def: &RuleDefinition) -> Result<StatsRule> {
    let stat = def
        .stat
        .as_deref()
        .ok_or_else(|| rule_error(name, "is missing 'stat'"))?;
    let invalid_stat = |scope: &str| {
        rule_error(
            name,
            &format!("has stat '{stat}' which is not valid for {scope} scope"),
        )
    };

    let scope = match def.scope.as_deref().unwrap_or("commit") {
        "commit" => StatScope::Commit(CommitStat::parse(stat).ok_or_else(|| invalid_stat("commit"))?),
        "file" => StatScope::File(FileStat::parse(stat).ok_or_else(|| invalid_stat("file"))?),
        other => {
            return Err(rule_error(
                name,
                &format!("has invalid scope '{other}' (expected commit or file)"),
            ));
        }
    };

    Ok(StatsRule {
        scope,
        bounds: build_bounds(name, def.min, def.max)?,
    })
}

fn build_bounds(name: &str, min: Option<i64>, max: Option<i64>) -> Result<Bounds> {
    if min.is_none() && max.is_none() {
        return Err(rule_error(name, "needs at least one of 'min' or 'max'"));
    }
    let to_bound = |key: &str, value: i64| {
        u64::try_from(value).map_err(|_| rule_error(name, &format!("has negative '{key}' ({value})")))
    };
    let min = min.map(|v| to_bound("min", v)).transpose()?.unwrap_or(0);
    let max = max.map(|v| to_bound("max", v)).transpose()?;
    if let Some(max) = max
        && min > max
    {
        return Err(rule_error(
            name,
            &format!("has 'min' ({min}) greater than 'max' ({max})"),
        ));
    }
    Ok(Bounds::new(min, max))
}

fn rule_error(name: &str, problem: &str) -> CommitGuardError {
    CommitGuardError::Config(format!("rule '{name}' {problem}"))
}

#[cfg(test)]
#[path = "rule_set_tests.rs"]
mod tests;
