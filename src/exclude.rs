//! Exclusion rules for scanning.
//!
//! A rule is any [`PathPredicate`]. Paths handed to a rule are relative to the
//! root being scanned, use `/` separators and start with `./` (the root itself
//! is `./`), so the same rules work for every root.
//!
//! Rules can be written as text (config files, `--exclude`):
//!
//! - `glob:<pattern>` matches with a glob, against the path without its `./` prefix
//! - `suffix:<text>` matches paths ending in `<text>`
//! - `regex:<re>` or a bare string is a regular expression searched in the path

use crate::error::ScanError;
use globset::{Glob, GlobMatcher};
use regex::Regex;
use std::fmt;

/// Something that can decide whether a relative path is excluded.
pub trait PathPredicate: fmt::Debug {
    fn matches(&self, path: &str) -> bool;
}

/// Regular expression searched anywhere in the path.
#[derive(Debug, Clone)]
pub struct RegexRule(Regex);

impl RegexRule {
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|e| ScanError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }
}

impl PathPredicate for RegexRule {
    fn matches(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

/// Glob matched against the whole path, minus the leading `./`.
#[derive(Debug, Clone)]
pub struct GlobRule(GlobMatcher);

impl GlobRule {
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        Glob::new(pattern)
            .map(|glob| Self(glob.compile_matcher()))
            .map_err(|e| ScanError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }
}

impl PathPredicate for GlobRule {
    fn matches(&self, path: &str) -> bool {
        let path = path.strip_prefix("./").unwrap_or(path);
        self.0.is_match(path)
    }
}

/// Literal suffix.
#[derive(Debug, Clone)]
pub struct SuffixRule(String);

impl SuffixRule {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }
}

impl PathPredicate for SuffixRule {
    fn matches(&self, path: &str) -> bool {
        path.ends_with(&self.0)
    }
}

/// Final path segment starts with `.` and has more after it (dotfiles and
/// dot-directories). Equivalent to the regex `/\.[^/]+$`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotfileRule;

impl PathPredicate for DotfileRule {
    fn matches(&self, path: &str) -> bool {
        match path.rsplit_once('/') {
            Some((_, last)) => last.len() > 1 && last.starts_with('.'),
            None => false,
        }
    }
}

/// Parse one textual rule into a predicate.
pub fn parse_rule(rule: &str) -> Result<Box<dyn PathPredicate>, ScanError> {
    if let Some(glob) = rule.strip_prefix("glob:") {
        return Ok(Box::new(GlobRule::new(glob)?));
    }
    if let Some(suffix) = rule.strip_prefix("suffix:") {
        if suffix.is_empty() {
            return Err(ScanError::InvalidPattern {
                pattern: rule.to_string(),
                reason: "empty suffix".to_string(),
            });
        }
        return Ok(Box::new(SuffixRule::new(suffix)));
    }
    let pattern = rule.strip_prefix("regex:").unwrap_or(rule);
    Ok(Box::new(RegexRule::new(pattern)?))
}

/// Ordered set of exclusion rules, evaluated as a short-circuit OR.
#[derive(Debug, Default)]
pub struct ExclusionRules {
    rules: Vec<Box<dyn PathPredicate>>,
}

impl ExclusionRules {
    /// Empty rule set: nothing is excluded.
    pub fn none() -> Self {
        Self::default()
    }

    /// Dotfiles and `~` editor backups.
    pub fn defaults() -> Self {
        Self::none().with(DotfileRule).with(SuffixRule::new("~"))
    }

    /// Build a rule set from textual rules, failing on the first malformed one.
    pub fn parse<I, S>(rules: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .map(|rule| parse_rule(rule.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn push(&mut self, rule: impl PathPredicate + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn with(mut self, rule: impl PathPredicate + 'static) -> Self {
        self.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True iff any rule matches `path`.
    pub fn excluded(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(path))
    }
}
