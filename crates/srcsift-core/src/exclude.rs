//! Exclusion-rule compilation and path matching.
//!
//! Excluded directory names are matched as substrings with an optional path
//! separator on either side, so a name matches wherever it appears in a
//! candidate path. Excluding `test` therefore also matches a directory named
//! `latest`; this looseness is part of the contract and pinned by tests.

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// One compiled exclusion pattern.
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    regex: Regex,
    raw: String,
}

impl ExclusionRule {
    /// Compile a single excluded directory name into a rule.
    fn compile(dir: &str) -> Result<Self> {
        // Windows-style input is normalized to forward slashes; the
        // separator class in the pattern matches either convention.
        let normalized = dir.replace('\\', "/");
        let pattern = format!(r"([\\/])?{}([\\/])?", regex::escape(&normalized));
        let regex = Regex::new(&pattern).map_err(|e| Error::Pattern(format!("{dir}: {e}")))?;

        Ok(Self {
            regex,
            raw: dir.to_string(),
        })
    }

    /// The directory string this rule was built from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Test a candidate path against this rule alone.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Ordered set of compiled exclusion rules.
///
/// Built once per scan from the configured directory list and never mutated.
/// An empty set matches nothing.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    rules: Vec<ExclusionRule>,
}

impl ExclusionSet {
    /// Compile a list of excluded directory names into a rule set.
    ///
    /// Produces one rule per input string, in input order. A string that
    /// fails to compile aborts the whole set rather than being skipped: a
    /// partially applied exclusion list would silently under-exclude.
    pub fn compile(dirs: &[String]) -> Result<Self> {
        let mut rules = Vec::with_capacity(dirs.len());
        for dir in dirs {
            rules.push(ExclusionRule::compile(dir)?);
        }

        debug!("Compiled {} exclusion rules", rules.len());
        Ok(Self { rules })
    }

    /// Return `true` if any rule matches somewhere within `candidate`.
    pub fn is_excluded(&self, candidate: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(candidate))
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the compiled rules.
    pub fn iter(&self) -> impl Iterator<Item = &ExclusionRule> {
        self.rules.iter()
    }
}
