//! Path template resolution and the derived search matcher.
//!
//! The same template drives both: substitution rules render the concrete
//! file name for today, and a wildcard in place of each token matches every
//! historical rotation of that name. Deriving both from the one template
//! keeps them in lockstep.

use crate::config::SubstitutionRule;
use chrono::{DateTime, Local};
use regex::Regex;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// The only token recognized for substitution.
pub const DATE_TOKEN: &str = "{date}";

/// Split marker while turning a template into a matcher. NUL cannot occur in
/// a valid path component.
const WILDCARD_SENTINEL: char = '\u{0}';

/// A resolved log file path plus the matcher for its sibling rotations.
#[derive(Debug, Clone)]
pub struct FilePattern {
    resolved: PathBuf,
    dir: PathBuf,
    matcher: Regex,
}

impl FilePattern {
    /// Expands `~`, validates token placement, substitutes `{date}` rules
    /// with `now`, and compiles the rotation matcher.
    ///
    /// Tokens must appear at most once and only in the file name component:
    /// the sweep scans a single directory non-recursively, so a token inside
    /// a directory component could never be matched back.
    ///
    /// # Errors
    /// `Error::InvalidPath` on duplicate tokens, tokens in a directory
    /// component, a template without a file name, or an invalid strftime
    /// format.
    pub fn new(
        template: &str,
        rules: &[SubstitutionRule],
        now: DateTime<Local>,
    ) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(template).into_owned();

        let Some(file_template) = Path::new(&expanded).file_name().and_then(|n| n.to_str())
        else {
            return Err(crate::Error::InvalidPath(format!(
                "'{template}' has no file name component"
            )));
        };

        for rule in rules {
            let occurrences = expanded.matches(rule.token.as_str()).count();
            if occurrences > 1 {
                return Err(crate::Error::InvalidPath(format!(
                    "token '{}' appears {occurrences} times in '{template}'",
                    rule.token
                )));
            }
            if occurrences == 1 && !file_template.contains(rule.token.as_str()) {
                return Err(crate::Error::InvalidPath(format!(
                    "token '{}' must be in the file name, not a directory component",
                    rule.token
                )));
            }
        }

        let mut resolved = expanded.clone();
        for rule in rules {
            if rule.token != DATE_TOKEN {
                continue;
            }
            let mut stamp = String::new();
            if write!(stamp, "{}", now.format(&rule.format)).is_err() {
                return Err(crate::Error::InvalidPath(format!(
                    "invalid strftime format '{}'",
                    rule.format
                )));
            }
            resolved = resolved.replace(DATE_TOKEN, &stamp);
        }

        let resolved = PathBuf::from(resolved);
        let dir = match resolved.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let matcher = build_matcher(file_template, rules)?;

        Ok(Self {
            resolved,
            dir,
            matcher,
        })
    }

    /// The concrete path the file sink writes to.
    #[must_use]
    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    /// Directory the sweep enumerates (non-recursively).
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a directory entry's name belongs to this file's rotation set.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }
}

/// Every rule's token becomes match-any-sequence; everything else matches
/// literally. A template with no tokens only ever matches the current name.
fn build_matcher(file_template: &str, rules: &[SubstitutionRule]) -> Result<Regex, crate::Error> {
    let mut marked = file_template.to_string();
    for rule in rules {
        marked = marked.replace(rule.token.as_str(), &WILDCARD_SENTINEL.to_string());
    }

    let mut pattern = String::from("^");
    for (i, part) in marked.split(WILDCARD_SENTINEL).enumerate() {
        if i > 0 {
            pattern.push_str(".*");
        }
        pattern.push_str(&regex::escape(part));
    }
    pattern.push('$');

    Regex::new(&pattern)
        .map_err(|e| crate::Error::InvalidPath(format!("unusable search pattern: {e}")))
}
