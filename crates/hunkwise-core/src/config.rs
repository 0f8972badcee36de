// Rust guideline compliant 2026-10-14

//! Command configuration built from an ordered list of options.
//!
//! Each option mutates one field of a draft; options are applied in the order
//! given, so a later option overrides an earlier one on the same field. Values
//! are passed through unvalidated and only surface as errors when git rejects
//! them.

use std::fmt;

/// Context lines used when no option overrides them.
pub const DEFAULT_DIFF_UNIFIED: i32 = 3;

/// Lock files always excluded from diffs, ahead of any caller additions.
pub const EXCLUDE_FROM_DIFF: [&str; 4] = [
    "package-lock.json",
    "pnpm-lock.yaml",
    // yarn.lock, Cargo.lock, Gemfile.lock, Pipfile.lock, ...
    "*.lock",
    "go.sum",
];

#[derive(Debug, Clone)]
struct Draft {
    diff_unified: i32,
    exclude_list: Vec<String>,
    is_amend: bool,
    diff_tag_prefix: String,
    diff_list: Vec<String>,
    commit_id: Option<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            diff_unified: DEFAULT_DIFF_UNIFIED,
            exclude_list: Vec::new(),
            is_amend: false,
            diff_tag_prefix: String::new(),
            diff_list: Vec::new(),
            commit_id: None,
        }
    }
}

/// A single configuration option.
///
/// Build one with the `with_*` functions and hand a sequence of them to
/// [`Config::new`] or [`crate::Command::new`].
pub struct ConfigOption(Box<dyn FnOnce(&mut Draft) + Send>);

impl ConfigOption {
    fn new(apply: impl FnOnce(&mut Draft) + Send + 'static) -> Self {
        Self(Box::new(apply))
    }

    fn apply(self, draft: &mut Draft) {
        (self.0)(draft);
    }
}

impl fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConfigOption(..)")
    }
}

/// Generate diffs with `val` lines of context instead of the usual three.
pub fn with_diff_unified(val: i32) -> ConfigOption {
    ConfigOption::new(move |draft| draft.diff_unified = val)
}

/// Additional exclusion patterns, appended after [`EXCLUDE_FROM_DIFF`].
///
/// An empty list is a no-op: it neither clears the defaults nor an earlier
/// caller list.
pub fn with_exclude_list(val: Vec<String>) -> ConfigOption {
    ConfigOption::new(move |draft| {
        if val.is_empty() {
            return;
        }
        draft.exclude_list = val;
    })
}

/// Diff and commit against the previous commit instead of the index.
pub fn with_enable_amend(val: bool) -> ConfigOption {
    ConfigOption::new(move |draft| draft.is_amend = val)
}

/// Diff the two most recent tags starting with `val`. Empty disables tag mode.
pub fn with_diff_tag_prefix(val: impl Into<String>) -> ConfigOption {
    let val = val.into();
    ConfigOption::new(move |draft| draft.diff_tag_prefix = val)
}

/// Explicit diff targets. Stored but not consulted by diff assembly yet.
pub fn with_diff_list(val: Vec<String>) -> ConfigOption {
    ConfigOption::new(move |draft| draft.diff_list = val)
}

/// Commit identifier carried for downstream callers.
pub fn with_commit_id(val: impl Into<String>) -> ConfigOption {
    let val = val.into();
    ConfigOption::new(move |draft| draft.commit_id = Some(val))
}

/// Immutable configuration consumed by [`crate::Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    diff_unified: i32,
    exclude_list: Vec<String>,
    is_amend: bool,
    diff_tag_prefix: String,
    diff_list: Vec<String>,
    commit_id: Option<String>,
}

impl Config {
    /// Applies `options` in order to a default draft and freezes the result.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        let mut draft = Draft::default();
        for option in options {
            option.apply(&mut draft);
        }

        let mut exclude_list: Vec<String> =
            EXCLUDE_FROM_DIFF.iter().map(|s| (*s).to_string()).collect();
        exclude_list.extend(draft.exclude_list);

        Self {
            diff_unified: draft.diff_unified,
            exclude_list,
            is_amend: draft.is_amend,
            diff_tag_prefix: draft.diff_tag_prefix,
            diff_list: draft.diff_list,
            commit_id: draft.commit_id,
        }
    }

    /// Number of context lines for the full diff.
    #[must_use]
    pub fn diff_unified(&self) -> i32 {
        self.diff_unified
    }

    /// Built-in exclusions followed by caller additions.
    #[must_use]
    pub fn exclude_list(&self) -> &[String] {
        &self.exclude_list
    }

    /// Whether amend mode is enabled.
    #[must_use]
    pub fn is_amend(&self) -> bool {
        self.is_amend
    }

    /// Tag prefix filter; empty when tag mode is off.
    #[must_use]
    pub fn diff_tag_prefix(&self) -> &str {
        &self.diff_tag_prefix
    }

    /// Reserved diff target list.
    #[must_use]
    pub fn diff_list(&self) -> &[String] {
        &self.diff_list
    }

    /// Commit identifier, if one was configured.
    #[must_use]
    pub fn commit_id(&self) -> Option<&str> {
        self.commit_id.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}
