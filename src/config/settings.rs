use std::path::PathBuf;

/// GitHub Actions exposes the step summary file through this variable.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Runtime configuration, resolved once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Step summary file that rendered Markdown is appended to (None = stdout)
    pub step_summary: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let step_summary = lookup(STEP_SUMMARY_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { step_summary }
    }

    pub fn with_step_summary(mut self, path: Option<PathBuf>) -> Self {
        self.step_summary = path;
        self
    }
}
