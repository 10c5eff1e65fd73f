//! Editing branch resolution.
//!
//! Hosting providers expose the branch being built under different
//! variable names; the first non-empty one wins.

/// Branch used when neither the config nor the environment names one.
pub const DEFAULT_BRANCH: &str = "main";

/// Variables checked when `branch_env` is not configured.
pub fn default_branch_env() -> Vec<String> {
    vec!["HEAD".to_string(), "VERCEL_GIT_COMMIT_REF".to_string()]
}

/// Resolve the branch: `explicit`, else the first non-empty variable in
/// `vars`, else [`DEFAULT_BRANCH`].
pub fn resolve_branch<F>(explicit: Option<&str>, vars: &[String], lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(branch) = explicit.map(str::trim).filter(|b| !b.is_empty()) {
        return branch.to_string();
    }

    for var in vars {
        if let Some(value) = lookup(var) {
            let value = value.trim();
            if !value.is_empty() {
                crate::debug!("config"; "branch `{}` taken from ${}", value, var);
                return value.to_string();
            }
        }
    }

    DEFAULT_BRANCH.to_string()
}
