//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Read an environment variable, treating non-UTF-8 values as unset.
///
/// Passed wherever configuration resolution depends on the environment,
/// so tests can substitute a fixed lookup.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/src/content/blog/  ← start
/// /home/user/blog/quill.toml         ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/content/blog");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("quill.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("quill.toml")).unwrap();
        assert_eq!(found, temp.path().join("quill.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file(temp.path(), Path::new("quill-missing-7f3a.toml")).is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        assert!(find_config_file(Path::new("/"), &path).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path.clone()));
    }
}
