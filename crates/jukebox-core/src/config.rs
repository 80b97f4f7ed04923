use std::path::{Path, PathBuf};

pub const JSON_CONFIG_FILE: &str = "new_config.json";
pub const YAML_CONFIG_FILE: &str = "new_config.yaml";

/// The two configuration files the bootstrap looks for, in probe order.
///
/// Only existence is checked here; parsing the file that is found is the
/// application's job, not the bootstrap's.
#[derive(Debug, Clone)]
pub struct ConfigCandidates {
    json: PathBuf,
    yaml: PathBuf,
}

impl Default for ConfigCandidates {
    fn default() -> Self {
        Self {
            json: PathBuf::from(JSON_CONFIG_FILE),
            yaml: PathBuf::from(YAML_CONFIG_FILE),
        }
    }
}

impl ConfigCandidates {
    /// Candidates rooted at an explicit directory instead of the working
    /// directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            json: dir.join(JSON_CONFIG_FILE),
            yaml: dir.join(YAML_CONFIG_FILE),
        }
    }

    /// True if either candidate exists, probing the JSON path first.
    /// Filesystem errors count as absence.
    pub fn any_present(&self) -> bool {
        if self.json.exists() {
            log::debug!("config detected at {}", self.json.display());
            return true;
        }
        if self.yaml.exists() {
            log::debug!("config detected at {}", self.yaml.display());
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn absent_when_neither_file_exists() {
        let dir = tempdir().expect("tempdir");
        assert!(!ConfigCandidates::in_dir(dir.path()).any_present());
    }

    #[test]
    fn present_when_json_exists() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(JSON_CONFIG_FILE), "{}").expect("write");
        assert!(ConfigCandidates::in_dir(dir.path()).any_present());
    }

    #[test]
    fn present_when_yaml_exists() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(YAML_CONFIG_FILE), "").expect("write");
        assert!(ConfigCandidates::in_dir(dir.path()).any_present());
    }

    #[test]
    fn present_when_both_exist() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(JSON_CONFIG_FILE), "{}").expect("write");
        fs::write(dir.path().join(YAML_CONFIG_FILE), "").expect("write");
        assert!(ConfigCandidates::in_dir(dir.path()).any_present());
    }
}
