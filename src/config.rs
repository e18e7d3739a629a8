//! The repository configuration file.
//!
//! One `key = value` setting per line. Whitespace around keys and values is
//! ignored, as are blank lines and lines starting with `#`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::repo::{Error, Result};

/// Key holding the name recorded on each commit.
pub const COMMITTER_KEY: &str = "name";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    values: BTreeMap<String, String>,
}

impl Config {
    /// Create a config holding just the committer name.
    pub fn with_committer<S: Into<String>>(name: S) -> Config {
        let mut config = Config::default();
        config.set(COMMITTER_KEY, name);
        config
    }

    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        Config::parse(path, &text)
    }

    /// Parse config text. `path` is used only for error reporting.
    pub fn parse(path: &Path, text: &str) -> Result<Config> {
        let mut config = Config::default();

        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| Error::Config {
                path: path.to_path_buf(),
                reason: format!("line {}: expected `key = value`", n + 1),
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(Error::Config {
                    path: path.to_path_buf(),
                    reason: format!("line {}: missing key", n + 1),
                });
            }

            config.set(key, value.trim());
        }

        Ok(config)
    }

    /// Write the config file to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|e| e.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Return the committer name.
    ///
    /// `path` is used only for error reporting if the name is missing or empty.
    pub fn committer(&self, path: &Path) -> Result<&str> {
        match self.get(COMMITTER_KEY) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(Error::Config {
                path: path.to_path_buf(),
                reason: format!("missing `{}`", COMMITTER_KEY),
            }),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.values {
            writeln!(f, "{} = {}", key, value)?;
        }
        Ok(())
    }
}
