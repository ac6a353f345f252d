use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for an editing session, read from a JSON file.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial document text
    pub text: String,
    /// Selection used for copy and cut
    pub selection: [isize; 2],
    /// Caret position used before pasting
    pub paste_at: isize,
    /// Maximum number of undoable commands kept, unbounded if `None`
    pub history_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: String::from("Hello World"),
            selection: [6, 11],
            paste_at: 5,
            history_limit: None,
        }
    }
}

impl Config {
    /// Reads a [Config] from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read or is not a valid config
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
