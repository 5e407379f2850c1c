//! Settings for the `running_average` command line tool.

use std::{fs, path::Path, str::FromStr};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of most recent samples the statistics cover
    pub capacity: usize,
    /// Print the statistics after every N samples, 0 prints them once at the end
    pub report_every: usize,
    /// Pre-seed the window before any samples are read
    pub fill: Option<Fill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fill {
    pub value: f64,
    pub count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 10,
            report_every: 1,
            fill: None,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
