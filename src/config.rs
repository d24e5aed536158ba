//! Credentials and endpoint settings, stored as json.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::*;

pub const DEFAULT_BASE_URL: &str = "https://api.tempo.io/core/3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct Config {
    /// Tempo API bearer token.
    pub token: String,
    /// Atlassian account id, used as plan owner and worklog author.
    #[serde(alias = "username")]
    pub account_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            account_id: String::new(),
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.token.chars().count();
        let masked = if count > 4 {
            format!("****{}", self.token.chars().skip(count - 4).collect::<String>())
        } else if count == 0 {
            "<unset>".to_string()
        } else {
            "****".to_string()
        };
        writeln!(f, "Account id: {}", self.account_id)?;
        writeln!(f, "    Token: {}", masked)?;
        write!(f, "    Api: {} (timeout {}s)", self.base_url, self.timeout)
    }
}

impl Config {
    /// `~/.config/tempo/config.json` or the platform equivalent.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| eyre!("Could not find a config directory"))?;
        Ok(dir.join("tempo").join("config.json"))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(UsageError::NoConfig(path.as_ref().display().to_string()).into());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to open {:?}", path.as_ref()))
            }
        };
        let mut reader = BufReader::new(file);
        let config = Self::from_reader(&mut reader)
            .wrap_err_with(|| format!("Failed to read config {:?}", path.as_ref()))?;
        log::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Writes the config, creating parent directories as needed.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {:?}", parent))?;
        }
        let mut file = File::create(&path)
            .wrap_err_with(|| format!("Failed to create {:?}", path.as_ref()))?;
        self.write(&mut file)?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Checks that the fields needed for any request are set.
    pub fn validate(&self) -> std::result::Result<(), UsageError> {
        if self.token.trim().is_empty() {
            return Err(UsageError::IncompleteConfig("token"));
        }
        if self.account_id.trim().is_empty() {
            return Err(UsageError::IncompleteConfig("account id"));
        }
        Ok(())
    }
}
