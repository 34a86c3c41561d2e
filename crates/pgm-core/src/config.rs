//! Connection parameter bag and environment-file parsing.
//!
//! Connection sources are framework-style YAML files keyed by environment
//! (the Rails `database.yml` shape), translated into a [`ConnectParams`]
//! bag. The bag is rendered to a libpq keyword/value string and handed to
//! the driver unmodified.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Database connection parameters.
///
/// Only the keys the engine recognizes are typed; anything else rides in
/// `extra` and is appended verbatim to the connection string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectParams {
    /// Server hostname
    pub host: Option<String>,

    /// Server port
    pub port: Option<u16>,

    /// Database name
    pub dbname: Option<String>,

    /// Login user
    pub user: Option<String>,

    /// Login password
    pub password: Option<String>,

    /// Additional libpq key/value pairs passed through untouched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

/// One environment block in a framework-style config file.
///
/// Unknown keys (`adapter`, `pool`, ...) are ignored rather than passed on:
/// libpq rejects keywords it does not know.
#[derive(Debug, Deserialize)]
struct EnvEntry {
    database: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
}

impl ConnectParams {
    /// Load connection parameters from a YAML file keyed by environment.
    ///
    /// `database` is required and maps to `dbname`; `host`, `port`,
    /// `username` (as `user`), and `password` are copied when present.
    pub fn from_env_file(path: &Path, environment: &str) -> CoreResult<Self> {
        if !path.is_file() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let text = fs::read_to_string(path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;

        let environments: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&text)?;
        let Some(value) = environments.get(environment) else {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "no environment '{}' found in config file: {}",
                    environment,
                    path.display()
                ),
            });
        };

        let entry: EnvEntry = serde_yaml::from_value(value.clone())?;
        let Some(dbname) = entry.database else {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "no database key found in {} with environment {}",
                    path.display(),
                    environment
                ),
            });
        };

        Ok(Self {
            host: entry.host,
            port: entry.port,
            dbname: Some(dbname),
            user: entry.username,
            password: entry.password,
            extra: Vec::new(),
        })
    }

    /// Render a libpq keyword/value connection string.
    pub fn to_connection_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(host) = &self.host {
            parts.push(format!("host={}", quote_value(host)));
        }
        if let Some(port) = self.port {
            parts.push(format!("port={}", port));
        }
        if let Some(dbname) = &self.dbname {
            parts.push(format!("dbname={}", quote_value(dbname)));
        }
        if let Some(user) = &self.user {
            parts.push(format!("user={}", quote_value(user)));
        }
        if let Some(password) = &self.password {
            parts.push(format!("password={}", quote_value(password)));
        }
        for (key, value) in &self.extra {
            parts.push(format!("{}={}", key, quote_value(value)));
        }
        parts.join(" ")
    }
}

/// Quote a connection-string value when it needs it.
///
/// libpq syntax: single-quote values containing whitespace, quotes, or
/// backslashes, escaping embedded `\` and `'` with a backslash.
fn quote_value(value: &str) -> String {
    if value.is_empty()
        || value.contains(|c: char| c.is_whitespace() || c == '\'' || c == '\\')
    {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
