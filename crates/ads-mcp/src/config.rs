//! Client configuration file loading.
//!
//! The file is read once at startup. JSON is the default format; files ending in
//! `.yaml`/`.yml` are parsed as YAML.

use crate::error::ConfigError;
use crate::tenant::{Snapshot, TenantRecord};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/client_config.json";

/// On-disk shape of the client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfigFile {
    #[serde(default)]
    pub clients: HashMap<String, ClientEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientEntry {
    pub name: String,
    #[serde(default)]
    pub active: bool,
    pub google_ads: GoogleAdsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleAdsConfig {
    /// Numeric ids are accepted and kept in their decimal form.
    #[serde(deserialize_with = "string_or_number")]
    pub customer_id: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Uint(u64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Uint(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

impl ClientConfigFile {
    /// Parse the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config document.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if is_yaml(path) {
            serde_yaml::from_slice(&bytes).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_json::from_slice(&bytes).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::new(self.clients.into_iter().map(|(id, entry)| TenantRecord {
            id,
            name: entry.name,
            active: entry.active,
            google_ads: entry.google_ads,
        }))
    }
}

/// Load a snapshot, failing on any read or parse error.
///
/// # Errors
///
/// Returns the underlying [`ConfigError`].
pub fn try_load(path: &Path) -> Result<Snapshot, ConfigError> {
    ClientConfigFile::read(path).map(ClientConfigFile::into_snapshot)
}

/// Load a snapshot, degrading to zero tenants when the file is missing or malformed.
#[must_use]
pub fn load(path: &Path) -> Snapshot {
    match try_load(path) {
        Ok(snapshot) => {
            tracing::info!(
                path = %path.display(),
                clients = snapshot.len(),
                "loaded client configuration"
            );
            snapshot
        }
        Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::error!(path = %path.display(), "client config file not found");
            Snapshot::default()
        }
        Err(e) => {
            tracing::error!(error = %e, "error loading client config");
            Snapshot::default()
        }
    }
}
