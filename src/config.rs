use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::process::TableShape;

/// Published tracking sheet the dashboard reads by default.
pub const DEFAULT_SHEET_ID: &str = "1pcIGFJ7znGwlS0mwFwNGM1XUHf2Z_9NhbQ9wUSFeHI4";
pub const DEFAULT_SHEET_GID: &str = "493994318";

/// CORS proxy the browser build routes through. Server-side fetches work
/// without it, so it is opt-in here.
pub const DEFAULT_PROXY_BASE: &str = "https://api.allorigins.win/raw";

/// Runtime configuration, loaded from a YAML file. Every field has a
/// compiled-in default so a partial (or absent) file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet_id: String,
    pub gid: String,
    /// Proxy base URL to route the export fetch through; `None` fetches
    /// the export URL directly.
    pub proxy: Option<String>,
    /// Layout of the sheet tab being ingested.
    pub shape: TableShape,
    /// Where to write the JSON snapshot consumed by the presentation
    /// layer; `None` skips the snapshot.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            gid: DEFAULT_SHEET_GID.to_string(),
            proxy: None,
            shape: TableShape::Wide,
            snapshot_path: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let text = fs::read_to_string(path).map_err(|source| DashboardError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| DashboardError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, DashboardError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_the_published_sheet() {
        let config = Config::default();
        assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
        assert_eq!(config.gid, DEFAULT_SHEET_GID);
        assert_eq!(config.proxy, None);
        assert_eq!(config.shape, TableShape::Wide);
        assert_eq!(config.snapshot_path, None);
    }

    #[test]
    fn partial_yaml_fills_missing_fields_with_defaults() {
        let config: Config = serde_yaml::from_str("shape: long\n").unwrap();
        assert_eq!(config.shape, TableShape::Long);
        assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
    }

    #[test]
    fn loads_from_a_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "sheet_id: abc123\ngid: '42'\nproxy: {}\nshape: long\n",
            DEFAULT_PROXY_BASE
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.sheet_id, "abc123");
        assert_eq!(config.gid, "42");
        assert_eq!(config.proxy.as_deref(), Some(DEFAULT_PROXY_BASE));
        assert_eq!(config.shape, TableShape::Long);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load(Path::new("/nonexistent/rollout.yaml")).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigIo { .. }));
    }

    #[test]
    fn no_path_falls_back_to_defaults() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }
}
