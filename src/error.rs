use thiserror::Error;

/// Hard failures that surface to the user as a blocking error state.
///
/// Soft conditions never appear here: a sheet with no data rows yields an
/// empty table, skipped rows are dropped silently, and unparseable numeric
/// cells fall back to fixed defaults, so the dashboard always has
/// *something* to render once data arrives.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Network failure or non-success response fetching the sheet export.
    #[error("transport failure fetching sheet export: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("reading config {path}: {source}")]
    ConfigIo {
        path: String,
        source: std::io::Error,
    },

    #[error("parsing config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_yaml::Error,
    },
}
