use url::Url;

use crate::config::Config;
use crate::error::DashboardError;

/// CSV export URL for one tab of a published Google Sheet.
pub fn sheet_export_url(sheet_id: &str, gid: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
        sheet_id, gid
    )
}

/// Wrap `target` in a CORS proxy hop, percent-encoded as the proxy's `url`
/// query parameter.
pub fn proxied_url(proxy_base: &str, target: &str) -> Result<String, DashboardError> {
    let url = Url::parse_with_params(proxy_base, &[("url", target)])?;
    Ok(url.to_string())
}

/// The URL the dashboard actually fetches: the sheet export, optionally
/// routed through the configured proxy.
pub fn resolve_fetch_url(config: &Config) -> Result<String, DashboardError> {
    let export = sheet_export_url(&config.sheet_id, &config.gid);
    match &config.proxy {
        Some(proxy_base) => proxied_url(proxy_base, &export),
        None => Ok(export),
    }
}
