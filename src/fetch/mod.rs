pub mod urls;

use reqwest::Client;
use tracing::info;

use crate::error::DashboardError;

/// Fetch the published CSV body for the sheet.
///
/// A network failure or non-success status surfaces as
/// [`DashboardError::Transport`]; there is no automatic retry. The caller
/// short-circuits on failure, leaving its previous tree untouched.
pub async fn fetch_sheet_csv(client: &Client, url: &str) -> Result<String, DashboardError> {
    info!(%url, "fetching sheet export");
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    info!(bytes = body.len(), "fetched sheet export");
    Ok(body)
}
