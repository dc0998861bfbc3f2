use reqwest::Client;
use serde_json::Value;

use crate::models::DirectoryError;

/// Fetch the raw union payload from the configured API endpoint.
///
/// One GET, no retries. A non-success status or an unparsable body is a
/// [`DirectoryError::Fetch`]; the payload shape is otherwise not inspected here.
/// Any response caching belongs to the HTTP layer, not this pipeline.
pub async fn fetch_payload(client: &Client, endpoint: &str) -> Result<Value, DirectoryError> {
    let response = client
        .get(endpoint)
        .header("User-Agent", "cu-directory/0.1.0")
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DirectoryError::Fetch(format!(
            "API responded with status {}",
            status
        )));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| DirectoryError::Fetch(format!("invalid JSON body: {}", e)))
}
