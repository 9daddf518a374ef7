use anyhow::Context;
use serde::Deserialize;

/// Metadata-server token endpoint, available to the service's runtime
/// identity on GCP (Cloud Run, GCE).
const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Fetch an OAuth access token for the default service account.
pub async fn fetch_access_token(client: &reqwest::Client) -> anyhow::Result<String> {
    let response = client
        .get(METADATA_TOKEN_URL)
        .header("Metadata-Flavor", "Google")
        .send()
        .await
        .context("metadata server unreachable")?
        .error_for_status()
        .context("metadata token request rejected")?;

    let token: TokenResponse = response
        .json()
        .await
        .context("malformed metadata token response")?;

    Ok(token.access_token)
}
