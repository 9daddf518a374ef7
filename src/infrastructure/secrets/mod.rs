use crate::infrastructure::gcp::fetch_access_token;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AccessSecretResponse {
    payload: SecretPayload,
}

#[derive(Debug, Deserialize)]
struct SecretPayload {
    data: String,
}

/// Client for Google Secret Manager, used once at startup to fetch the
/// CDN URL signing key.
pub struct SecretManagerClient {
    http: reqwest::Client,
}

impl SecretManagerClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch the latest version of a secret and return its raw bytes.
    ///
    /// The Secret Manager REST API wraps the payload in standard base64;
    /// that envelope is stripped here. Whatever encoding the secret itself
    /// carries (the signing key is stored base64url-encoded at rest) is the
    /// caller's concern.
    pub async fn access_secret(
        &self,
        project_number: &str,
        secret_name: &str,
    ) -> anyhow::Result<Vec<u8>> {
        let token = fetch_access_token(&self.http).await?;
        let url = format!(
            "https://secretmanager.googleapis.com/v1/projects/{project_number}/secrets/{secret_name}/versions/latest:access"
        );

        let response: AccessSecretResponse = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .with_context(|| format!("secret access request failed for {secret_name}"))?
            .error_for_status()
            .with_context(|| format!("secret access rejected for {secret_name}"))?
            .json()
            .await
            .context("malformed secret access response")?;

        STANDARD
            .decode(response.payload.data)
            .context("secret payload is not valid base64")
    }
}
