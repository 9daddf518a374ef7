use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use get_speech_service::controllers::SpeechController;
use get_speech_service::domain::speech::{SpeechService, UrlSigner};
use get_speech_service::infrastructure::config::{Config, LogFormat};
use get_speech_service::infrastructure::http::start_http_server;
use get_speech_service::infrastructure::secrets::SecretManagerClient;
use get_speech_service::infrastructure::storage::GcsArtifactStore;
use get_speech_service::infrastructure::synthesis::GoogleTtsSynthesizer;
use object_store::gcp::GoogleCloudStorageBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; missing required variables abort startup
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting get-speech-service on {}:{}",
        config.host,
        config.port
    );

    let http_client = reqwest::Client::new();

    // Fetch the CDN URL signing key; fatal if the secret is unreachable
    let secrets = SecretManagerClient::new(http_client.clone());
    let encoded_signing_key = secrets
        .access_secret(&config.project_number, &config.signing_key_secret_name)
        .await
        .map_err(|e| format!("Unable to fetch Cloud CDN signing key: {e:#}"))?;
    tracing::info!(
        secret_name = %config.signing_key_secret_name,
        "CDN signing key fetched"
    );

    let signer = Arc::new(UrlSigner::new(
        config.signed_url_key_name.clone(),
        &encoded_signing_key,
    )?);

    // Artifact bucket
    let gcs = GoogleCloudStorageBuilder::new()
        .with_bucket_name(config.bucket_name.clone())
        .build()?;
    let artifact_store = Arc::new(GcsArtifactStore::new(Arc::new(gcs)));
    tracing::info!(bucket = %config.bucket_name, "artifact store initialized");

    let synthesizer = Arc::new(GoogleTtsSynthesizer::new(http_client));

    let config = Arc::new(config);

    let speech_service = Arc::new(SpeechService::new(artifact_store, synthesizer));
    let speech_controller = Arc::new(SpeechController::new(
        speech_service,
        signer,
        config.clone(),
    ));

    start_http_server(config, speech_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "get_speech_service=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "get_speech_service=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
