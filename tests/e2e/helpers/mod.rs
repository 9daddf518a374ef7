pub mod api_client;
pub mod fakes;

pub use api_client::TestClient;
pub use fakes::{
    FailingArtifactStore, FailingSynthesizer, InMemoryArtifactStore, RecordingSynthesizer,
};

use get_speech_service::controllers::SpeechController;
use get_speech_service::domain::speech::{SpeechService, UrlSigner, VoiceGender};
use get_speech_service::infrastructure::config::{Config, LogFormat};
use get_speech_service::infrastructure::http::build_router;
use get_speech_service::infrastructure::storage::ArtifactStore;
use get_speech_service::infrastructure::synthesis::SpeechSynthesizer;
use std::net::SocketAddr;
use std::sync::Arc;

/// CDN endpoint prefix configured for tests, scheme and trailing slash
/// included, the way deployments set CLOUD_CDN_ENDPOINT_FQDN.
pub const TEST_CDN_ENDPOINT: &str = "https://cdn.example.com/";

/// "super-secret-signing-key" in base64url, the at-rest form Secret Manager
/// hands back.
pub const SIGNING_KEY_B64URL: &[u8] = b"c3VwZXItc2VjcmV0LXNpZ25pbmcta2V5";

pub const TEST_KEY_NAME: &str = "test-key";

pub fn test_config() -> Config {
    Config {
        project_id: "test-project".to_string(),
        project_number: "123456".to_string(),
        bucket_name: "test-bucket".to_string(),
        signing_key_secret_name: "signing-key".to_string(),
        signed_url_key_name: TEST_KEY_NAME.to_string(),
        cdn_endpoint: TEST_CDN_ENDPOINT.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        default_language_code: "en-GB".to_string(),
        default_voice_gender: VoiceGender::Neutral,
        signed_url_ttl_hours: 24,
        log_format: LogFormat::Pretty,
    }
}

pub struct TestApp {
    pub client: TestClient,
    pub store: Arc<InMemoryArtifactStore>,
    pub synthesizer: Arc<RecordingSynthesizer>,
}

/// Spawn the service with fresh in-memory fakes.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(InMemoryArtifactStore::new());
    let synthesizer = Arc::new(RecordingSynthesizer::new());
    let client = spawn_with(store.clone(), synthesizer.clone()).await;

    TestApp {
        client,
        store,
        synthesizer,
    }
}

/// Spawn the service with caller-supplied port implementations.
pub async fn spawn_with(
    store: Arc<dyn ArtifactStore>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> TestClient {
    let config = Arc::new(test_config());
    let service = Arc::new(SpeechService::new(store, synthesizer));
    let signer = Arc::new(UrlSigner::new(TEST_KEY_NAME, SIGNING_KEY_B64URL).unwrap());
    let controller = Arc::new(SpeechController::new(service, signer, config));
    let router = build_router(controller);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    TestClient::new(&format!("http://{addr}"))
}
