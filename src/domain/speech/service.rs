use super::error::SpeechServiceError;
use super::fingerprint::fingerprint;
use super::voice::VoiceGender;
use crate::infrastructure::storage::ArtifactStore;
use crate::infrastructure::synthesis::SpeechSynthesizer;
use async_trait::async_trait;
use std::sync::Arc;

/// File extension under which every artifact is stored. Part of the external
/// naming contract: objects are addressed only as `<fingerprint>.mp3`.
const ARTIFACT_EXTENSION: &str = ".mp3";

/// A validated, defaulted synthesis request. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// Optional caller-supplied differentiator; empty when not supplied.
    pub session_key: String,
    pub text_payload: String,
    pub voice_gender: VoiceGender,
    pub voice_language_code: String,
}

/// Outcome of resolving a request against the artifact cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Object name in the bucket (`<fingerprint>.mp3`).
    pub object_name: String,
    /// True when the artifact already existed and no synthesis ran.
    pub served_by_cache: bool,
}

pub struct SpeechService {
    artifact_store: Arc<dyn ArtifactStore>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechService {
    pub fn new(
        artifact_store: Arc<dyn ArtifactStore>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            artifact_store,
            synthesizer,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Resolve a synthesis request to a stored artifact.
    ///
    /// Computes the content fingerprint, checks the store, and synthesizes
    /// and writes the audio only on a miss. The object name is a pure
    /// function of the request fields, so a hit never needs invalidation
    /// checks: any input change addresses a different object.
    ///
    /// Any storage or synthesis failure aborts the resolution; no partial
    /// object name is returned.
    async fn resolve_artifact(
        &self,
        request: &SynthesisRequest,
    ) -> Result<ResolvedArtifact, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn resolve_artifact(
        &self,
        request: &SynthesisRequest,
    ) -> Result<ResolvedArtifact, SpeechServiceError> {
        let digest = fingerprint(
            &request.session_key,
            &request.text_payload,
            request.voice_gender.as_str(),
            &request.voice_language_code,
        );
        let object_name = format!("{digest}{ARTIFACT_EXTENSION}");

        let exists = self
            .artifact_store
            .exists(&object_name)
            .await
            .map_err(SpeechServiceError::Storage)?;

        if exists {
            tracing::info!(
                object_name = %object_name,
                "artifact cache hit"
            );
            return Ok(ResolvedArtifact {
                object_name,
                served_by_cache: true,
            });
        }

        tracing::info!(
            object_name = %object_name,
            text_length = request.text_payload.len(),
            language = %request.voice_language_code,
            gender = %request.voice_gender,
            "artifact cache miss, synthesizing"
        );

        // Note: exists-then-put is not atomic across concurrent requests.
        // Two identical requests racing here may both synthesize and both
        // write, but the payload for a given object name is always the
        // same, so the duplicate write is a wasted synthesis call, not a
        // correctness problem.
        let audio = self
            .synthesizer
            .synthesize(
                &request.text_payload,
                &request.voice_language_code,
                request.voice_gender,
            )
            .await
            .map_err(SpeechServiceError::Synthesis)?;

        self.artifact_store
            .put(&object_name, audio)
            .await
            .map_err(SpeechServiceError::Storage)?;

        Ok(ResolvedArtifact {
            object_name,
            served_by_cache: false,
        })
    }
}
