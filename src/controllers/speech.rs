use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::{
    domain::speech::{
        dto::{GetSpeechRequest, GetSpeechResponse},
        SpeechService, SpeechServiceApi, SynthesisRequest, UrlSigner, VoiceGender,
    },
    error::{AppError, AppResult},
    infrastructure::config::Config,
};

pub struct SpeechController {
    service: Arc<SpeechService>,
    signer: Arc<UrlSigner>,
    config: Arc<Config>,
}

impl SpeechController {
    pub fn new(service: Arc<SpeechService>, signer: Arc<UrlSigner>, config: Arc<Config>) -> Self {
        Self {
            service,
            signer,
            config,
        }
    }

    /// POST /getSpeech - resolve text to a cached audio artifact and return
    /// a signed URL for it
    pub async fn get_speech(
        State(controller): State<Arc<SpeechController>>,
        payload: Result<Json<GetSpeechRequest>, JsonRejection>,
    ) -> AppResult<Json<GetSpeechResponse>> {
        let Json(request) =
            payload.map_err(|_| AppError::BadRequest("Invalid request body".to_string()))?;

        if request.text_payload.is_empty() {
            return Err(AppError::BadRequest(
                "The 'TextPayload' field was missing from the request body".to_string(),
            ));
        }

        let voice_language_code = if request.voice_language_code.is_empty() {
            controller.config.default_language_code.clone()
        } else {
            request.voice_language_code
        };

        // Validate against the permitted set, case-insensitively; omitted
        // falls back to the configured default. The normalized lowercase
        // form feeds the fingerprint, so "Female" and "female" address the
        // same artifact.
        let voice_gender = if request.voice_gender.is_empty() {
            controller.config.default_voice_gender
        } else {
            VoiceGender::parse(&request.voice_gender).ok_or_else(|| {
                AppError::BadRequest("The 'VoiceGender' specified was invalid".to_string())
            })?
        };

        let synthesis_request = SynthesisRequest {
            session_key: request.session_key,
            text_payload: request.text_payload,
            voice_gender,
            voice_language_code,
        };

        let resolved = controller
            .service
            .resolve_artifact(&synthesis_request)
            .await?;

        let resource_url = format!("{}{}", controller.config.cdn_endpoint, resolved.object_name);
        let expires_at = Utc::now() + Duration::hours(controller.config.signed_url_ttl_hours);
        let audio_url = controller.signer.sign(&resource_url, expires_at);

        Ok(Json(GetSpeechResponse {
            http_code: StatusCode::OK.as_u16(),
            audio_url,
            served_by_cache: resolved.served_by_cache,
        }))
    }

    /// OPTIONS /getSpeech - CORS preflight, answered before any body parsing
    pub async fn preflight() -> StatusCode {
        StatusCode::NO_CONTENT
    }

    /// Any other method on /getSpeech
    pub async fn method_not_allowed() -> AppError {
        AppError::MethodNotAllowed("This endpoint only accepts POST requests".to_string())
    }

    /// Any unmatched path
    pub async fn not_found() -> AppError {
        AppError::NotFound("Not Found".to_string())
    }
}
