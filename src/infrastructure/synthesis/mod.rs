use crate::domain::speech::VoiceGender;
use crate::infrastructure::gcp::fetch_access_token;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

const TTS_SYNTHESIZE_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Port over the external voice-synthesis capability.
///
/// Opaque, potentially slow, potentially failing (quota, unknown language
/// code, outage). Failures surface verbatim; no retry happens here.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` to MP3 audio bytes.
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, String>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    ssml_gender: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

/// Google Cloud Text-to-Speech adapter over the REST surface.
pub struct GoogleTtsSynthesizer {
    http: reqwest::Client,
}

impl GoogleTtsSynthesizer {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn ssml_gender(gender: VoiceGender) -> &'static str {
        match gender {
            VoiceGender::Male => "MALE",
            VoiceGender::Female => "FEMALE",
            VoiceGender::Neutral => "NEUTRAL",
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, String> {
        let token = fetch_access_token(&self.http)
            .await
            .map_err(|e| format!("token fetch: {e:#}"))?;

        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code,
                ssml_gender: Self::ssml_gender(gender),
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };

        let response: SynthesizeResponse = self
            .http
            .post(TTS_SYNTHESIZE_URL)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("synthesize request: {e}"))?
            .error_for_status()
            .map_err(|e| format!("synthesize rejected: {e}"))?
            .json()
            .await
            .map_err(|e| format!("malformed synthesize response: {e}"))?;

        STANDARD
            .decode(response.audio_content)
            .map_err(|e| format!("audio content is not valid base64: {e}"))
    }
}
