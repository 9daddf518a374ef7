use serde::{Deserialize, Serialize};

/// Request body for POST /getSpeech.
///
/// Field names are part of the external contract. Absent fields deserialize
/// to empty strings; the controller treats empty as "not supplied" and
/// applies the configured defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GetSpeechRequest {
    #[serde(rename = "TextPayload", default)]
    pub text_payload: String,
    #[serde(rename = "VoiceLanguageCode", default)]
    pub voice_language_code: String,
    #[serde(rename = "VoiceGender", default)]
    pub voice_gender: String,
    #[serde(rename = "SessionKey", default)]
    pub session_key: String,
}

/// Success envelope for POST /getSpeech.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetSpeechResponse {
    #[serde(rename = "httpCode")]
    pub http_code: u16,
    #[serde(rename = "audioURL")]
    pub audio_url: String,
    #[serde(rename = "servedByCache")]
    pub served_by_cache: bool,
}
