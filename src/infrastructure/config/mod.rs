use crate::domain::speech::VoiceGender;
use std::env;

/// Immutable runtime configuration, built once in `main` from the
/// environment and shared read-only across request tasks.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: String,
    pub project_number: String,
    pub bucket_name: String,
    pub signing_key_secret_name: String,
    pub signed_url_key_name: String,
    /// Prefix prepended verbatim to object names when building artifact
    /// URLs; deployments configure it with scheme and trailing slash,
    /// e.g. `https://cdn.example.com/`.
    pub cdn_endpoint: String,
    pub host: String,
    pub port: u16,
    pub default_language_code: String,
    pub default_voice_gender: VoiceGender,
    pub signed_url_ttl_hours: i64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let default_voice_gender = match env::var("DEFAULT_VOICE_GENDER") {
            Ok(value) => VoiceGender::parse(&value).ok_or_else(|| {
                format!("DEFAULT_VOICE_GENDER must be one of male, female, neutral (got '{value}')")
            })?,
            Err(_) => VoiceGender::Neutral,
        };

        let config = Config {
            project_id: required("GOOGLE_CLOUD_PROJECT")?,
            project_number: required("GOOGLE_CLOUD_PROJECT_NUMBER")?,
            bucket_name: required("GCS_BUCKET_NAME")?,
            signing_key_secret_name: required("CLOUD_CDN_SIGNING_KEY_SECRET_NAME")?,
            signed_url_key_name: required("CLOUD_CDN_SIGNED_URL_KEY_NAME")?,
            cdn_endpoint: required("CLOUD_CDN_ENDPOINT_FQDN")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "80".to_string())
                .parse()?,
            default_language_code: env::var("DEFAULT_LANGUAGE_CODE")
                .unwrap_or_else(|_| "en-GB".to_string()),
            default_voice_gender,
            signed_url_ttl_hours: env::var("SIGNED_URL_TTL_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }
}

fn required(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    env::var(name).map_err(|_| format!("{name} environment variable not set").into())
}
