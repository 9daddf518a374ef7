use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("artifact store error: {0}")]
    Storage(String),
    #[error("synthesis error: {0}")]
    Synthesis(String),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        // Collaborator failures stay server-side; callers get a generic
        // message while the cause is logged by the error response path.
        tracing::error!(error = %err, "speech resolution failed");
        AppError::ExternalService("There was an error fetching the audio URL".to_string())
    }
}
