pub mod dto;
pub mod error;
pub mod fingerprint;
pub mod service;
pub mod signer;
pub mod voice;

pub use fingerprint::fingerprint;
pub use service::{ResolvedArtifact, SpeechService, SpeechServiceApi, SynthesisRequest};
pub use signer::UrlSigner;
pub use voice::VoiceGender;
