use async_trait::async_trait;
use get_speech_service::domain::speech::VoiceGender;
use get_speech_service::infrastructure::storage::ArtifactStore;
use get_speech_service::infrastructure::synthesis::SpeechSynthesizer;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const FAKE_AUDIO: &[u8] = b"ID3-test-audio";

/// In-memory artifact store with write counting.
#[derive(Default)]
pub struct InMemoryArtifactStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    puts: AtomicUsize,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_names(&self) -> Vec<String> {
        self.objects.lock().keys().cloned().collect()
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn exists(&self, object_name: &str) -> Result<bool, String> {
        Ok(self.objects.lock().contains_key(object_name))
    }

    async fn put(&self, object_name: &str, data: Vec<u8>) -> Result<(), String> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.objects.lock().insert(object_name.to_string(), data);
        Ok(())
    }
}

/// Synthesizer fake that counts invocations and returns a fixed payload.
#[derive(Default)]
pub struct RecordingSynthesizer {
    calls: AtomicUsize,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _language_code: &str,
        _gender: VoiceGender,
    ) -> Result<Vec<u8>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FAKE_AUDIO.to_vec())
    }
}

/// Synthesizer that always fails, as a quota-exhausted provider would.
pub struct FailingSynthesizer;

#[async_trait]
impl SpeechSynthesizer for FailingSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _language_code: &str,
        _gender: VoiceGender,
    ) -> Result<Vec<u8>, String> {
        Err("synthesis quota exceeded".to_string())
    }
}

/// Store whose existence checks fail, as an unreachable bucket would.
pub struct FailingArtifactStore;

#[async_trait]
impl ArtifactStore for FailingArtifactStore {
    async fn exists(&self, _object_name: &str) -> Result<bool, String> {
        Err("bucket unreachable".to_string())
    }

    async fn put(&self, _object_name: &str, _data: Vec<u8>) -> Result<(), String> {
        Err("bucket unreachable".to_string())
    }
}
