use std::fmt;

/// Voice gender requested for synthesis.
///
/// The wire value is case-insensitive; the canonical lowercase form is what
/// participates in fingerprints and object names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceGender {
    Male,
    Female,
    Neutral,
}

impl VoiceGender {
    /// Parse a caller-supplied gender, case-insensitively.
    /// Returns `None` for anything outside the permitted set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Canonical lowercase form, stable across releases (part of the
    /// fingerprint contract).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
