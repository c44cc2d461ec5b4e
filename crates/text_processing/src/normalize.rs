//! Transcript normalization

/// Lower-case a transcript; every other stage reads this form
pub fn normalize(transcript: &str) -> String {
    transcript.to_lowercase()
}
