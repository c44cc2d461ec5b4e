//! Speech capture trait

use async_trait::async_trait;

use crate::Result;

/// One-shot speech capture
///
/// Implementations wrap whatever recognizer the host provides (browser speech
/// API bridge, local STT, a scripted source in tests).
///
/// # Example
///
/// ```ignore
/// let source: Arc<dyn TranscriptSource> = Arc::new(BrowserBridge::new());
/// if let Some(text) = source.capture("en-US").await? {
///     println!("Heard: {}", text);
/// }
/// ```
#[async_trait]
pub trait TranscriptSource: Send + Sync + 'static {
    /// Capture a single utterance
    ///
    /// # Arguments
    /// * `language` - BCP-47 language tag for recognition (e.g. `en-US`)
    ///
    /// # Returns
    /// `Some(transcript)` when speech was recognized, `None` when the
    /// capture ended without a result
    async fn capture(&self, language: &str) -> Result<Option<String>>;

    /// Get source name for logging
    fn name(&self) -> &str;
}
