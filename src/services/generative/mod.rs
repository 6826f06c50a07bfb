pub mod gemini;

use async_trait::async_trait;

/// Open-ended reply generation for turns outside the appointment flow.
///
/// Implementations never fail: known service error categories are mapped to
/// fixed user-facing strings internally, so the returned text is always
/// suitable to show the user as-is.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    async fn complete(&self, text: &str, hint: &str) -> String;
}
