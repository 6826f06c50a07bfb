pub mod wit;

use async_trait::async_trait;

use crate::models::ClassifierResult;

#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> anyhow::Result<ClassifierResult>;
}
