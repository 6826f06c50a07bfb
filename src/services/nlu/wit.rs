use anyhow::Context;
use async_trait::async_trait;

use super::IntentClassifier;
use crate::models::ClassifierResult;

const API_URL: &str = "https://api.wit.ai/message";
const API_VERSION: &str = "20240601";

pub struct WitClient {
    token: String,
    client: reqwest::Client,
}

impl WitClient {
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IntentClassifier for WitClient {
    async fn classify(&self, text: &str) -> anyhow::Result<ClassifierResult> {
        let resp = self
            .client
            .get(API_URL)
            .query(&[("v", API_VERSION), ("q", text)])
            .bearer_auth(&self.token)
            .send()
            .await
            .context("failed to call intent classification API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse intent classification response")?;

        if !status.is_success() {
            anyhow::bail!("intent classification API error ({}): {}", status, data);
        }

        serde_json::from_value(data).context("unexpected intent classification payload")
    }
}
