use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub wit_token: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let wit_token = env::var("WIT_AI_TOKEN")
            .context("WIT_AI_TOKEN must be set (intent classification credential)")?;
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY must be set (generative fallback credential)")?;
        anyhow::ensure!(!wit_token.trim().is_empty(), "WIT_AI_TOKEN must not be empty");
        anyhow::ensure!(
            !gemini_api_key.trim().is_empty(),
            "GEMINI_API_KEY must not be empty"
        );

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            wit_token,
            gemini_api_key,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
        })
    }
}
