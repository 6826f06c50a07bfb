use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::GenerativeProvider;

const API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const RATE_LIMIT_REPLY: &str =
    "Şu anda çok yoğunum, lütfen birkaç dakika sonra tekrar deneyin.";
pub const BAD_CREDENTIAL_REPLY: &str =
    "Bir yapılandırma sorunu nedeniyle şu anda yanıt veremiyorum.";
pub const SERVICE_ERROR_REPLY: &str =
    "Üzgünüm, yanıt servisinde bir sorun oluştu. Lütfen daha sonra tekrar deneyin.";
pub const CONNECTION_REPLY: &str =
    "Üzgünüm, yanıt servisine şu anda ulaşamıyorum. Lütfen daha sonra tekrar deneyin.";
pub const EMPTY_REPLY: &str = "Üzgünüm, ne demek istediğinizi anlayamadım.";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
    status: Option<String>,
}

pub struct GeminiProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn complete(&self, text: &str, hint: &str) -> String {
        let prompt = if hint.is_empty() {
            text.to_string()
        } else {
            format!("{hint}\n\nKullanıcı mesajı: {text}")
        };

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let url = format!("{API_URL}/{}:generateContent?key={}", self.model, self.api_key);

        let resp = match self.client.post(&url).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(error = %e, "failed to call generative API");
                return CONNECTION_REPLY.to_string();
            }
        };

        match resp.json::<GenerateResponse>().await {
            Ok(data) => reply_for(data),
            Err(e) => {
                tracing::error!(error = %e, "failed to parse generative API response");
                CONNECTION_REPLY.to_string()
            }
        }
    }
}

/// Map a decoded response to the user-facing reply. Structured service errors
/// become fixed, distinct apologies; a success without candidates becomes the
/// fixed "could not understand" string.
fn reply_for(resp: GenerateResponse) -> String {
    if let Some(err) = resp.error {
        let status = err.status.as_deref().unwrap_or("");
        tracing::warn!(
            code = err.code,
            status,
            message = %err.message,
            "generative API returned an error"
        );
        let reply = if err.code == 429 || status == "RESOURCE_EXHAUSTED" {
            RATE_LIMIT_REPLY
        } else if matches!(err.code, 400 | 401 | 403) {
            BAD_CREDENTIAL_REPLY
        } else {
            SERVICE_ERROR_REPLY
        };
        return reply.to_string();
    }

    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| EMPTY_REPLY.to_string())
}
