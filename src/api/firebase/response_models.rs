// Firebase Storage REST payloads.
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub items: Vec<ItemRef>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ItemRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub name: String,
    /// Comma-separated list; the first token is the one the SDK hands out.
    #[serde(default)]
    pub download_tokens: Option<String>,
}

impl ObjectMetadata {
    pub fn first_download_token(&self) -> Option<&str> {
        self.download_tokens
            .as_deref()?
            .split(',')
            .map(str::trim)
            .find(|token| !token.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
