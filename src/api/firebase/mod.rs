use crate::api::catalog::StorageBackend;
use crate::api::models::{Listing, StorageObject};
use crate::config::AppConfig;
use crate::error::ListingError;
use dioxus::logger::tracing::{debug, warn};
use serde::de::DeserializeOwned;

mod response_models;

use response_models::{ErrorEnvelope, ListResponse, ObjectMetadata};

/// Client for the Firebase Storage REST API. Built once by the app shell and
/// shared through context.
#[derive(Clone)]
pub struct FirebaseStorage {
    http: reqwest::Client,
    api_base: String,
    bucket: String,
}

impl FirebaseStorage {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http,
            api_base: config.storage_api.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
        }
    }

    fn objects_url(&self) -> String {
        format!(
            "{}/v0/b/{}/o",
            self.api_base,
            urlencoding::encode(&self.bucket)
        )
    }

    fn list_url(&self, prefix: &str, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}?prefix={}&delimiter=%2F",
            self.objects_url(),
            urlencoding::encode(prefix)
        );
        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
        }
        url
    }

    fn object_url(&self, full_path: &str) -> String {
        format!("{}/{}", self.objects_url(), urlencoding::encode(full_path))
    }

    fn media_url(&self, full_path: &str, token: &str) -> String {
        format!(
            "{}?alt=media&token={}",
            self.object_url(full_path),
            urlencoding::encode(token)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ListingError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = error_message(&body);
            warn!(status = status.as_u16(), %message, "storage request failed");
            return Err(ListingError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl StorageBackend for FirebaseStorage {
    async fn list(&self, prefix: &str) -> Result<Listing, ListingError> {
        let mut listing = Listing::default();
        let mut page_token: Option<String> = None;

        loop {
            let url = self.list_url(prefix, page_token.as_deref());
            let page: ListResponse = self.get_json(&url).await?;
            let next = page.next_page_token.clone().filter(|t| !t.is_empty());
            listing.extend(listing_from_page(page));

            match next {
                Some(token) => {
                    debug!(prefix, "following listing page token");
                    page_token = Some(token);
                }
                None => break,
            }
        }

        Ok(listing)
    }

    async fn download_url(&self, object: &StorageObject) -> Result<String, ListingError> {
        let metadata: ObjectMetadata = self.get_json(&self.object_url(&object.full_path)).await?;
        let token = metadata
            .first_download_token()
            .ok_or_else(|| ListingError::NoDownloadUrl(metadata.name.clone()))?;
        Ok(self.media_url(&object.full_path, token))
    }
}

fn listing_from_page(page: ListResponse) -> Listing {
    Listing {
        prefixes: page.prefixes,
        items: page
            .items
            .into_iter()
            .map(|item| StorageObject::new(item.name))
            .collect(),
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        })
}
