//! Build- and run-time configuration for the storage bucket and the agreement gate.

use serde::{Deserialize, Serialize};

const DEFAULT_BUCKET: &str = "faithflow-15535.firebasestorage.app";
const DEFAULT_STORAGE_API: &str = "https://firebasestorage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Folder whose direct children are the sections. Empty means the bucket root.
    #[serde(default)]
    pub root: String,
    #[serde(default = "default_storage_api")]
    pub storage_api: String,
    /// When set, agreeing POSTs to this endpoint and the gate only opens on a 2xx.
    #[serde(default)]
    pub gate_url: Option<String>,
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_storage_api() -> String {
    DEFAULT_STORAGE_API.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            root: String::new(),
            storage_api: default_storage_api(),
            gate_url: None,
        }
    }
}

impl AppConfig {
    /// Values baked in at compile time, then (on native targets) overridden by
    /// the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply(compile_time_value);
        #[cfg(not(target_arch = "wasm32"))]
        config.apply(|key| std::env::var(key).ok());
        config.normalized()
    }

    fn apply(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(bucket) = lookup("FAITHFLOW_BUCKET") {
            self.bucket = bucket;
        }
        if let Some(root) = lookup("FAITHFLOW_ROOT") {
            self.root = root;
        }
        if let Some(api) = lookup("FAITHFLOW_STORAGE_API") {
            self.storage_api = api;
        }
        if let Some(url) = lookup("FAITHFLOW_GATE_URL") {
            self.gate_url = Some(url);
        }
    }

    pub fn normalized(mut self) -> Self {
        self.bucket = self.bucket.trim().to_string();
        self.root = self.root.trim().trim_matches('/').to_string();
        self.storage_api = self.storage_api.trim().trim_end_matches('/').to_string();
        self.gate_url = self
            .gate_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        self
    }
}

fn compile_time_value(key: &str) -> Option<String> {
    let value = match key {
        "FAITHFLOW_BUCKET" => option_env!("FAITHFLOW_BUCKET"),
        "FAITHFLOW_ROOT" => option_env!("FAITHFLOW_ROOT"),
        "FAITHFLOW_STORAGE_API" => option_env!("FAITHFLOW_STORAGE_API"),
        "FAITHFLOW_GATE_URL" => option_env!("FAITHFLOW_GATE_URL"),
        _ => None,
    };
    value.map(str::to_string)
}
