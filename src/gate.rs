//! The usage-agreement gate in front of the library.

use crate::config::AppConfig;
use crate::error::GateError;
use dioxus::logger::tracing::{info, warn};

/// Set once per session, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gate {
    agreed: bool,
}

impl Gate {
    pub fn is_open(&self) -> bool {
        self.agreed
    }

    /// Returns `true` only for the call that actually opened the gate.
    pub fn open(&mut self) -> bool {
        if self.agreed {
            return false;
        }
        self.agreed = true;
        true
    }
}

/// How agreeing is confirmed before the gate opens.
#[derive(Clone)]
pub enum AgreementCheck {
    /// Clicking "I Agree" is enough.
    Local,
    /// POST the agreement to an endpoint; any 2xx confirms it.
    Endpoint { http: reqwest::Client, url: String },
}

impl AgreementCheck {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.gate_url {
            Some(url) => Self::Endpoint {
                http: reqwest::Client::new(),
                url: url.clone(),
            },
            None => Self::Local,
        }
    }

    pub async fn confirm(&self) -> Result<(), GateError> {
        match self {
            Self::Local => Ok(()),
            Self::Endpoint { http, url } => {
                let response = http
                    .post(url)
                    .json(&serde_json::json!({ "agreed": true }))
                    .send()
                    .await?;
                let result = check_status(response.status().as_u16());
                match &result {
                    Ok(()) => info!("agreement confirmed by endpoint"),
                    Err(err) => warn!(error = %err, "agreement endpoint refused"),
                }
                result
            }
        }
    }
}

fn check_status(status: u16) -> Result<(), GateError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GateError::Rejected(status))
    }
}
