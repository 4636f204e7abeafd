//! HTTP HEAD probing of source URLs (`web-tools` feature).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

const VALIDATION_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = "ExpertCouncil/0.4 (Source Validator)";

/// Checks that a URL answers a HEAD request with a status below 400.
///
/// Results, including failures, are cached per URL for the lifetime of
/// the validator.
#[derive(Debug)]
pub struct UrlValidator {
    client: reqwest::Client,
    cache: Mutex<HashMap<String, bool>>,
}

impl UrlValidator {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(VALIDATION_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn is_valid(&self, url: &str) -> bool {
        if let Some(valid) = self.cached(url) {
            return valid;
        }

        let valid = match self.client.head(url).send().await {
            Ok(response) => response.status().as_u16() < 400,
            Err(e) => {
                debug!("URL validation failed for {}: {}", url, e);
                false
            }
        };
        debug!("URL validation {} -> {}", url, valid);

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(url.to_string(), valid);
        }
        valid
    }

    fn cached(&self, url: &str) -> Option<bool> {
        self.cache.lock().ok()?.get(url).copied()
    }
}
