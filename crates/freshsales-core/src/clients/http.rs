//! reqwest-backed transport for the Freshsales REST API

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;
use crate::clients::transport::{check_path, QueryParams, Transport};
use crate::config::FreshsalesConfig;
use crate::error::{FreshsalesError, Result};

/// Sends `Authorization: Token token=...` requests to one Freshsales account
pub struct HttpTransport {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &FreshsalesConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = HttpClient::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| FreshsalesError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> String {
        format!("Token token={}", self.api_key)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value> {
        check_path(path)?;

        let url = format!("{}{}", self.base_url, path);
        let query = params.encode();
        log::debug!("calling get {} passing params {:?}", url, query);

        let response = self.http_client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Freshsales API error (status {}) for {}", status, url);
            return Err(FreshsalesError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
