use crate::domain::ports::{BeerSource, ConfigProvider, UpstreamPath};
use crate::utils::error::{BeerError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Punk API 的 HTTP client。base URL 在建構時傳入，不讀取全域設定。
#[derive(Debug, Clone)]
pub struct PunkApiClient {
    client: Client,
    base_url: String,
}

impl PunkApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.upstream_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: UpstreamPath) -> String {
        match path {
            UpstreamPath::Catalog => self.base_url.clone(),
            UpstreamPath::ById(id) => format!("{}/{}", self.base_url, id),
            UpstreamPath::Random => format!("{}/random", self.base_url),
        }
    }

    /// 對完整 URL 發出 GET 並解析 JSON
    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("📡 Making API request to: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("❌ Upstream request to {} failed: {}", url, e);
            BeerError::UpstreamUnavailable {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        if status.is_client_error() {
            return Err(BeerError::not_found("Could not find beers"));
        }
        if !status.is_success() {
            tracing::error!("❌ Upstream {} answered with status {}", url, status);
            return Err(BeerError::UpstreamUnavailable {
                message: format!("API request failed with status: {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BeerError::UpstreamUnavailable {
                message: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(
                "⚠️ Upstream {} returned a non-JSON body ({} bytes): {}",
                url,
                body.len(),
                e
            );
            BeerError::BadUpstreamResponse {
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl BeerSource for PunkApiClient {
    async fn fetch(&self, path: UpstreamPath) -> Result<serde_json::Value> {
        let url = self.url_for(path);
        self.get_json(&url).await
    }
}
