//! REST client for the campus backend.

use async_trait::async_trait;
use campus_core::{
    config::ApiConfig, error::CampusError, listing::Listing, request::ContentRequest,
    traits::ContentSource,
};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::endpoints;

/// Upper bound on `next` links followed by [`ApiClient::fetch_all`].
const MAX_PAGES: usize = 50;

/// HTTP client bound to one backend host.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    send_accept_language: bool,
}

impl ApiClient {
    /// Create from config values.
    pub fn from_config(cfg: &ApiConfig) -> Result<Self, CampusError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| CampusError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            send_accept_language: cfg.send_accept_language,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Attach the language header when configured.
    pub(crate) fn with_language(
        &self,
        builder: reqwest::RequestBuilder,
        lang: &str,
    ) -> reqwest::RequestBuilder {
        if self.send_accept_language {
            builder.header(reqwest::header::ACCEPT_LANGUAGE, lang)
        } else {
            builder
        }
    }

    /// GET `request` and decode the JSON body.
    pub async fn get_json(&self, request: &ContentRequest) -> Result<Value, CampusError> {
        let url = self.url(&request.path);
        debug!("api: GET {request}");
        let builder = self.client.get(&url).query(&request.query_pairs());
        let resp = self
            .with_language(builder, &request.lang)
            .send()
            .await
            .map_err(|e| CampusError::Network(format!("GET {url} failed: {e}")))?;
        read_json(resp, &url).await
    }

    /// Fetch `request` and every following page the backend links to.
    pub async fn fetch_all(&self, request: &ContentRequest) -> Result<Listing, CampusError> {
        let mut listing = Listing::from_body(self.get_json(request).await?);
        let mut pages = 1;
        while let Some(next) = listing.next.clone() {
            if pages >= MAX_PAGES {
                warn!("api: stopping after {MAX_PAGES} pages of {}", request.path);
                break;
            }
            debug!("api: GET {next}");
            let builder = self.client.get(&next);
            let resp = self
                .with_language(builder, &request.lang)
                .send()
                .await
                .map_err(|e| CampusError::Network(format!("GET {next} failed: {e}")))?;
            listing.extend(Listing::from_body(read_json(resp, &next).await?));
            pages += 1;
        }
        Ok(listing)
    }
}

/// Check status and decode a JSON body. An empty body decodes to `null`.
pub(crate) async fn read_json(resp: reqwest::Response, url: &str) -> Result<Value, CampusError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| CampusError::Network(format!("{url}: failed to read body: {e}")))?;

    if !status.is_success() {
        return Err(CampusError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| CampusError::Parse(format!("{url}: {e}")))
}

#[async_trait]
impl ContentSource for ApiClient {
    fn name(&self) -> &str {
        "api"
    }

    /// Listings are collected across every page the backend links to, so
    /// client-side sorting and pagination see the whole collection.
    async fn fetch(&self, request: &ContentRequest) -> Result<Listing, CampusError> {
        self.fetch_all(request).await
    }

    async fn is_available(&self) -> bool {
        let url = self.url(endpoints::MENU);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("api not available: {e}");
                false
            }
        }
    }
}
