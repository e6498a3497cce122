use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Url;
use tracking_logging::{tracking_debug, tracking_warn};

use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

pub const DEFAULT_BASE_URL: &str = "https://apirace.eurekagroup.id/";
pub const TRACKING_PATH: &str = "sp/get-sm-detail";
pub const DEFAULT_SEARCH_TYPE: &str = "msm";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub search_type: String,
    /// `None` leaves reqwest's defaults in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_type: DEFAULT_SEARCH_TYPE.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// One lookup. The identifier is sent as given; callers trim it.
    async fn fetch(&self, identifier: &str) -> Result<FetchOutput, FetchError>;
}

/// `{base}/sp/get-sm-detail?msm={identifier}&searchType={search_type}`.
///
/// The base may come with or without a trailing slash.
pub fn tracking_url(base_url: &str, identifier: &str, search_type: &str) -> Result<Url, FetchError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let mut url = Url::parse(&base)
        .and_then(|base| base.join(TRACKING_PATH))
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.query_pairs_mut()
        .append_pair("msm", identifier)
        .append_pair("searchType", search_type);
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = build_client(&settings)?;
        Ok(Self { settings, client })
    }
}

fn build_client(settings: &FetchSettings) -> Result<reqwest::Client, FetchError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, identifier: &str) -> Result<FetchOutput, FetchError> {
        let url = tracking_url(&self.settings.base_url, identifier, &self.settings.search_type)?;
        tracking_debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !ct.to_ascii_lowercase().contains("json") {
                tracking_warn!("Tracking endpoint answered with content type {}", ct);
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let body = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::InvalidBody, err.to_string()))?;

        Ok(FetchOutput {
            body,
            metadata: FetchMetadata {
                request_url: url.to_string(),
                status: status.as_u16(),
                content_type,
                byte_len: bytes.len() as u64,
            },
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
