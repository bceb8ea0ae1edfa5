use std::time::Duration;

use catalog_logging::{catalog_debug, catalog_warn};
use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::dto::{ProductDetailsDto, SearchResponseDto};
use crate::{ApiError, FailureKind};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Read-only catalog endpoints. Errors are passed through untranslated.
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    async fn search_products(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResponseDto, ApiError>;

    async fn get_product_details(
        &self,
        product_id: &str,
        lang: &str,
    ) -> Result<ProductDetailsDto, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProductApi {
    client: reqwest::Client,
    base_url: Url,
    settings: ApiSettings,
}

impl ReqwestProductApi {
    pub fn new(base_url: &str, settings: ApiSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} cannot be used as a base url"),
            ));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base_url,
            settings,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{segments...}`; each segment is percent-encoded on its own.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base urls, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        catalog_debug!("GET {}", url);
        let result = self.fetch_body(url.clone()).await.and_then(|bytes| {
            serde_json::from_slice(&bytes)
                .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
        });
        if let Err(err) = &result {
            catalog_warn!("GET {} failed: {}", url, err);
        }
        result
    }

    async fn fetch_body(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ProductApi for ReqwestProductApi {
    async fn search_products(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResponseDto, ApiError> {
        let mut url = self.endpoint(&["search"]);
        url.query_pairs_mut()
            .append_pair("lang", lang)
            .append_pair("query", query)
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string());
        self.get_json(url).await
    }

    async fn get_product_details(
        &self,
        product_id: &str,
        lang: &str,
    ) -> Result<ProductDetailsDto, ApiError> {
        let mut url = self.endpoint(&["product", product_id]);
        url.query_pairs_mut().append_pair("lang", lang);
        self.get_json(url).await
    }
}

fn too_large(max_bytes: u64, actual: u64) -> ApiError {
    ApiError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return ApiError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
