#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use catalog_core::AppConfig;
use catalog_engine::dto::{ProductDetailsDto, ProductDto, SearchResponseDto};
use catalog_engine::{
    ApiError, ApiProductRepository, FailureKind, GetProductDetails, ProductApi,
    ProductRepository, SearchProducts,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Search {
        query: String,
        lang: String,
        page: u32,
        page_size: u32,
    },
    Details {
        product_id: String,
        lang: String,
    },
}

/// Scripted `ProductApi`: responses keyed by query / product id, optional
/// per-key delay, every call recorded.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<ApiCall>>,
    searches: Mutex<HashMap<String, Vec<Result<SearchResponseDto, ApiError>>>>,
    details: Mutex<HashMap<String, Result<ProductDetailsDto, ApiError>>>,
    delays: Mutex<HashMap<String, Duration>>,
}

impl FakeApi {
    /// Queues one response for `query`; repeated calls consume them in order
    /// and the last one is reused.
    pub fn with_search(self, query: &str, result: Result<SearchResponseDto, ApiError>) -> Self {
        self.searches
            .lock()
            .unwrap()
            .entry(query.to_string())
            .or_default()
            .push(result);
        self
    }

    pub fn with_details(self, product_id: &str, result: Result<ProductDetailsDto, ApiError>) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(product_id.to_string(), result);
        self
    }

    pub fn with_delay(self, key: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(key.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn pause_for(&self, key: &str) {
        let delay = self.delays.lock().unwrap().get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait::async_trait]
impl ProductApi for FakeApi {
    async fn search_products(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResponseDto, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::Search {
            query: query.to_string(),
            lang: lang.to_string(),
            page,
            page_size,
        });
        self.pause_for(query).await;
        let mut searches = self.searches.lock().unwrap();
        match searches.get_mut(query) {
            Some(queue) if queue.len() > 1 => queue.remove(0),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Err(not_found()),
        }
    }

    async fn get_product_details(
        &self,
        product_id: &str,
        lang: &str,
    ) -> Result<ProductDetailsDto, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::Details {
            product_id: product_id.to_string(),
            lang: lang.to_string(),
        });
        self.pause_for(product_id).await;
        self.details
            .lock()
            .unwrap()
            .get(product_id)
            .cloned()
            .unwrap_or_else(|| Err(not_found()))
    }
}

pub fn not_found() -> ApiError {
    ApiError {
        kind: FailureKind::HttpStatus(404),
        message: "404 Not Found".to_string(),
    }
}

pub fn product_dto(sku: &str, regular_price: Option<f64>, sale_price: Option<f64>) -> ProductDto {
    serde_json::from_value(serde_json::json!({
        "sku": sku,
        "name": format!("Product {sku}"),
        "regularPrice": regular_price,
        "salePrice": sale_price,
        "thumbnailImage": format!("https://img.example.com/{sku}-thumb.jpg"),
    }))
    .expect("valid product dto")
}

pub fn search_response(products: Vec<ProductDto>) -> SearchResponseDto {
    SearchResponseDto {
        current_page: 1,
        total: products.len() as u32,
        total_pages: 1,
        page_size: products.len() as u32,
        products,
    }
}

pub fn details_dto(sku: &str, name: &str) -> ProductDetailsDto {
    serde_json::from_value(serde_json::json!({ "sku": sku, "name": name }))
        .expect("valid details dto")
}

pub fn repository_for(api: Arc<FakeApi>, config: &AppConfig) -> Arc<dyn ProductRepository> {
    let api: Arc<dyn ProductApi> = api;
    Arc::new(ApiProductRepository::new(api, config.clone()))
}

pub fn use_cases_for(
    api: Arc<FakeApi>,
    config: &AppConfig,
) -> (SearchProducts, GetProductDetails) {
    let repository = repository_for(api, config);
    (
        SearchProducts::new(repository.clone(), config.clone()),
        GetProductDetails::new(repository, config.clone()),
    )
}
