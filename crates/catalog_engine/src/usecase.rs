use std::sync::Arc;

use catalog_core::{messages, AppConfig, Product, ProductDetails};

use crate::repository::ProductRepository;
use crate::CatalogError;

/// Optional search parameters; `None` falls back to the configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub lang: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl SearchParams {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            lang: None,
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

#[derive(Clone)]
pub struct SearchProducts {
    repository: Arc<dyn ProductRepository>,
    config: AppConfig,
}

impl SearchProducts {
    pub fn new(repository: Arc<dyn ProductRepository>, config: AppConfig) -> Self {
        Self { repository, config }
    }

    pub async fn execute(
        &self,
        query: &str,
        params: SearchParams,
    ) -> Result<Vec<Product>, CatalogError> {
        if query.trim().is_empty() {
            return Err(CatalogError::Validation(messages::QUERY_REQUIRED.to_string()));
        }
        let lang = params
            .lang
            .unwrap_or_else(|| self.config.default_language.clone());
        self.repository
            .search_products(
                query,
                &lang,
                params.page.unwrap_or(self.config.default_page),
                params.page_size.unwrap_or(self.config.default_page_size),
            )
            .await
    }
}

#[derive(Clone)]
pub struct GetProductDetails {
    repository: Arc<dyn ProductRepository>,
    config: AppConfig,
}

impl GetProductDetails {
    pub fn new(repository: Arc<dyn ProductRepository>, config: AppConfig) -> Self {
        Self { repository, config }
    }

    pub async fn execute(
        &self,
        product_id: &str,
        lang: Option<&str>,
    ) -> Result<ProductDetails, CatalogError> {
        if product_id.trim().is_empty() {
            return Err(CatalogError::Validation(
                messages::PRODUCT_ID_REQUIRED.to_string(),
            ));
        }
        let lang = lang.unwrap_or(&self.config.default_language);
        self.repository.get_product_details(product_id, lang).await
    }
}
