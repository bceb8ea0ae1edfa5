use std::sync::Arc;

use catalog_core::{messages, AppConfig, Product, ProductDetails};

use crate::api::ProductApi;
use crate::mapper::{map_product, map_product_details, map_products};
use crate::CatalogError;

/// Catalog access as tagged results. This is the layer where client errors
/// become `CatalogError`s.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    async fn search_products(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Product>, CatalogError>;

    /// Searches for `id` with a page size of 1 and returns the first hit.
    ///
    /// The catalog has no by-id lookup for search records, so this relies
    /// on the backend ranking the exact SKU first.
    async fn get_product_by_id(&self, id: &str) -> Result<Product, CatalogError>;

    async fn get_product_details(
        &self,
        product_id: &str,
        lang: &str,
    ) -> Result<ProductDetails, CatalogError>;
}

#[derive(Clone)]
pub struct ApiProductRepository {
    api: Arc<dyn ProductApi>,
    config: AppConfig,
}

impl ApiProductRepository {
    pub fn new(api: Arc<dyn ProductApi>, config: AppConfig) -> Self {
        Self { api, config }
    }
}

#[async_trait::async_trait]
impl ProductRepository for ApiProductRepository {
    async fn search_products(
        &self,
        query: &str,
        lang: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .api
            .search_products(query, lang, page, page_size)
            .await?;
        Ok(map_products(&response.products))
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Product, CatalogError> {
        let response = self
            .api
            .search_products(id, &self.config.default_language, self.config.default_page, 1)
            .await?;
        response
            .products
            .first()
            .map(map_product)
            .ok_or_else(|| CatalogError::NotFound(messages::PRODUCT_NOT_FOUND.to_string()))
    }

    async fn get_product_details(
        &self,
        product_id: &str,
        lang: &str,
    ) -> Result<ProductDetails, CatalogError> {
        let response = self.api.get_product_details(product_id, lang).await?;
        Ok(map_product_details(&response))
    }
}
