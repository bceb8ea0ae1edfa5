//! Catalog engine: HTTP client, wire records, repository, use cases and the
//! background worker that executes core effects.
mod api;
pub mod dto;
mod engine;
mod mapper;
mod repository;
mod types;
mod usecase;

pub use api::{ApiSettings, ProductApi, ReqwestProductApi};
pub use engine::EngineHandle;
pub use mapper::{map_product, map_product_details, map_products};
pub use repository::{ApiProductRepository, ProductRepository};
pub use types::{ApiError, CatalogError, EngineEvent, FailureKind};
pub use usecase::{GetProductDetails, SearchParams, SearchProducts};
