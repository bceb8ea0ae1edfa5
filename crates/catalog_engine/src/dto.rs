//! Wire records mirroring the catalog API's JSON.
//!
//! Unknown fields are ignored and every optional field may be missing or
//! `null`; only `sku` and `name` are required on products.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseDto {
    pub current_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub page_size: u32,
    #[serde(default)]
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub customer_rating: Option<f64>,
    #[serde(default)]
    pub customer_rating_count: Option<u32>,
    #[serde(default)]
    pub customer_review_count: Option<u32>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub regular_price: Option<f64>,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub sale_end_date: Option<i64>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
    #[serde(default)]
    pub high_res_image: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub seo_text: Option<String>,
    #[serde(default)]
    pub has_promotion: bool,
    #[serde(default)]
    pub is_advertised: bool,
    #[serde(default)]
    pub is_clearance: bool,
    #[serde(default)]
    pub is_in_store_only: bool,
    #[serde(default)]
    pub is_online_only: bool,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_preorderable: bool,
    #[serde(default)]
    pub category_ids: Option<Vec<String>>,
}

fn visible_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecDto {
    pub group: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarrantyDto {
    pub parent_sku: Option<String>,
    pub sku: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub warranty_type: Option<String>,
    pub sub_type: Option<String>,
    pub term_months: Option<u32>,
    pub regular_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityDto {
    pub sku: Option<String>,
    pub in_store_availability: Option<String>,
    pub in_store_availability_text: Option<String>,
    pub is_available_online: Option<bool>,
    pub online_availability: Option<String>,
    pub online_availability_text: Option<String>,
    pub online_availability_count: Option<u32>,
    pub button_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaDto {
    pub thumbnail_url: Option<String>,
    pub url: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsDto {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub regular_price: Option<f64>,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub sale_start_date: Option<String>,
    #[serde(default)]
    pub sale_end_date: Option<String>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
    #[serde(default)]
    pub high_res_image: Option<String>,
    #[serde(default)]
    pub additional_media: Option<Vec<MediaDto>>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub brand_thumbnail_image: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub customer_rating: Option<f64>,
    #[serde(default)]
    pub customer_rating_count: Option<u32>,
    #[serde(default)]
    pub customer_review_count: Option<u32>,
    #[serde(default)]
    pub availability: Option<AvailabilityDto>,
    #[serde(default)]
    pub specs: Option<Vec<SpecDto>>,
    #[serde(default)]
    pub warranties: Option<Vec<WarrantyDto>>,
    #[serde(default)]
    pub whats_in_the_box: Option<Vec<String>>,
    #[serde(default)]
    pub model_number: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub upc_number: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub seo_text: Option<String>,
    #[serde(default)]
    pub has_free_shipping: Option<bool>,
    #[serde(default)]
    pub has_home_delivery_service: Option<bool>,
    #[serde(default)]
    pub has_in_store_pickup: Option<bool>,
    #[serde(default)]
    pub is_product_on_sale: Option<bool>,
    #[serde(default)]
    pub is_purchasable: Option<bool>,
    #[serde(default)]
    pub warranty_and_repair_disclosure_url: Option<String>,
}
