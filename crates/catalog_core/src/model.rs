//! Domain records built from catalog responses.

/// All catalog prices are quoted in Canadian dollars.
pub const CURRENCY: &str = "CAD";

/// A search-result item.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog SKU.
    pub id: String,
    pub title: String,
    /// Sale price when present, otherwise the regular price, otherwise 0.
    pub price: f64,
    pub currency: String,
    /// High-resolution image when present, otherwise the thumbnail.
    pub image_url: String,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub regular_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub category_name: Option<String>,
    pub product_url: Option<String>,
}

impl Product {
    /// True when the product carries a sale price below its regular price.
    pub fn is_discounted(&self) -> bool {
        matches!((self.sale_price, self.regular_price), (Some(sale), Some(regular)) if sale < regular)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductSpec {
    pub group: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductWarranty {
    pub parent_sku: Option<String>,
    pub sku: Option<String>,
    pub title: Option<String>,
    pub warranty_type: Option<String>,
    pub sub_type: Option<String>,
    pub term_months: Option<u32>,
    pub regular_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductAvailability {
    pub sku: Option<String>,
    pub in_store_availability: Option<String>,
    pub in_store_availability_text: Option<String>,
    pub is_available_online: bool,
    pub online_availability: Option<String>,
    pub online_availability_text: Option<String>,
    pub online_availability_count: Option<u32>,
    pub button_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductMedia {
    pub thumbnail_url: Option<String>,
    pub url: Option<String>,
    pub mime_type: Option<String>,
}

/// Full record for a single product. Only `id` and `name` are guaranteed;
/// everything else defaults to empty/false when the catalog omits it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub regular_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub sale_start_date: Option<String>,
    pub sale_end_date: Option<String>,
    pub thumbnail_image: Option<String>,
    pub high_res_image: Option<String>,
    pub additional_media: Vec<ProductMedia>,
    pub brand_name: Option<String>,
    pub brand_thumbnail_image: Option<String>,
    pub category_name: Option<String>,
    pub customer_rating: Option<f64>,
    pub customer_rating_count: Option<u32>,
    pub customer_review_count: Option<u32>,
    pub availability: Option<ProductAvailability>,
    pub specs: Vec<ProductSpec>,
    pub warranties: Vec<ProductWarranty>,
    pub whats_in_the_box: Vec<String>,
    pub model_number: Option<String>,
    pub manufacturer: Option<String>,
    pub upc_number: Option<String>,
    pub product_url: Option<String>,
    pub seo_text: Option<String>,
    pub has_free_shipping: bool,
    pub has_home_delivery_service: bool,
    pub has_in_store_pickup: bool,
    pub is_product_on_sale: bool,
    pub is_purchasable: bool,
    pub warranty_and_repair_disclosure_url: Option<String>,
}

impl ProductDetails {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn display_price(&self) -> Option<f64> {
        self.sale_price.or(self.regular_price)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.high_res_image
            .as_deref()
            .or(self.thumbnail_image.as_deref())
    }

    /// Specs grouped by category, groups in first-seen order. Specs without
    /// a group land under an empty group name.
    pub fn specs_by_group(&self) -> Vec<(&str, Vec<&ProductSpec>)> {
        let mut groups: Vec<(&str, Vec<&ProductSpec>)> = Vec::new();
        for spec in &self.specs {
            let group = spec.group.as_deref().unwrap_or("");
            match groups.iter_mut().find(|(name, _)| *name == group) {
                Some((_, members)) => members.push(spec),
                None => groups.push((group, vec![spec])),
            }
        }
        groups
    }
}
