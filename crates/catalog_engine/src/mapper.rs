use catalog_core::{
    Product, ProductAvailability, ProductDetails, ProductMedia, ProductSpec, ProductWarranty,
    CURRENCY,
};

use crate::dto::{AvailabilityDto, MediaDto, ProductDetailsDto, ProductDto, SpecDto, WarrantyDto};

/// Maps a search-result wire record. Price falls back sale -> regular -> 0,
/// image falls back high-res -> thumbnail -> empty.
pub fn map_product(dto: &ProductDto) -> Product {
    Product {
        id: dto.sku.clone(),
        title: dto.name.clone(),
        price: dto.sale_price.or(dto.regular_price).unwrap_or(0.0),
        currency: CURRENCY.to_string(),
        image_url: dto
            .high_res_image
            .clone()
            .or_else(|| dto.thumbnail_image.clone())
            .unwrap_or_default(),
        description: dto.short_description.clone(),
        rating: dto.customer_rating,
        rating_count: dto.customer_rating_count,
        regular_price: dto.regular_price,
        sale_price: dto.sale_price,
        category_name: dto.category_name.clone(),
        product_url: dto.product_url.clone(),
    }
}

pub fn map_products(dtos: &[ProductDto]) -> Vec<Product> {
    dtos.iter().map(map_product).collect()
}

pub fn map_product_details(dto: &ProductDetailsDto) -> ProductDetails {
    ProductDetails {
        id: dto.sku.clone(),
        name: dto.name.clone(),
        short_description: dto.short_description.clone(),
        long_description: dto.long_description.clone(),
        regular_price: dto.regular_price,
        sale_price: dto.sale_price,
        sale_start_date: dto.sale_start_date.clone(),
        sale_end_date: dto.sale_end_date.clone(),
        thumbnail_image: dto.thumbnail_image.clone(),
        high_res_image: dto.high_res_image.clone(),
        additional_media: map_list(&dto.additional_media, map_media),
        brand_name: dto.brand_name.clone(),
        brand_thumbnail_image: dto.brand_thumbnail_image.clone(),
        category_name: dto.category_name.clone(),
        customer_rating: dto.customer_rating,
        customer_rating_count: dto.customer_rating_count,
        customer_review_count: dto.customer_review_count,
        availability: dto.availability.as_ref().map(map_availability),
        specs: map_list(&dto.specs, map_spec),
        warranties: map_list(&dto.warranties, map_warranty),
        whats_in_the_box: dto.whats_in_the_box.clone().unwrap_or_default(),
        model_number: dto.model_number.clone(),
        manufacturer: dto.manufacturer.clone(),
        upc_number: dto.upc_number.clone(),
        product_url: dto.product_url.clone(),
        seo_text: dto.seo_text.clone(),
        has_free_shipping: dto.has_free_shipping.unwrap_or(false),
        has_home_delivery_service: dto.has_home_delivery_service.unwrap_or(false),
        has_in_store_pickup: dto.has_in_store_pickup.unwrap_or(false),
        is_product_on_sale: dto.is_product_on_sale.unwrap_or(false),
        is_purchasable: dto.is_purchasable.unwrap_or(false),
        warranty_and_repair_disclosure_url: dto.warranty_and_repair_disclosure_url.clone(),
    }
}

fn map_list<T, U>(items: &Option<Vec<T>>, map: fn(&T) -> U) -> Vec<U> {
    items
        .as_deref()
        .map(|items| items.iter().map(map).collect())
        .unwrap_or_default()
}

fn map_media(dto: &MediaDto) -> ProductMedia {
    ProductMedia {
        thumbnail_url: dto.thumbnail_url.clone(),
        url: dto.url.clone(),
        mime_type: dto.mime_type.clone(),
    }
}

fn map_spec(dto: &SpecDto) -> ProductSpec {
    ProductSpec {
        group: dto.group.clone(),
        name: dto.name.clone(),
        value: dto.value.clone(),
    }
}

fn map_warranty(dto: &WarrantyDto) -> ProductWarranty {
    ProductWarranty {
        parent_sku: dto.parent_sku.clone(),
        sku: dto.sku.clone(),
        title: dto.title.clone(),
        warranty_type: dto.warranty_type.clone(),
        sub_type: dto.sub_type.clone(),
        term_months: dto.term_months,
        regular_price: dto.regular_price,
    }
}

fn map_availability(dto: &AvailabilityDto) -> ProductAvailability {
    ProductAvailability {
        sku: dto.sku.clone(),
        in_store_availability: dto.in_store_availability.clone(),
        in_store_availability_text: dto.in_store_availability_text.clone(),
        is_available_online: dto.is_available_online.unwrap_or(false),
        online_availability: dto.online_availability.clone(),
        online_availability_text: dto.online_availability_text.clone(),
        online_availability_count: dto.online_availability_count,
        button_state: dto.button_state.clone(),
    }
}
