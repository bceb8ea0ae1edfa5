//! User-facing failure texts shared by the controllers and use cases.

pub const QUERY_REQUIRED: &str = "Query cannot be empty";
pub const PRODUCT_ID_REQUIRED: &str = "Product ID cannot be empty";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const GENERIC_ERROR: &str = "An error occurred";

/// Falls back to [`GENERIC_ERROR`] when a failure carries no text.
pub fn or_generic(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        message
    }
}
