use crate::models;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub reference: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub description: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub category: String,
    pub price: Decimal,
    pub status: bool,
    #[validate(min_length = 1)]
    pub image: String,
    /// Accepted but ignored; ownership always comes from the resolved caller.
    #[serde(default)]
    pub user_id: Option<i32>,
}

impl From<&ProductForm> for models::Product {
    fn from(val: &ProductForm) -> Self {
        let mut product = models::Product::default();
        product.reference = val.reference.clone();
        product.description = val.description.clone();
        product.category = val.category.clone();
        product.price = val.price;
        product.status = val.status;
        product.image = val.image.clone();
        product.created_at = Utc::now();
        product.updated_at = Utc::now();

        product
    }
}

pub fn default_page() -> i64 {
    1
}

pub fn default_limit() -> i64 {
    12
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}
