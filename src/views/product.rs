use crate::models;
use rust_decimal::Decimal;
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize)]
pub struct OwnerSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<models::User> for OwnerSummary {
    fn from(user: models::User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: i32,
    pub reference: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub status: bool,
    pub image: String,
    pub owner: OwnerSummary,
}

impl From<models::ProductWithOwner> for ProductSummary {
    fn from(row: models::ProductWithOwner) -> Self {
        Self {
            id: row.product.id,
            reference: row.product.reference,
            description: row.product.description,
            category: row.product.category,
            price: row.product.price,
            status: row.product.status,
            image: row.product.image,
            owner: row.owner.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated {
    pub total: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub items: Vec<ProductSummary>,
}

impl Paginated {
    /// Ceiling division; an empty collection has zero pages, which makes
    /// every requested page out of range (kept as the documented contract).
    pub fn total_pages(total: i64, limit: i64) -> i64 {
        (total + limit - 1) / limit
    }

    pub fn new(total: i64, page_size: i64, current_page: i64, items: Vec<ProductSummary>) -> Self {
        Self {
            total,
            page_size,
            current_page,
            total_pages: Self::total_pages(total, page_size),
            items,
        }
    }
}
