use crate::models;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub reference: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub status: bool, // active/inactive flag
    pub image: String,
    pub user_id: i32, // owner; always taken from the resolved caller, never from client input
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product joined with its owning user, as returned by the list/get queries.
#[derive(Debug, Clone)]
pub struct ProductWithOwner {
    pub product: Product,
    pub owner: models::User,
}
