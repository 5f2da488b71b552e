use crate::models;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::Instrument;

// Flat row produced by the product/owner join; owner columns are aliased to
// avoid clashing with the product's own id.
#[derive(sqlx::FromRow)]
struct ProductOwnerRow {
    id: i32,
    reference: String,
    description: String,
    category: String,
    price: Decimal,
    status: bool,
    image: String,
    user_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_id: i32,
    owner_first_name: String,
    owner_last_name: String,
    owner_email: String,
}

impl From<ProductOwnerRow> for models::ProductWithOwner {
    fn from(row: ProductOwnerRow) -> Self {
        models::ProductWithOwner {
            product: models::Product {
                id: row.id,
                reference: row.reference,
                description: row.description,
                category: row.category,
                price: row.price,
                status: row.status,
                image: row.image,
                user_id: row.user_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            owner: models::User {
                id: row.owner_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email: row.owner_email,
            },
        }
    }
}

const PRODUCT_WITH_OWNER: &str = r#"
    SELECT
        p.id, p.reference, p.description, p.category, p.price, p.status,
        p.image, p.user_id, p.created_at, p.updated_at,
        u.id AS owner_id,
        u.first_name AS owner_first_name,
        u.last_name AS owner_last_name,
        u.email AS owner_email
    FROM product p
    JOIN users u ON u.id = p.user_id
"#;

pub async fn count_by_user(pool: &PgPool, user_id: i32) -> Result<i64, String> {
    let query_span = tracing::info_span!("Count user's products.");
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_page_by_user(
    pool: &PgPool,
    user_id: i32,
    limit: i64,
    offset: i64,
) -> Result<Vec<models::ProductWithOwner>, String> {
    let query_span = tracing::info_span!("Fetch a page of user's products.");
    let query = format!("{PRODUCT_WITH_OWNER} WHERE p.user_id = $1 ORDER BY p.id LIMIT $2 OFFSET $3");
    sqlx::query_as::<_, ProductOwnerRow>(&query)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map(|rows| rows.into_iter().map(Into::into).collect())
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_by_id_and_user(
    pool: &PgPool,
    id: i32,
    user_id: i32,
) -> Result<Option<models::ProductWithOwner>, String> {
    let query_span = tracing::info_span!("Fetch user's product by id.");
    let query = format!("{PRODUCT_WITH_OWNER} WHERE p.id = $1 AND p.user_id = $2 LIMIT 1");
    sqlx::query_as::<_, ProductOwnerRow>(&query)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map(|row| row.map(Into::into))
        .map_err(|err| {
            tracing::error!("Failed to fetch product, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch product by id.");
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT id, reference, description, category, price, status, image,
               user_id, created_at, updated_at
        FROM product
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch product, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, mut product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, (i32, DateTime<Utc>, DateTime<Utc>)>(
        r#"
        INSERT INTO product (reference, description, category, price, status, image, user_id,
                             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING id, created_at, updated_at
        "#,
    )
    .bind(&product.reference)
    .bind(&product.description)
    .bind(&product.category)
    .bind(product.price)
    .bind(product.status)
    .bind(&product.image)
    .bind(product.user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |(id, created_at, updated_at)| {
        product.id = id;
        product.created_at = created_at;
        product.updated_at = updated_at;
        product
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

// Only the six mutable fields are written; id and user_id never change here.
pub async fn update(pool: &PgPool, mut product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Updating user's product");
    sqlx::query_as::<_, (DateTime<Utc>,)>(
        r#"
        UPDATE product
        SET
            reference = $2,
            description = $3,
            category = $4,
            price = $5,
            status = $6,
            image = $7,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING updated_at
        "#,
    )
    .bind(product.id)
    .bind(&product.reference)
    .bind(&product.description)
    .bind(&product.category)
    .bind(product.price)
    .bind(product.status)
    .bind(&product.image)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |(updated_at,)| {
        product.updated_at = updated_at;
        product
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

#[tracing::instrument(name = "Delete product.")]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM product WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|_| true)
        .map_err(|err| {
            tracing::error!("Failed to delete product: {:?}", err);
            "Failed to delete product".to_string()
        })
}
