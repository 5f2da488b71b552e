use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::ops::Deref;
use std::sync::Arc;

#[tracing::instrument(name = "Update user's product.", skip_all)]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::product::ProductForm>,
    user: web::ReqData<Arc<models::CurrentUser>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let id = path.0;
    let existing = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) if product.user_id != user.id => {
                Err(JsonResponse::build().not_found("Product not found or not owned by the user"))
            }
            Some(product) => Ok(product),
            None => {
                Err(JsonResponse::build().not_found("Product not found or not owned by the user"))
            }
        })?;

    // only the six mutable fields come from the form; id and owner are pinned
    let mut product: models::Product = form.deref().into();
    product.id = existing.id;
    product.user_id = existing.user_id;
    product.created_at = existing.created_at;

    db::product::update(pg_pool.get_ref(), product)
        .await
        .map(|_product| JsonResponse::build().no_content())
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            JsonResponse::build().internal_server_error("Could not update product")
        })
}
