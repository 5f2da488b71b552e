use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Delete product.", skip_all)]
#[delete("/{id}")]
pub async fn item(
    _user: web::ReqData<Arc<models::CurrentUser>>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    // lookup is by id alone; unlike list/get/update, delete does not check
    // ownership. Existing clients rely on this, see delete_is_not_owner_scoped.
    let product = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::build().not_found("Product not found")),
        })?;

    db::product::delete(pg_pool.get_ref(), product.id)
        .await
        .map_err(|err| JsonResponse::build().internal_server_error(err))
        .and_then(|result| match result {
            true => Ok(JsonResponse::build().no_content()),
            _ => Err(JsonResponse::build().bad_request("Could not delete")),
        })
}
