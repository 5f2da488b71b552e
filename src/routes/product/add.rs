use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::ops::Deref;
use std::sync::Arc;

#[tracing::instrument(name = "Add product.", skip_all)]
#[post("")]
pub async fn item(
    user: web::ReqData<Arc<models::CurrentUser>>,
    form: web::Json<forms::product::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let mut product: models::Product = form.deref().into();
    product.user_id = user.id;

    db::product::insert(pg_pool.get_ref(), product)
        .await
        .map(|product| {
            let location = format!("/produtos/{}", product.id);
            JsonResponse::build().created(location, product)
        })
        .map_err(|_err| JsonResponse::build().internal_server_error("Failed to insert"))
}
