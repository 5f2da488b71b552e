use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "List user's products.", skip_all)]
#[get("")]
pub async fn list(
    query: web::Query<forms::product::Pagination>,
    user: web::ReqData<Arc<models::CurrentUser>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let forms::product::Pagination { page, limit } = query.into_inner();
    if page < 1 || limit < 1 {
        return Err(JsonResponse::build()
            .bad_request("Page number and limit must be greater than zero"));
    }

    let total = db::product::count_by_user(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::build().internal_server_error(err))?;

    // an empty collection has zero pages, so even page=1 is out of range then
    let total_pages = views::product::Paginated::total_pages(total, limit);
    if page > total_pages {
        return Err(JsonResponse::build()
            .bad_request("Page number greater than the total number of pages available"));
    }

    let items = db::product::fetch_page_by_user(pg_pool.get_ref(), user.id, limit, (page - 1) * limit)
        .await
        .map_err(|err| JsonResponse::build().internal_server_error(err))?
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::product::ProductSummary>>();

    Ok(HttpResponse::Ok().json(views::product::Paginated::new(total, limit, page, items)))
}

#[tracing::instrument(name = "Get user's product.", skip_all)]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::CurrentUser>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    let product = db::product::fetch_by_id_and_user(pg_pool.get_ref(), id, user.id)
        .await
        .map_err(|err| JsonResponse::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => {
                Err(JsonResponse::build().not_found("Product not found or not owned by the user"))
            }
        })?;

    Ok(HttpResponse::Ok().json(Into::<views::product::ProductSummary>::into(product)))
}
