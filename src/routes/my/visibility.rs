use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::routes::my::{caller_id, owned_startup};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/{id}/visibility")]
async fn toggle(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
) -> ApiResult<entity::startup::Model> {
    let user_id = caller_id(&auth)?;
    let id = path.into_inner();

    owned_startup(&db, &user_id, &id).await?;

    Ok(ApiResponse::Ok(db.toggle_startup_visibility(&id).await?))
}
