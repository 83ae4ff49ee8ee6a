use actix_web::{delete, post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

/// Moderation: any owner's row.
#[delete("/startups/{id}")]
async fn delete_startup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    db.delete_startup(&path.into_inner()).await?;

    Ok(ApiResponse::NoContent)
}

#[post("/startups/{id}/visibility")]
async fn toggle_visibility(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<entity::startup::Model> {
    Ok(ApiResponse::Ok(
        db.toggle_startup_visibility(&path.into_inner()).await?,
    ))
}
