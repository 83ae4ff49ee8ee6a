use actix_web::{delete, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[delete("/users/{id}")]
async fn delete_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    // the user's startup rows stay behind; the overview resolves them to
    // placeholder founders from then on
    db.delete_user(&path.into_inner()).await?;

    Ok(ApiResponse::NoContent)
}
