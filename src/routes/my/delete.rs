use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::routes::my::{caller_id, owned_startup};
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    let user_id = caller_id(&auth)?;
    let id = path.into_inner();

    owned_startup(&db, &user_id, &id).await?;

    // permanent, no tombstone; confirmation is the client's concern
    db.delete_startup(&id).await?;

    Ok(ApiResponse::NoContent)
}
