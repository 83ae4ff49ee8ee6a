use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::routes::my::caller_id;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<Vec<entity::startup::Model>> {
    let user_id = caller_id(&auth)?;

    Ok(ApiResponse::Ok(db.list_startups_by_owner(&user_id).await?))
}
