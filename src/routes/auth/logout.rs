use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::extract_token_parts;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("")]
async fn logout(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let (user_id, _) = extract_token_parts(auth.token()).ok_or(AppError::Unauthorized)?;

    db.clear_session_token(&user_id).await?;

    Ok(ApiResponse::NoContent)
}
