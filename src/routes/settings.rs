use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::routes::my::caller_id;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::startup::normalize_image_url;
use crate::types::user::{ProfileUpdate, SessionUser};

#[patch("/profile")]
async fn update_profile(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
    body: web::Json<ProfileUpdate>,
) -> ApiResult<SessionUser> {
    let user_id = caller_id(&auth)?;
    let body = body.into_inner();

    let username = match body.username.map(|name| name.trim().to_string()) {
        Some(name) if name.is_empty() => {
            return Err(AppError::Validation("Username cannot be empty".into()))
        }
        other => other,
    };
    // blank avatar URL clears the stored one
    let avatar_url = body.avatar_url.map(|url| normalize_image_url(Some(url)));

    let user = db.update_profile(&user_id, username, avatar_url).await?;

    Ok(ApiResponse::Ok(user.into()))
}
