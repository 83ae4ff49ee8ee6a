use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::db::user::NewUser;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AuthRes, SignupRequest};
use crate::utils::token::encrypt;

#[post("/signup")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<SignupRequest>,
) -> ApiResult<AuthRes> {
    body.validate()?;

    let password_hash = encrypt(&body.password)
        .map_err(|_| AppError::Internal("Failed to hash password".into()))?;

    let user = db
        .create_user(NewUser {
            email: body.email.trim().to_string(),
            username: body.resolved_username(),
            password_hash,
        })
        .await?;

    let token = db.issue_session_token(&user.id).await?;

    Ok(ApiResponse::Created(AuthRes {
        token,
        user: user.into(),
    }))
}
