use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AuthRes, LoginRequest};
use crate::utils::token::verify;

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<LoginRequest>,
) -> ApiResult<AuthRes> {
    // unknown email and wrong password look identical to the caller
    let user = match db.get_user_by_email(body.email.trim()).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    let ok = verify(&body.password, &user.password_hash).map_err(|_| AppError::Unauthorized)?;
    if !ok {
        return Err(AppError::Unauthorized);
    }

    let token = db.issue_session_token(&user.id).await?;

    Ok(ApiResponse::Ok(AuthRes {
        token,
        user: user.into(),
    }))
}
