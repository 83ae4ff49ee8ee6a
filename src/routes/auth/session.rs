use actix_web::{get, web, HttpRequest};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy::AdminPolicy;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::SessionState;
use crate::utils::token::session_user_id;
use crate::utils::webutils::bearer_token;

/// Resolve the current session to {user, is_authenticated, is_admin}.
/// Anything absent, stale, or malformed resolves to the anonymous state:
/// fail closed, never an error.
#[get("/session")]
async fn session(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    policy: web::Data<AdminPolicy>,
) -> ApiResult<SessionState> {
    let Some(token) = bearer_token(&req) else {
        return Ok(ApiResponse::Ok(SessionState::anonymous()));
    };

    let Some(user_id) = session_user_id(&db, token).await else {
        return Ok(ApiResponse::Ok(SessionState::anonymous()));
    };

    let user = match db.get_user_by_id(&user_id).await {
        Ok(user) => user,
        Err(_) => return Ok(ApiResponse::Ok(SessionState::anonymous())),
    };

    let is_admin = policy.is_admin(&user.email);

    Ok(ApiResponse::Ok(SessionState {
        user: Some(user.into()),
        is_authenticated: true,
        is_admin,
    }))
}
