use actix_web::{
    dev::ServiceRequest,
    error::{ErrorForbidden, ErrorInternalServerError, ErrorUnauthorized},
    web, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy::AdminPolicy;
use crate::utils::token::session_user_id;

/// Pull the raw bearer token out of an Authorization header, if any.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn service_db(req: &ServiceRequest) -> Option<web::Data<Arc<PostgresService>>> {
    req.app_data::<web::Data<Arc<PostgresService>>>().cloned()
}

pub async fn validate_session(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = service_db(&req) else {
        return Err((ErrorInternalServerError("Service misconfigured"), req));
    };

    match session_user_id(&db, credentials.token()).await {
        Some(_) => Ok(req),
        None => Err((ErrorUnauthorized("Invalid token"), req)),
    }
}

/// Session check plus the allow-list. Non-admins get an access-denied
/// response, not a redirect.
pub async fn validate_admin(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = service_db(&req) else {
        return Err((ErrorInternalServerError("Service misconfigured"), req));
    };
    let Some(policy) = req.app_data::<web::Data<AdminPolicy>>().cloned() else {
        return Err((ErrorInternalServerError("Service misconfigured"), req));
    };

    let Some(user_id) = session_user_id(&db, credentials.token()).await else {
        return Err((ErrorUnauthorized("Invalid token"), req));
    };

    let user = match db.get_user_by_id(&user_id).await {
        Ok(user) => user,
        Err(_) => return Err((ErrorUnauthorized("Invalid token"), req)),
    };

    if policy.is_admin(&user.email) {
        Ok(req)
    } else {
        Err((
            ErrorForbidden("You don't have permission to access this page."),
            req,
        ))
    }
}
