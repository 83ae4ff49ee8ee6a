pub mod create;
pub mod delete;
pub mod list;
pub mod update;
pub mod visibility;

use actix_web::web;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::extract_token_parts;

/// Caller id from the (already middleware-validated) bearer token.
pub(crate) fn caller_id(auth: &BearerAuth) -> Result<Uuid, AppError> {
    extract_token_parts(auth.token())
        .map(|(user_id, _)| user_id)
        .ok_or(AppError::Unauthorized)
}

/// Owners touch only their own rows; everything else is rejected.
pub(crate) async fn owned_startup(
    db: &web::Data<Arc<PostgresService>>,
    owner: &Uuid,
    id: &Uuid,
) -> Result<entity::startup::Model, AppError> {
    let startup = db.get_startup(id).await?;
    if startup.user_id != *owner {
        return Err(AppError::Forbidden);
    }
    Ok(startup)
}
