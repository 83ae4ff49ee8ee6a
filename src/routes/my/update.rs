use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::db::startup::StartupPatch;
use crate::routes::my::{caller_id, owned_startup};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::startup::{normalize_image_url, StartupUpdate};

#[patch("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
    path: web::Path<Uuid>,
    body: web::Json<StartupUpdate>,
) -> ApiResult<entity::startup::Model> {
    let user_id = caller_id(&auth)?;
    body.validate()?;

    let id = path.into_inner();
    owned_startup(&db, &user_id, &id).await?;

    let body = body.into_inner();
    let updated = db
        .update_startup(
            &id,
            StartupPatch {
                name: body.name.map(|n| n.trim().to_string()),
                description: body.description,
                image_url: body.image_url.map(|url| normalize_image_url(Some(url))),
                visibility: body.visibility,
            },
        )
        .await?;

    Ok(ApiResponse::Ok(updated))
}
