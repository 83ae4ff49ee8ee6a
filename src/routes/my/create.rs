use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::startup::Visibility;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::db::startup::NewStartup;
use crate::routes::my::caller_id;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::startup::{normalize_image_url, StartupCreate};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
    body: web::Json<StartupCreate>,
) -> ApiResult<entity::startup::Model> {
    let user_id = caller_id(&auth)?;

    // rejected here, before anything reaches the store
    body.validate()?;

    let body = body.into_inner();
    let startup = db
        .create_startup(NewStartup {
            user_id,
            name: body.name.trim().to_string(),
            description: body.description,
            image_url: normalize_image_url(body.image_url),
            visibility: body.visibility.unwrap_or(Visibility::Private),
        })
        .await?;

    Ok(ApiResponse::Created(startup))
}
