use actix_web::{get, web};
use std::sync::Arc;

use crate::admin::build_overview;
use crate::db::postgres_service::PostgresService;
use crate::policy::AdminPolicy;
use crate::types::admin::AdminOverview;
use crate::types::response::{ApiResponse, ApiResult};

/// Rebuilt from scratch on every call; the client re-requests it after
/// every mutating action.
#[get("/overview")]
async fn overview(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    policy: web::Data<AdminPolicy>,
) -> ApiResult<AdminOverview> {
    let startups = db.list_all_startups().await?;

    // the administrative listing may fail independently of the startup
    // query; build_overview degrades to synthesized profiles in that case
    let users = db.list_users().await;

    Ok(ApiResponse::Ok(build_overview(users, startups, &policy)))
}
