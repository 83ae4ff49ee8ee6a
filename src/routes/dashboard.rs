use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::routes::my::caller_id;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct DashboardStats {
    pub my_startups: u64,
    pub community_members: u64,
    pub total_startups: u64,
}

#[get("")]
async fn stats(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<DashboardStats> {
    let user_id = caller_id(&auth)?;

    let my_startups = db.list_startups_by_owner(&user_id).await?.len() as u64;
    let community_members = db.count_users().await?;
    let total_startups = db.count_startups().await?;

    Ok(ApiResponse::Ok(DashboardStats {
        my_startups,
        community_members,
        total_startups,
    }))
}
