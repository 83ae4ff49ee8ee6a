use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::showcase::{self, SortKey};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::startup::ShowcaseStartup;

#[derive(Debug, Deserialize)]
pub struct ShowcaseQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortKey,
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ShowcaseQuery>,
) -> ApiResult<Vec<ShowcaseStartup>> {
    let rows = db.list_public_startups().await?;

    // founder display data comes from the user directory; unknown owners
    // show as "Anonymous" rather than hiding the card
    let users = db.list_users().await.unwrap_or_default();
    let enriched = rows
        .into_iter()
        .map(|s| {
            let founder = users.iter().find(|u| u.id == s.user_id);
            ShowcaseStartup {
                username: founder
                    .map(|u| u.username.clone())
                    .unwrap_or_else(|| "Anonymous".to_string()),
                avatar_url: founder.and_then(|u| u.avatar_url.clone()),
                startup: s,
            }
        })
        .collect();

    Ok(ApiResponse::Ok(showcase::filter_and_sort(
        enriched,
        &query.search,
        query.sort,
    )))
}
