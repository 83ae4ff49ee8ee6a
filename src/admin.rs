use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use crate::policy::AdminPolicy;
use crate::types::admin::{AdminOverview, AdminStartup, UserSummary};
use crate::types::error::AppError;
use entity::startup::Visibility;

/// Assemble the admin dashboard from already-fetched rows.
///
/// Primary path joins the administrative user listing against all startups.
/// If that listing failed, we synthesize one skeleton profile per distinct
/// owner id found in the startup rows, so the dashboard stays usable with
/// reduced fidelity.
pub fn build_overview(
    users: Result<Vec<entity::user::Model>, AppError>,
    startups: Vec<entity::startup::Model>,
    policy: &AdminPolicy,
) -> AdminOverview {
    let summaries = match users {
        Ok(users) => users
            .into_iter()
            .map(|u| summarize(u, &startups, policy))
            .collect(),
        Err(e) => {
            warn!("administrative user listing failed, synthesizing profiles from startup rows: {e}");
            placeholder_summaries(&startups)
        }
    };

    let enriched = startups
        .into_iter()
        .map(|s| {
            let founder = summaries.iter().find(|u| u.id == s.user_id);
            AdminStartup {
                user_email: founder.and_then(|u| u.email.clone()),
                username: founder.map(|u| u.username.clone()),
                avatar_url: founder.and_then(|u| u.avatar_url.clone()),
                startup: s,
            }
        })
        .collect();

    AdminOverview {
        users: summaries,
        startups: enriched,
    }
}

fn summarize(
    user: entity::user::Model,
    startups: &[entity::startup::Model],
    policy: &AdminPolicy,
) -> UserSummary {
    let (public_startups, private_startups) = owner_counts(&user.id, startups);
    // derived from the policy on every load, never read from storage
    let is_admin = policy.is_admin(&user.email);
    UserSummary {
        id: user.id,
        email: Some(user.email),
        username: user.username,
        avatar_url: user.avatar_url,
        created_at: Some(user.created_at),
        is_admin,
        startup_count: public_startups + private_startups,
        public_startups,
        private_startups,
    }
}

fn placeholder_summaries(startups: &[entity::startup::Model]) -> Vec<UserSummary> {
    let mut seen = HashSet::new();
    let mut summaries = Vec::new();
    for s in startups {
        if !seen.insert(s.user_id) {
            continue;
        }
        let (public_startups, private_startups) = owner_counts(&s.user_id, startups);
        let id_str = s.user_id.to_string();
        summaries.push(UserSummary {
            id: s.user_id,
            email: None,
            username: format!("User {}", &id_str[..8]),
            avatar_url: None,
            created_at: None,
            is_admin: false,
            startup_count: public_startups + private_startups,
            public_startups,
            private_startups,
        });
    }
    summaries
}

fn owner_counts(owner: &Uuid, startups: &[entity::startup::Model]) -> (usize, usize) {
    let mut public = 0;
    let mut private = 0;
    for s in startups.iter().filter(|s| s.user_id == *owner) {
        match s.visibility {
            Visibility::Public => public += 1,
            Visibility::Private => private += 1,
        }
    }
    (public, private)
}
