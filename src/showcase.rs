use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::startup::ShowcaseStartup;

/// Sort control on the public showcase.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Name,
}

/// Pure filter + sort over the in-memory list, recomputed per request.
/// The text filter matches case-insensitively against name, description,
/// and the founder's display name.
pub fn filter_and_sort(
    startups: Vec<ShowcaseStartup>,
    search: &str,
    sort: SortKey,
) -> Vec<ShowcaseStartup> {
    let needle = search.trim().to_lowercase();
    let mut filtered: Vec<ShowcaseStartup> = startups
        .into_iter()
        .filter(|s| {
            if needle.is_empty() {
                return true;
            }
            s.startup.name.to_lowercase().contains(&needle)
                || s.startup.description.to_lowercase().contains(&needle)
                || s.username.to_lowercase().contains(&needle)
        })
        .collect();

    filtered.sort_by(|a, b| compare(a, b, sort));
    filtered
}

fn compare(a: &ShowcaseStartup, b: &ShowcaseStartup, sort: SortKey) -> Ordering {
    let ord = match sort {
        SortKey::Newest => b.startup.created_at.cmp(&a.startup.created_at),
        SortKey::Oldest => a.startup.created_at.cmp(&b.startup.created_at),
        SortKey::Name => a.startup.name.cmp(&b.startup.name),
    };
    // ties resolve by id so every ordering is total and stable across loads
    ord.then_with(|| a.startup.id.cmp(&b.startup.id))
}
