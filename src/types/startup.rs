use entity::startup::Visibility;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Hard cap on description length, checked before any write is attempted.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(
            "Description must be 2000 characters or less".into(),
        ));
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StartupCreate {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

impl StartupCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_description(&self.description)
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct StartupUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub visibility: Option<Visibility>,
}

impl StartupUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

/// Empty image URLs coming off the form mean "no image".
pub fn normalize_image_url(raw: Option<String>) -> Option<String> {
    raw.and_then(|url| {
        let url = url.trim().to_string();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    })
}

/// A public row enriched with its founder's display data.
#[derive(Serialize, Deserialize, Debug)]
pub struct ShowcaseStartup {
    #[serde(flatten)]
    pub startup: entity::startup::Model,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, description: String) -> StartupCreate {
        StartupCreate {
            name: name.to_string(),
            description,
            image_url: None,
            visibility: None,
        }
    }

    #[test]
    fn description_cap_is_two_thousand_characters() {
        assert!(create("EcoKids", "x".repeat(2000)).validate().is_ok());
        assert!(create("EcoKids", "x".repeat(2001)).validate().is_err());
    }

    #[test]
    fn cap_counts_characters_not_bytes() {
        // 2000 two-byte characters must pass
        assert!(create("EcoKids", "é".repeat(2000)).validate().is_ok());
        assert!(create("EcoKids", "é".repeat(2001)).validate().is_err());
    }

    #[test]
    fn name_must_not_be_empty() {
        assert!(create("", "fine".to_string()).validate().is_err());
        assert!(create("   ", "fine".to_string()).validate().is_err());
    }

    #[test]
    fn partial_update_only_checks_present_fields() {
        let patch = StartupUpdate {
            description: Some("x".repeat(2001)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(StartupUpdate::default().validate().is_ok());
    }

    #[test]
    fn blank_image_urls_collapse_to_none() {
        assert_eq!(normalize_image_url(None), None);
        assert_eq!(normalize_image_url(Some("".into())), None);
        assert_eq!(normalize_image_url(Some("   ".into())), None);
        assert_eq!(
            normalize_image_url(Some("https://img.test/a.png".into())),
            Some("https://img.test/a.png".to_string())
        );
    }
}
