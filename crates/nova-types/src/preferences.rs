use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("invalid theme: '{other}'")),
        }
    }
}

/// Per-user settings. At most one row per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: Uuid,
    pub user_id: UserId,
    pub theme: Theme,
    pub language: String,
    pub notifications: bool,
    pub email_digest: bool,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserPreferences {
    /// A fresh row carrying the defaults.
    pub fn defaults_for(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            theme: Theme::default(),
            language: "en".to_string(),
            notifications: true,
            email_digest: false,
            timezone: "UTC".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Upsert payload; absent fields keep their stored (or default) values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub notifications: Option<bool>,
    #[serde(default)]
    pub email_digest: Option<bool>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl UpdatePreferencesRequest {
    pub fn apply(self, prefs: &mut UserPreferences) {
        if let Some(theme) = self.theme {
            prefs.theme = theme;
        }
        if let Some(language) = self.language {
            prefs.language = language;
        }
        if let Some(notifications) = self.notifications {
            prefs.notifications = notifications;
        }
        if let Some(email_digest) = self.email_digest {
            prefs.email_digest = email_digest;
        }
        if let Some(timezone) = self.timezone {
            prefs.timezone = timezone;
        }
        prefs.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::defaults_for(UserId::new());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, "en");
        assert!(prefs.notifications);
        assert!(!prefs.email_digest);
        assert_eq!(prefs.timezone, "UTC");
    }

    #[test]
    fn test_partial_update_over_defaults() {
        let mut prefs = UserPreferences::defaults_for(UserId::new());
        let patch: UpdatePreferencesRequest =
            serde_json::from_str(r#"{"theme":"dark","emailDigest":true}"#).unwrap();
        patch.apply(&mut prefs);
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.email_digest);
        assert_eq!(prefs.language, "en");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let res: Result<UpdatePreferencesRequest, _> =
            serde_json::from_str(r#"{"theme":"sepia"}"#);
        assert!(res.is_err());
    }
}
