use serde::{Deserialize, Serialize};

/// Workspace-wide preferences; a single row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Settings {
    pub id: i64,
    pub theme: String,
    pub accent_color: String,
    pub bot_enabled: bool,
    pub in_app_notifications: bool,
    pub email_notifications: bool,
}

impl Settings {
    pub fn from_input(id: i64, input: SettingsInput) -> Self {
        Self {
            id,
            theme: input.theme,
            accent_color: input.accent_color,
            bot_enabled: input.bot_enabled,
            in_app_notifications: input.in_app_notifications,
            email_notifications: input.email_notifications,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SettingsInput {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "enabled")]
    pub bot_enabled: bool,
    #[serde(default = "enabled")]
    pub in_app_notifications: bool,
    #[serde(default)]
    pub email_notifications: bool,
}

impl Default for SettingsInput {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            accent_color: default_accent_color(),
            bot_enabled: true,
            in_app_notifications: true,
            email_notifications: false,
        }
    }
}

fn default_theme() -> String {
    "black-blue".to_string()
}

fn default_accent_color() -> String {
    "#3B82F6".to_string()
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_matches_defaults() {
        let input: SettingsInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, SettingsInput::default());
    }
}
