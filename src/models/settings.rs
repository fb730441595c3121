// src/models/settings.rs
use crate::ui::select::SelectOption;
use serde::{Deserialize, Serialize};

// Preferências de notificação (cada uma é um Switch na página de configurações)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub new_activity_notifications: bool,
    pub download_notifications: bool,
    pub weekly_digest: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            new_activity_notifications: true,
            download_notifications: false,
            weekly_digest: true,
            marketing_emails: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Teachers,
    Private,
}

impl ProfileVisibility {
    pub const ALL: [ProfileVisibility; 3] = [
        ProfileVisibility::Public,
        ProfileVisibility::Teachers,
        ProfileVisibility::Private,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ProfileVisibility::Public => "public",
            ProfileVisibility::Teachers => "teachers",
            ProfileVisibility::Private => "private",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileVisibility::Public => "Público - Visível para todos",
            ProfileVisibility::Teachers => "Apenas Professores - Visível para outros professores",
            ProfileVisibility::Private => "Privado - Apenas você pode ver",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|v| SelectOption::new(v.value(), v.label()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub show_email: bool,
    pub show_school: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: ProfileVisibility::Public,
            show_email: false,
            show_school: true,
        }
    }
}
