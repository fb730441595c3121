// src/services/settings_service.rs
use crate::{
    error::AppResult,
    models::settings::{NotificationSettings, PrivacySettings},
};
use tokio::sync::RwLock;

// Troca de senha já validada pelo formulário
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Default)]
pub struct SettingsService {
    notifications: RwLock<NotificationSettings>,
    privacy: RwLock<PrivacySettings>,
}

impl SettingsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notifications(&self) -> NotificationSettings {
        *self.notifications.read().await
    }

    pub async fn privacy(&self) -> PrivacySettings {
        *self.privacy.read().await
    }

    pub async fn save_notifications(&self, settings: NotificationSettings) -> AppResult {
        *self.notifications.write().await = settings;
        tracing::info!("🔔 Configurações de notificação salvas: {:?}", settings);
        Ok(())
    }

    pub async fn save_privacy(&self, settings: PrivacySettings) -> AppResult {
        *self.privacy.write().await = settings;
        tracing::info!("🛡️ Configurações de privacidade salvas: {:?}", settings);
        Ok(())
    }

    /// Não há autenticação real: a troca é apenas registada.
    pub async fn change_password(&self, change: &PasswordChange) -> AppResult {
        tracing::info!(
            "🔑 Senha alterada (nova senha com {} caracteres)",
            change.new_password.chars().count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ProfileVisibility;

    #[tokio::test]
    async fn defaults_match_initial_page_state() {
        let service = SettingsService::new();
        let n = service.notifications().await;
        assert!(n.email_notifications && n.weekly_digest);
        assert!(!n.download_notifications && !n.marketing_emails);
        assert_eq!(service.privacy().await.profile_visibility, ProfileVisibility::Public);
    }

    #[tokio::test]
    async fn saved_settings_are_returned() {
        let service = SettingsService::new();
        let privacy = PrivacySettings {
            profile_visibility: ProfileVisibility::Private,
            show_email: true,
            show_school: false,
        };
        service.save_privacy(privacy).await.unwrap();
        assert_eq!(service.privacy().await, privacy);
    }
}
