// src/state.rs
use crate::{
    config::Config,
    services::{
        activity_service::{ActivityRepository, InMemoryActivityStore, SubmitActivity},
        seed,
        settings_service::SettingsService,
        user_service::ProfileService,
    },
};
use std::sync::Arc;

// Estado partilhado por todos os handlers. O mesmo armazenamento em
// memória serve as leituras e os envios.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub activities: Arc<dyn ActivityRepository>,
    pub submitter: Arc<dyn SubmitActivity>,
    pub profile: Arc<ProfileService>,
    pub settings: Arc<SettingsService>,
}

impl AppState {
    /// Estado inicial com os dados de demonstração.
    pub fn seeded(config: Config) -> Self {
        let store = Arc::new(InMemoryActivityStore::new(
            seed::activities(),
            config.submit_delay,
        ));
        Self {
            config: Arc::new(config),
            activities: store.clone(),
            submitter: store,
            profile: Arc::new(ProfileService::new(seed::current_user())),
            settings: Arc::new(SettingsService::new()),
        }
    }
}
