// src/services/user_service.rs
use crate::{
    error::AppResult,
    forms::validation,
    models::{
        activity::{Activity, ActivityStatus},
        user::{ProfileStats, User},
    },
};
use tokio::sync::RwLock;

// Campos editáveis na aba "Conta" das configurações
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub school: String,
    pub city: String,
}

/// Perfil do professor atual, guardado em memória.
pub struct ProfileService {
    user: RwLock<User>,
}

impl ProfileService {
    pub fn new(user: User) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }

    pub async fn current(&self) -> User {
        self.user.read().await.clone()
    }

    /// Edição rápida no perfil (nome de exibição e email).
    pub async fn update_profile(&self, name: &str, email: &str) -> AppResult<User> {
        let name = name.trim();
        let email = email.trim();
        validation::required(name, "Nome é obrigatório")?;
        validation::required(email, "Email é obrigatório")?;
        let mut user = self.user.write().await;
        user.name = name.to_string();
        user.email = email.to_string();
        tracing::info!("👤 Perfil atualizado: {} <{}>", user.name, user.email);
        Ok(user.clone())
    }

    /// Dados da aba "Conta". O nome de exibição acompanha nome e sobrenome,
    /// mantendo o título ("Prof.") quando existe.
    pub async fn update_account(&self, update: &AccountUpdate) -> AppResult<User> {
        let first_name = update.first_name.trim();
        let last_name = update.last_name.trim();
        let email = update.email.trim();
        validation::required(first_name, "Nome é obrigatório")?;
        validation::required(last_name, "Sobrenome é obrigatório")?;
        validation::required(email, "Email é obrigatório")?;

        let mut user = self.user.write().await;
        let name = user
            .name
            .split_whitespace()
            .take_while(|w| w.ends_with('.'))
            .chain([first_name, last_name])
            .collect::<Vec<_>>()
            .join(" ");
        user.name = name;
        user.first_name = first_name.to_string();
        user.last_name = last_name.to_string();
        user.email = email.to_string();
        user.school = update.school.trim().to_string();
        user.city = update.city.trim().to_string();
        tracing::info!("👤 Dados da conta atualizados para {}", user.email);
        Ok(user.clone())
    }
}

/// Agregados do perfil. A média considera apenas atividades aprovadas
/// (as restantes ainda não receberam avaliações).
pub fn stats(activities: &[Activity]) -> ProfileStats {
    let total_downloads = activities.iter().map(|a| a.downloads).sum();
    let rated: Vec<f32> = activities
        .iter()
        .filter(|a| a.status == ActivityStatus::Aprovada)
        .map(|a| a.rating)
        .collect();
    let average_rating = if rated.is_empty() {
        0.0
    } else {
        let avg = rated.iter().sum::<f32>() / rated.len() as f32;
        (avg * 10.0).round() / 10.0
    };
    ProfileStats {
        total_activities: activities.len() as u32,
        total_downloads,
        average_rating,
    }
}
