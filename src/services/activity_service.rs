// src/services/activity_service.rs
use crate::models::activity::{
    format_file_size, format_upload_date, Activity, ActivityDraft, ActivityStatus, ActivityType,
    GradeLevel, Subject,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("O formulário contém {0} erro(s) de validação")]
    Invalid(usize),

    #[error("Já existe um envio em andamento")]
    InProgress,

    #[error("Nenhum envio em andamento")]
    NotSubmitting,

    #[error("Atividade {0} não encontrada")]
    NotFound(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create(ActivityDraft),
    Update { id: u32, draft: ActivityDraft },
}

/// Escrita remota de uma atividade (criação ou edição).
#[async_trait]
pub trait SubmitActivity: Send + Sync {
    async fn submit(&self, request: SubmitRequest) -> Result<Activity, SubmitError>;
}

/// Leituras e contadores. Sem estado global: tudo passa por aqui.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn get(&self, id: u32) -> Option<Activity>;
    async fn list(&self) -> Vec<Activity>;
    async fn search(&self, query: &SearchQuery) -> Vec<Activity>;
    async fn by_author(&self, author_id: u32) -> Vec<Activity>;
    async fn record_view(&self, id: u32) -> Option<u32>;
    async fn record_download(&self, id: u32) -> Option<u32>;
}

// --- Pesquisa ---

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub subject: Option<Subject>,
    pub grade_level: Option<GradeLevel>,
    pub kind: Option<ActivityType>,
}

impl SearchQuery {
    pub fn has_filters(&self) -> bool {
        self.subject.is_some() || self.grade_level.is_some() || self.kind.is_some()
    }

    /// Título contém o termo (sem distinguir maiúsculas) e todos os filtros batem.
    pub fn matches(&self, activity: &Activity) -> bool {
        activity
            .title
            .to_lowercase()
            .contains(&self.term.trim().to_lowercase())
            && self.subject.map_or(true, |s| activity.subject == s)
            && self.grade_level.map_or(true, |g| activity.grade_level == g)
            && self.kind.map_or(true, |k| activity.kind == k)
    }
}

// --- Implementação em memória ---

pub struct InMemoryActivityStore {
    activities: RwLock<BTreeMap<u32, Activity>>,
    next_id: AtomicU32,
    latency: Duration, // latência simulada nas escritas
}

impl InMemoryActivityStore {
    pub fn new(seed: Vec<Activity>, latency: Duration) -> Self {
        let next = seed.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let activities = seed.into_iter().map(|a| (a.id, a)).collect();
        Self {
            activities: RwLock::new(activities),
            next_id: AtomicU32::new(next),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tracing::debug!("Simulando latência de {:?}", self.latency);
            tokio::time::sleep(self.latency).await;
        }
    }

    fn apply_file(activity: &mut Activity, draft: &ActivityDraft) {
        if let Some(file) = &draft.file {
            activity.file_name = file.name.clone();
            activity.file_size = format_file_size(file.size);
            activity.file_format = file.extension().to_uppercase();
        }
    }
}

#[async_trait]
impl SubmitActivity for InMemoryActivityStore {
    async fn submit(&self, request: SubmitRequest) -> Result<Activity, SubmitError> {
        self.simulate_latency().await;
        let mut activities = self.activities.write().await;

        match request {
            SubmitRequest::Create(draft) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let mut activity = Activity {
                    id,
                    title: draft.title.clone(),
                    description: draft.description.clone(),
                    subject: draft.subject,
                    grade_level: draft.grade_level,
                    kind: draft.kind,
                    author: draft.author.clone(),
                    rating: 0.0,
                    downloads: 0,
                    views: 0,
                    upload_date: format_upload_date(chrono::Local::now().date_naive()),
                    file_name: String::new(),
                    file_size: String::new(),
                    file_format: String::new(),
                    tags: draft.tags.clone(),
                    status: ActivityStatus::EmAnalise,
                };
                Self::apply_file(&mut activity, &draft);
                tracing::info!("📥 Atividade {} criada: '{}'", id, activity.title);
                activities.insert(id, activity.clone());
                Ok(activity)
            }
            SubmitRequest::Update { id, draft } => {
                let activity = activities.get_mut(&id).ok_or(SubmitError::NotFound(id))?;
                activity.title = draft.title.clone();
                activity.description = draft.description.clone();
                activity.subject = draft.subject;
                activity.grade_level = draft.grade_level;
                activity.kind = draft.kind;
                activity.tags = draft.tags.clone();
                Self::apply_file(activity, &draft);
                // toda edição volta para moderação
                activity.status = ActivityStatus::EmAnalise;
                tracing::info!("✏️ Atividade {} atualizada, estado: {}", id, activity.status);
                Ok(activity.clone())
            }
        }
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityStore {
    async fn get(&self, id: u32) -> Option<Activity> {
        self.activities.read().await.get(&id).cloned()
    }

    async fn list(&self) -> Vec<Activity> {
        self.activities.read().await.values().cloned().collect()
    }

    async fn search(&self, query: &SearchQuery) -> Vec<Activity> {
        let activities = self.activities.read().await;
        let found: Vec<Activity> = activities
            .values()
            .filter(|a| a.status == ActivityStatus::Aprovada)
            .filter(|a| query.matches(a))
            .cloned()
            .collect();
        tracing::debug!("Pesquisa {:?}: {} resultado(s)", query, found.len());
        found
    }

    async fn by_author(&self, author_id: u32) -> Vec<Activity> {
        let activities = self.activities.read().await;
        // mais recentes primeiro
        activities
            .values()
            .rev()
            .filter(|a| a.author.id == author_id)
            .cloned()
            .collect()
    }

    async fn record_view(&self, id: u32) -> Option<u32> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(&id)?;
        activity.views += 1;
        Some(activity.views)
    }

    async fn record_download(&self, id: u32) -> Option<u32> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(&id)?;
        activity.downloads += 1;
        Some(activity.downloads)
    }
}
