// src/forms/activity_form.rs
use crate::{
    forms::{
        field_state::FieldState,
        validation::{self, FormError, MIN_DESCRIPTION_LEN, MIN_TITLE_LEN},
    },
    models::activity::{Activity, ActivityDraft, ActivityType, Author, GradeLevel, Subject, Upload},
    services::activity_service::{SubmitActivity, SubmitError, SubmitRequest},
    ui::{
        select::Select,
        surface::{InputSurface, Key},
        toggle::ToggleState,
        UiError,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    Title,
    Description,
    Subject,
    GradeLevel,
    Kind,
    Tags,
    File,
    Form, // erro geral (falha no envio)
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Activity), // atividade carregada, base para `has_changes`
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(Activity),
}

/// Formulário de envio/edição de atividade.
///
/// Os campos de texto vão direto ao registo de valores; matéria, série e
/// tipo passam por um `Select` cujo callback escreve no mesmo registo.
#[derive(Debug)]
pub struct ActivityForm {
    mode: FormMode,
    author: Author,
    fields: FieldState<ActivityField>,
    subject: Select,
    grade_level: Select,
    kind: Select,
    file: Option<Upload>,
    file_error: Option<FormError>, // metadados do ficheiro ilegíveis
    state: SubmissionState,
}

impl ActivityForm {
    pub fn create(author: Author) -> Self {
        Self {
            mode: FormMode::Create,
            author,
            fields: FieldState::new(),
            subject: Select::new(Subject::options())
                .with_placeholder("Selecione a matéria")
                .required(),
            grade_level: Select::new(GradeLevel::options())
                .with_placeholder("Selecione a série")
                .required(),
            kind: Select::new(ActivityType::options())
                .with_placeholder("Selecione o tipo")
                .required(),
            file: None,
            file_error: None,
            state: SubmissionState::Idle,
        }
    }

    /// Formulário de edição preenchido com a atividade existente.
    pub fn edit(activity: Activity) -> Self {
        let mut form = Self::create(activity.author.clone());
        form.load(&activity);
        form.mode = FormMode::Edit(activity);
        form
    }

    fn load(&mut self, activity: &Activity) {
        self.fields.clear();
        self.fields.set(ActivityField::Title, activity.title.clone());
        self.fields.set(ActivityField::Description, activity.description.clone());
        self.fields.set(ActivityField::Tags, activity.tags_joined());
        self.fields.set(ActivityField::Subject, activity.subject.value());
        self.fields.set(ActivityField::GradeLevel, activity.grade_level.value());
        self.fields.set(ActivityField::Kind, activity.kind.value());
        self.subject.set_value(Some(activity.subject.value()));
        self.grade_level.set_value(Some(activity.grade_level.value()));
        self.kind.set_value(Some(activity.kind.value()));
        self.file = None;
        self.file_error = None;
    }

    pub fn editing_id(&self) -> Option<u32> {
        match &self.mode {
            FormMode::Edit(activity) => Some(activity.id),
            FormMode::Create => None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn value(&self, field: ActivityField) -> &str {
        self.fields.value(field)
    }

    pub fn error_message(&self, field: ActivityField) -> String {
        self.fields.error_message(field)
    }

    pub fn has_error(&self, field: ActivityField) -> bool {
        self.fields.has_error(field)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.has_errors()
    }

    pub fn file(&self) -> Option<&Upload> {
        self.file.as_ref()
    }

    pub fn select(&self, field: ActivityField) -> Option<&Select> {
        match field {
            ActivityField::Subject => Some(&self.subject),
            ActivityField::GradeLevel => Some(&self.grade_level),
            ActivityField::Kind => Some(&self.kind),
            _ => None,
        }
    }

    fn select_mut(&mut self, field: ActivityField) -> Option<&mut Select> {
        match field {
            ActivityField::Subject => Some(&mut self.subject),
            ActivityField::GradeLevel => Some(&mut self.grade_level),
            ActivityField::Kind => Some(&mut self.kind),
            _ => None,
        }
    }

    /// Edição de um campo de texto. Apaga apenas o erro desse campo.
    pub fn set_text(&mut self, field: ActivityField, value: impl Into<String>) {
        match field {
            ActivityField::Title | ActivityField::Description | ActivityField::Tags => {
                self.fields.set(field, value)
            }
            other => tracing::debug!("Campo {:?} não é de texto, ignorado", other),
        }
    }

    pub fn open_select(
        &mut self,
        field: ActivityField,
        surface: &mut dyn InputSurface,
    ) -> Result<ToggleState, UiError> {
        let select = self
            .select_mut(field)
            .ok_or_else(|| UiError::UnknownItem(format!("{:?}", field)))?;
        Ok(select.activate(surface))
    }

    /// Escolha numa lista aberta; o valor chega ao registo pelo callback.
    pub fn choose(
        &mut self,
        field: ActivityField,
        value: &str,
        surface: &mut dyn InputSurface,
    ) -> Result<(), UiError> {
        let Self {
            fields,
            subject,
            grade_level,
            kind,
            ..
        } = self;
        let select = match field {
            ActivityField::Subject => subject,
            ActivityField::GradeLevel => grade_level,
            ActivityField::Kind => kind,
            other => return Err(UiError::UnknownItem(format!("{:?}", other))),
        };
        select.choose(value, surface, |v| fields.set(field, v))
    }

    /// Valor vindo de um POST: abre a lista e escolhe. Vazio ou
    /// desconhecido fica "sem seleção" e a lista é fechada.
    pub fn apply_choice(&mut self, field: ActivityField, value: &str, surface: &mut dyn InputSurface) {
        if value.is_empty() {
            self.clear_choice(field, surface);
            return;
        }
        let opened = match self.select(field) {
            Some(select) => select.is_open(),
            None => return,
        };
        if !opened {
            if let Err(e) = self.open_select(field, surface) {
                tracing::warn!("Não foi possível abrir {:?}: {}", field, e);
                return;
            }
        }
        if let Err(e) = self.choose(field, value, surface) {
            tracing::warn!("⚠️ Escolha inválida em {:?}: {}", field, e);
            self.clear_choice(field, surface);
        }
    }

    fn clear_choice(&mut self, field: ActivityField, surface: &mut dyn InputSurface) {
        if let Some(select) = self.select_mut(field) {
            select.key_down(Key::Escape, surface);
            select.set_value(None);
            self.fields.set(field, "");
        }
    }

    pub fn set_file(&mut self, file: Option<Upload>) {
        if file.is_some() {
            self.fields.clear_error(ActivityField::File);
        }
        self.file_error = None;
        self.file = file;
    }

    /// Ficheiro enviado mas impossível de aceitar (ex.: tamanho ilegível).
    /// Bloqueia o envio até chegar um ficheiro válido.
    pub fn reject_file(&mut self, error: FormError) {
        tracing::warn!("⚠️ Ficheiro recusado: {}", error);
        self.file = None;
        self.fields.set_error(ActivityField::File, error.clone());
        self.file_error = Some(error);
    }

    /// Etiquetas separadas por vírgula, sem espaços nem vazias.
    pub fn parse_tags(&self) -> Vec<String> {
        self.value(ActivityField::Tags)
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn check(&self) -> Result<ActivityDraft, Vec<(ActivityField, FormError)>> {
        let mut errors = Vec::new();

        if let Err(e) = validation::required_min_len(
            self.value(ActivityField::Title),
            "Título é obrigatório",
            "Título",
            MIN_TITLE_LEN,
        ) {
            errors.push((ActivityField::Title, e));
        }
        if let Err(e) = validation::required_min_len(
            self.value(ActivityField::Description),
            "Descrição é obrigatória",
            "Descrição",
            MIN_DESCRIPTION_LEN,
        ) {
            errors.push((ActivityField::Description, e));
        }

        let subject = validation::required_choice(
            Subject::from_value(self.value(ActivityField::Subject)),
            "Selecione uma matéria",
        )
        .map_err(|e| errors.push((ActivityField::Subject, e)))
        .ok();
        let grade_level = validation::required_choice(
            GradeLevel::from_value(self.value(ActivityField::GradeLevel)),
            "Selecione uma série/ano",
        )
        .map_err(|e| errors.push((ActivityField::GradeLevel, e)))
        .ok();
        let kind = validation::required_choice(
            ActivityType::from_value(self.value(ActivityField::Kind)),
            "Selecione o tipo de atividade",
        )
        .map_err(|e| errors.push((ActivityField::Kind, e)))
        .ok();

        match (&self.file_error, &self.file, &self.mode) {
            (Some(e), _, _) => errors.push((ActivityField::File, e.clone())),
            (None, Some(file), _) => {
                if let Err(e) = validation::validate_upload(file) {
                    errors.push((ActivityField::File, e));
                }
            }
            (None, None, FormMode::Create) => errors.push((
                ActivityField::File,
                FormError::MissingRequiredField("Selecione um arquivo"),
            )),
            // na edição o ficheiro atual é mantido
            (None, None, FormMode::Edit(_)) => {}
        }

        match (subject, grade_level, kind) {
            (Some(subject), Some(grade_level), Some(kind)) if errors.is_empty() => {
                Ok(ActivityDraft {
                    title: self.value(ActivityField::Title).to_string(),
                    description: self.value(ActivityField::Description).to_string(),
                    subject,
                    grade_level,
                    kind,
                    tags: self.parse_tags(),
                    file: self.file.clone(),
                    author: self.author.clone(),
                })
            }
            _ => Err(errors),
        }
    }

    /// Validação completa: o registo de erros passa a ser exatamente o das
    /// regras violadas agora.
    pub fn validate(&mut self) -> bool {
        match self.check() {
            Ok(_) => {
                self.fields.replace_errors(std::iter::empty());
                true
            }
            Err(errors) => {
                self.fields.replace_errors(errors);
                false
            }
        }
    }

    /// Idle → Submitting. Com erros de validação nada muda além dos erros.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InProgress);
        }
        let draft = match self.check() {
            Ok(draft) => {
                self.fields.replace_errors(std::iter::empty());
                draft
            }
            Err(errors) => {
                let count = errors.len();
                tracing::warn!("⚠️ Formulário de atividade com {} erro(s)", count);
                self.fields.replace_errors(errors);
                return Err(SubmitError::Invalid(count));
            }
        };
        self.state = SubmissionState::Submitting;
        tracing::debug!("Envio iniciado: '{}'", draft.title);
        Ok(match &self.mode {
            FormMode::Create => SubmitRequest::Create(draft),
            FormMode::Edit(activity) => SubmitRequest::Update {
                id: activity.id,
                draft,
            },
        })
    }

    /// Submitting → Success, ou de volta a Idle com um erro geral.
    pub fn finish(&mut self, result: Result<Activity, SubmitError>) -> Result<Activity, SubmitError> {
        if !self.is_submitting() {
            tracing::warn!("Resultado de envio recebido fora do estado Submitting, ignorado");
            return Err(SubmitError::NotSubmitting);
        }
        match result {
            Ok(activity) => {
                tracing::info!("✅ Atividade {} enviada com sucesso", activity.id);
                if let FormMode::Edit(original) = &mut self.mode {
                    *original = activity.clone();
                    self.file = None;
                }
                self.state = SubmissionState::Success(activity.clone());
                Ok(activity)
            }
            Err(e) => {
                tracing::error!("❌ Falha no envio da atividade: {}", e);
                self.state = SubmissionState::Idle;
                self.fields
                    .set_error(ActivityField::Form, FormError::SubmitFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, service: &dyn SubmitActivity) -> Result<Activity, SubmitError> {
        let request = self.begin_submit()?;
        let result = service.submit(request).await;
        self.finish(result)
    }

    /// "Enviar outra": volta a Idle com o formulário vazio (ou, na edição,
    /// com os dados da atividade).
    pub fn reset(&mut self, surface: &mut dyn InputSurface) {
        self.unmount(surface);
        self.state = SubmissionState::Idle;
        match &self.mode {
            FormMode::Create => {
                self.fields.clear();
                self.subject.set_value(None);
                self.grade_level.set_value(None);
                self.kind.set_value(None);
                self.file = None;
                self.file_error = None;
            }
            FormMode::Edit(activity) => {
                let activity = activity.clone();
                self.load(&activity);
            }
        }
    }

    pub fn has_changes(&self) -> bool {
        match &self.mode {
            FormMode::Create => {
                self.file.is_some()
                    || [
                        ActivityField::Title,
                        ActivityField::Description,
                        ActivityField::Subject,
                        ActivityField::GradeLevel,
                        ActivityField::Kind,
                        ActivityField::Tags,
                    ]
                    .into_iter()
                    .any(|f| !self.value(f).is_empty())
            }
            FormMode::Edit(a) => {
                self.value(ActivityField::Title) != a.title
                    || self.value(ActivityField::Description) != a.description
                    || self.value(ActivityField::Subject) != a.subject.value()
                    || self.value(ActivityField::GradeLevel) != a.grade_level.value()
                    || self.value(ActivityField::Kind) != a.kind.value()
                    || self.value(ActivityField::Tags) != a.tags_joined()
                    || self.file.is_some()
            }
        }
    }

    /// Bloqueia as listas enquanto um diálogo cobre o formulário.
    pub fn set_locked(&mut self, locked: bool, surface: &mut dyn InputSurface) {
        self.subject.set_disabled(locked, surface);
        self.grade_level.set_disabled(locked, surface);
        self.kind.set_disabled(locked, surface);
    }

    pub fn is_locked(&self) -> bool {
        self.subject.is_disabled() && self.grade_level.is_disabled() && self.kind.is_disabled()
    }

    pub fn unmount(&mut self, surface: &mut dyn InputSurface) {
        self.subject.unmount(surface);
        self.grade_level.unmount(surface);
        self.kind.unmount(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityStatus;
    use crate::services::{activity_service::InMemoryActivityStore, seed};
    use crate::ui::surface::DocumentSurface;
    use std::time::Duration;

    fn maria() -> Author {
        Author {
            id: seed::CURRENT_USER_ID,
            name: seed::CURRENT_USER_NAME.into(),
            school: "EMEF João da Silva".into(),
            city: "São Paulo - SP".into(),
        }
    }

    fn store() -> InMemoryActivityStore {
        InMemoryActivityStore::new(seed::activities(), Duration::ZERO)
    }

    fn filled(surface: &mut DocumentSurface) -> ActivityForm {
        let mut form = ActivityForm::create(maria());
        form.set_text(ActivityField::Title, "Atividade X");
        form.set_text(ActivityField::Description, "a".repeat(25));
        form.set_text(ActivityField::Tags, "leitura, , escrita ");
        for (field, value) in [
            (ActivityField::Subject, "portugues"),
            (ActivityField::GradeLevel, "2ano"),
            (ActivityField::Kind, "exercicio"),
        ] {
            form.open_select(field, surface).unwrap();
            form.choose(field, value, surface).unwrap();
        }
        form.set_file(Some(Upload::new("x.pdf", 2 * 1024 * 1024)));
        form
    }

    #[test]
    fn short_title_blocks_submission() {
        let mut surface = DocumentSurface::new();
        let mut form = filled(&mut surface);
        form.set_text(ActivityField::Title, "Abcd");

        assert_eq!(form.begin_submit(), Err(SubmitError::Invalid(1)));
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert_eq!(
            form.error_message(ActivityField::Title),
            "Título deve ter pelo menos 5 caracteres"
        );
    }

    #[tokio::test]
    async fn valid_form_goes_idle_submitting_success() {
        let mut surface = DocumentSurface::new();
        let mut form = filled(&mut surface);
        assert_eq!(surface.listener_count(), 0);

        let request = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::InProgress));

        let created = store().submit(request).await;
        let activity = form.finish(created).unwrap();

        assert_eq!(form.state(), &SubmissionState::Success(activity.clone()));
        assert_eq!(activity.title, "Atividade X");
        assert_eq!(activity.subject, Subject::Portugues);
        assert_eq!(activity.tags, vec!["leitura", "escrita"]);
        assert_eq!(activity.status, ActivityStatus::EmAnalise);
    }

    #[test]
    fn empty_form_reports_every_missing_field() {
        let mut form = ActivityForm::create(maria());
        assert!(!form.validate());
        assert_eq!(form.error_message(ActivityField::Title), "Título é obrigatório");
        assert_eq!(form.error_message(ActivityField::Description), "Descrição é obrigatória");
        assert_eq!(form.error_message(ActivityField::Subject), "Selecione uma matéria");
        assert_eq!(form.error_message(ActivityField::GradeLevel), "Selecione uma série/ano");
        assert_eq!(form.error_message(ActivityField::Kind), "Selecione o tipo de atividade");
        assert_eq!(form.error_message(ActivityField::File), "Selecione um arquivo");
        assert!(!form.has_error(ActivityField::Tags));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut surface = DocumentSurface::new();
        let mut form = ActivityForm::create(maria());
        form.validate();

        form.set_text(ActivityField::Title, "a");
        assert!(!form.has_error(ActivityField::Title));
        assert!(form.has_error(ActivityField::Description));

        form.open_select(ActivityField::Subject, &mut surface).unwrap();
        form.choose(ActivityField::Subject, "artes", &mut surface).unwrap();
        assert!(!form.has_error(ActivityField::Subject));
        assert!(form.has_error(ActivityField::Kind));

        // validar de novo volta a marcar o título curto
        form.validate();
        assert!(form.has_error(ActivityField::Title));
    }

    #[test]
    fn file_rules() {
        let mut surface = DocumentSurface::new();
        let mut form = filled(&mut surface);
        form.set_file(Some(Upload::new("x.exe", 10)));
        form.validate();
        assert_eq!(form.error_message(ActivityField::File), "Formato de arquivo não suportado");

        form.set_file(Some(Upload::new("x.PPTX", 11 * 1024 * 1024)));
        form.validate();
        assert_eq!(form.error_message(ActivityField::File), "Arquivo muito grande (máximo 10MB)");
    }

    #[test]
    fn rejected_file_blocks_submission_even_when_editing() {
        let mut form = ActivityForm::edit(seed::activities().remove(0));
        form.reject_file(FormError::InvalidFileSize);
        assert_eq!(form.begin_submit(), Err(SubmitError::Invalid(1)));
        assert_eq!(form.error_message(ActivityField::File), "Tamanho de arquivo inválido");

        form.set_file(Some(Upload::new("nova.pdf", 1024)));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn result_outside_submitting_is_ignored() {
        let mut surface = DocumentSurface::new();
        let mut form = filled(&mut surface);
        let stray = seed::activities().remove(0);

        assert_eq!(form.finish(Ok(stray)), Err(SubmitError::NotSubmitting));
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert!(!form.has_error(ActivityField::Form));
    }

    #[test]
    fn choices_need_an_open_list_and_known_values() {
        let mut surface = DocumentSurface::new();
        let mut form = ActivityForm::create(maria());
        assert_eq!(
            form.choose(ActivityField::Kind, "prova", &mut surface),
            Err(UiError::NotOpen)
        );

        form.open_select(ActivityField::Kind, &mut surface).unwrap();
        assert!(form.choose(ActivityField::Kind, "redacao", &mut surface).is_err());
        assert!(form.select(ActivityField::Kind).unwrap().is_open());

        form.unmount(&mut surface);
        assert_eq!(surface.listener_count(), 0);

        form.apply_choice(ActivityField::Kind, "redacao", &mut surface);
        assert_eq!(form.value(ActivityField::Kind), "");
        form.apply_choice(ActivityField::Kind, "prova", &mut surface);
        assert_eq!(form.select(ActivityField::Kind).unwrap().display_label(), "Prova");
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn locked_form_closes_lists_and_keeps_values() {
        let mut surface = DocumentSurface::new();
        let mut form = filled(&mut surface);
        form.open_select(ActivityField::Subject, &mut surface).unwrap();

        form.set_locked(true, &mut surface);
        assert!(form.is_locked());
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(
            form.open_select(ActivityField::Subject, &mut surface),
            Ok(ToggleState::Closed)
        );
        assert_eq!(form.value(ActivityField::Subject), "portugues");

        form.set_locked(false, &mut surface);
        assert!(!form.is_locked());
        assert_eq!(
            form.open_select(ActivityField::Subject, &mut surface),
            Ok(ToggleState::Open)
        );
    }

    #[tokio::test]
    async fn reset_after_success_returns_to_empty_idle() {
        let mut surface = DocumentSurface::new();
        let mut form = filled(&mut surface);
        form.submit(&store()).await.unwrap();

        form.reset(&mut surface);
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert!(!form.has_changes());
        assert_eq!(form.value(ActivityField::Title), "");
        assert!(form.select(ActivityField::Subject).unwrap().value().is_none());
    }

    #[tokio::test]
    async fn edit_tracks_changes_and_resets_status() {
        let store = store();
        let original = crate::services::activity_service::ActivityRepository::get(&store, 1)
            .await
            .unwrap();
        let mut form = ActivityForm::edit(original.clone());
        assert!(!form.has_changes());
        assert_eq!(form.value(ActivityField::Tags), original.tags_joined());

        form.set_text(ActivityField::Title, "Tabuada do 7 - revisada");
        assert!(form.has_changes());

        let updated = form.submit(&store).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.status, ActivityStatus::EmAnalise);
        assert!(!form.has_changes());
    }

    #[tokio::test]
    async fn collaborator_failure_returns_to_idle_with_error() {
        let mut missing = seed::activities().remove(0);
        missing.id = 999;
        let mut form = ActivityForm::edit(missing);

        assert_eq!(form.submit(&store()).await, Err(SubmitError::NotFound(999)));
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert!(form.has_error(ActivityField::Form));
    }
}
