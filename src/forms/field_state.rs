// src/forms/field_state.rs
use crate::forms::validation::FormError;
use std::collections::HashMap;
use std::hash::Hash;

/// Valores e erros de um formulário, indexados pelo campo.
/// Depois de `replace_errors`, um campo tem erro sse viola uma regra;
/// editar um campo apaga apenas o erro desse campo.
#[derive(Debug, Clone)]
pub struct FieldState<F> {
    values: HashMap<F, String>,
    errors: HashMap<F, FormError>,
}

impl<F> Default for FieldState<F> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            errors: HashMap::new(),
        }
    }
}

impl<F: Copy + Eq + Hash> FieldState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn error(&self, field: F) -> Option<&FormError> {
        self.errors.get(&field)
    }

    pub fn error_message(&self, field: F) -> String {
        self.errors
            .get(&field)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn has_error(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn clear_error(&mut self, field: F) {
        self.errors.remove(&field);
    }

    /// Substitui o registo de erros pelo resultado de uma validação completa.
    pub fn replace_errors(&mut self, errors: impl IntoIterator<Item = (F, FormError)>) {
        self.errors = errors.into_iter().collect();
    }

    /// Erro externo num campo (ex.: falha do serviço).
    pub fn set_error(&mut self, field: F, error: FormError) {
        self.errors.insert(field, error);
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}
