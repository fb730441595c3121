// src/models/user.rs
use crate::models::activity::Author;
use serde::{Deserialize, Serialize};

// Professor com sessão iniciada (há apenas um, em memória)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub name: String, // nome de exibição ("Prof. Maria Silva")
    pub email: String,
    pub school: String,
    pub city: String,
    pub join_date: String,
    pub profile_image: Option<String>,
}

impl User {
    /// Autor gravado nas atividades que este professor envia.
    pub fn author(&self) -> Author {
        Author {
            id: self.id,
            name: self.name.clone(),
            school: self.school.clone(),
            city: self.city.clone(),
        }
    }

    /// Iniciais para o avatar ("MS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|w| !w.ends_with('.'))
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

// Agregados mostrados no perfil, calculados a partir das atividades do autor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProfileStats {
    pub total_activities: u32,
    pub total_downloads: u32,
    pub average_rating: f32,
}

// Struct para dados do formulário de login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_title_prefix() {
        let user = User {
            id: 1,
            first_name: "Maria".into(),
            last_name: "Silva".into(),
            name: "Prof. Maria Silva".into(),
            email: "maria.silva@escola.gov.br".into(),
            school: "EMEF João da Silva".into(),
            city: "São Paulo - SP".into(),
            join_date: "Janeiro 2023".into(),
            profile_image: None,
        };
        assert_eq!(user.initials(), "MS");
    }
}
