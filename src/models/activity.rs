// src/models/activity.rs
use crate::ui::select::SelectOption;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Catálogos de opções (matéria, série, tipo) ---
// Cada variante tem um `value` estável (usado nos formulários e URLs)
// e um `label` legível (usado nas páginas).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Matemática")]
    Matematica,
    #[serde(rename = "Português")]
    Portugues,
    #[serde(rename = "Ciências")]
    Ciencias,
    #[serde(rename = "História")]
    Historia,
    #[serde(rename = "Geografia")]
    Geografia,
    #[serde(rename = "Artes")]
    Artes,
    #[serde(rename = "Educação Física")]
    EducacaoFisica,
    #[serde(rename = "Inglês")]
    Ingles,
}

impl Subject {
    pub const ALL: [Subject; 8] = [
        Subject::Matematica,
        Subject::Portugues,
        Subject::Ciencias,
        Subject::Historia,
        Subject::Geografia,
        Subject::Artes,
        Subject::EducacaoFisica,
        Subject::Ingles,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Subject::Matematica => "matematica",
            Subject::Portugues => "portugues",
            Subject::Ciencias => "ciencias",
            Subject::Historia => "historia",
            Subject::Geografia => "geografia",
            Subject::Artes => "artes",
            Subject::EducacaoFisica => "educacao-fisica",
            Subject::Ingles => "ingles",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Matematica => "Matemática",
            Subject::Portugues => "Português",
            Subject::Ciencias => "Ciências",
            Subject::Historia => "História",
            Subject::Geografia => "Geografia",
            Subject::Artes => "Artes",
            Subject::EducacaoFisica => "Educação Física",
            Subject::Ingles => "Inglês",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|s| SelectOption::new(s.value(), s.label()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "1º Ano")]
    Ano1,
    #[serde(rename = "2º Ano")]
    Ano2,
    #[serde(rename = "3º Ano")]
    Ano3,
    #[serde(rename = "4º Ano")]
    Ano4,
    #[serde(rename = "5º Ano")]
    Ano5,
    #[serde(rename = "6º Ano")]
    Ano6,
    #[serde(rename = "7º Ano")]
    Ano7,
    #[serde(rename = "8º Ano")]
    Ano8,
    #[serde(rename = "9º Ano")]
    Ano9,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 9] = [
        GradeLevel::Ano1,
        GradeLevel::Ano2,
        GradeLevel::Ano3,
        GradeLevel::Ano4,
        GradeLevel::Ano5,
        GradeLevel::Ano6,
        GradeLevel::Ano7,
        GradeLevel::Ano8,
        GradeLevel::Ano9,
    ];

    pub fn value(self) -> &'static str {
        match self {
            GradeLevel::Ano1 => "1ano",
            GradeLevel::Ano2 => "2ano",
            GradeLevel::Ano3 => "3ano",
            GradeLevel::Ano4 => "4ano",
            GradeLevel::Ano5 => "5ano",
            GradeLevel::Ano6 => "6ano",
            GradeLevel::Ano7 => "7ano",
            GradeLevel::Ano8 => "8ano",
            GradeLevel::Ano9 => "9ano",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeLevel::Ano1 => "1º Ano",
            GradeLevel::Ano2 => "2º Ano",
            GradeLevel::Ano3 => "3º Ano",
            GradeLevel::Ano4 => "4º Ano",
            GradeLevel::Ano5 => "5º Ano",
            GradeLevel::Ano6 => "6º Ano",
            GradeLevel::Ano7 => "7º Ano",
            GradeLevel::Ano8 => "8º Ano",
            GradeLevel::Ano9 => "9º Ano",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|g| SelectOption::new(g.value(), g.label()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "Prova")]
    Prova,
    #[serde(rename = "Exercício")]
    Exercicio,
    #[serde(rename = "Plano de Aula")]
    PlanoAula,
    #[serde(rename = "Projeto")]
    Projeto,
    #[serde(rename = "Jogo Educativo")]
    Jogo,
    #[serde(rename = "Apresentação")]
    Apresentacao,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Prova,
        ActivityType::Exercicio,
        ActivityType::PlanoAula,
        ActivityType::Projeto,
        ActivityType::Jogo,
        ActivityType::Apresentacao,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ActivityType::Prova => "prova",
            ActivityType::Exercicio => "exercicio",
            ActivityType::PlanoAula => "plano-aula",
            ActivityType::Projeto => "projeto",
            ActivityType::Jogo => "jogo",
            ActivityType::Apresentacao => "apresentacao",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Prova => "Prova",
            ActivityType::Exercicio => "Exercício",
            ActivityType::PlanoAula => "Plano de Aula",
            ActivityType::Projeto => "Projeto",
            ActivityType::Jogo => "Jogo Educativo",
            ActivityType::Apresentacao => "Apresentação",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|t| SelectOption::new(t.value(), t.label()))
            .collect()
    }
}

// --- Estado de moderação ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[serde(rename = "Aprovada")]
    Aprovada,
    #[serde(rename = "Em Análise")]
    EmAnalise,
    #[serde(rename = "Rejeitada")]
    Rejeitada,
}

impl ActivityStatus {
    pub fn label(self) -> &'static str {
        match self {
            ActivityStatus::Aprovada => "Aprovada",
            ActivityStatus::EmAnalise => "Em Análise",
            ActivityStatus::Rejeitada => "Rejeitada",
        }
    }

    /// Classe CSS do badge de estado.
    pub fn badge(self) -> &'static str {
        match self {
            ActivityStatus::Aprovada => "badge-default",
            ActivityStatus::EmAnalise => "badge-secondary",
            ActivityStatus::Rejeitada => "badge-destructive",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- Entidades ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: u32, // estável; o nome de exibição pode mudar
    pub name: String,
    pub school: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub subject: Subject,
    pub grade_level: GradeLevel,
    pub kind: ActivityType,
    pub author: Author,
    pub rating: f32, // 0.0 a 5.0
    pub downloads: u32,
    pub views: u32,
    pub upload_date: String, // já formatada para exibição
    pub file_name: String,
    pub file_size: String,
    pub file_format: String,
    pub tags: Vec<String>,
    pub status: ActivityStatus,
}

impl Activity {
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}

/// Ficheiro escolhido no formulário (apenas metadados; nada é armazenado).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    pub name: String,
    pub size: u64, // bytes
}

impl Upload {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Último segmento após o ponto, em minúsculas.
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Dados validados que saem de um formulário de atividade.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub subject: Subject,
    pub grade_level: GradeLevel,
    pub kind: ActivityType,
    pub tags: Vec<String>,
    pub file: Option<Upload>,
    pub author: Author,
}

// --- Formatação ---

const MESES: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// "15 Mar 2024"
pub fn format_upload_date(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    format!("{:02} {} {}", date.day(), MESES[date.month0() as usize], date.year())
}

/// "2.3 MB", "512 KB" ou "800 B".
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.0} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_values_roundtrip_to_variants() {
        for s in Subject::ALL {
            assert_eq!(Subject::from_value(s.value()), Some(s));
        }
        assert_eq!(GradeLevel::from_value("3ano"), Some(GradeLevel::Ano3));
        assert_eq!(ActivityType::from_value("plano-aula"), Some(ActivityType::PlanoAula));
        assert_eq!(Subject::from_value("Matemática"), None);
    }

    #[test]
    fn upload_extension_uses_last_segment() {
        assert_eq!(Upload::new("plano.final.DOCX", 1).extension(), "docx");
        assert_eq!(Upload::new("semextensao", 1).extension(), "semextensao");
    }

    #[test]
    fn formats_dates_and_sizes_for_display() {
        let d = chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_upload_date(d), "05 Mar 2024");
        assert_eq!(format_file_size(2 * 1024 * 1024 + 300 * 1024), "2.3 MB");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(10), "10 B");
    }
}
