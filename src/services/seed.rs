// src/services/seed.rs
// Dados iniciais em memória (não há base de dados).
use crate::models::{
    activity::{Activity, ActivityStatus, ActivityType, Author, GradeLevel, Subject},
    user::User,
};

pub const CURRENT_USER_ID: u32 = 1;
pub const CURRENT_USER_NAME: &str = "Prof. Maria Silva";

pub fn current_user() -> User {
    User {
        id: CURRENT_USER_ID,
        first_name: "Maria".to_string(),
        last_name: "Silva".to_string(),
        name: CURRENT_USER_NAME.to_string(),
        email: "maria.silva@escola.gov.br".to_string(),
        school: "EMEF João da Silva".to_string(),
        city: "São Paulo - SP".to_string(),
        join_date: "Janeiro 2023".to_string(),
        profile_image: None,
    }
}

fn author(id: u32, name: &str, school: &str, city: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        school: school.to_string(),
        city: city.to_string(),
    }
}

fn maria() -> Author {
    author(CURRENT_USER_ID, CURRENT_USER_NAME, "EMEF João da Silva", "São Paulo - SP")
}

#[allow(clippy::too_many_arguments)]
fn activity(
    id: u32,
    title: &str,
    description: &str,
    subject: Subject,
    grade_level: GradeLevel,
    kind: ActivityType,
    author: Author,
    (rating, downloads, views): (f32, u32, u32),
    upload_date: &str,
    (file_name, file_size): (&str, &str),
    tags: &[&str],
    status: ActivityStatus,
) -> Activity {
    let file_format = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_uppercase();
    Activity {
        id,
        title: title.to_string(),
        description: description.to_string(),
        subject,
        grade_level,
        kind,
        author,
        rating,
        downloads,
        views,
        upload_date: upload_date.to_string(),
        file_name: file_name.to_string(),
        file_size: file_size.to_string(),
        file_format,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status,
    }
}

pub fn activities() -> Vec<Activity> {
    vec![
        activity(
            1,
            "Exercícios de Multiplicação - Tabuada do 7",
            "Esta atividade foi desenvolvida para auxiliar os alunos do 3º ano na fixação da tabuada do 7. Contém exercícios variados, desde cálculos simples até problemas contextualizados que ajudam na compreensão prática da multiplicação.",
            Subject::Matematica,
            GradeLevel::Ano3,
            ActivityType::Exercicio,
            maria(),
            (4.8, 156, 1240),
            "15 Mar 2024",
            ("tabuada-7-exercicios.pdf", "2.3 MB"),
            &["multiplicação", "tabuada", "matemática básica"],
            ActivityStatus::Aprovada,
        ),
        activity(
            2,
            "Plano de Aula - Frações",
            "Plano de aula completo sobre frações para o 4º ano, incluindo objetivos, metodologia, recursos necessários e avaliação. Aborda conceitos básicos de frações através de atividades práticas e lúdicas.",
            Subject::Matematica,
            GradeLevel::Ano4,
            ActivityType::PlanoAula,
            maria(),
            (4.9, 89, 610),
            "10 Mar 2024",
            ("plano-aula-fracoes.docx", "1.8 MB"),
            &["frações", "plano de aula", "matemática"],
            ActivityStatus::Aprovada,
        ),
        activity(
            3,
            "Atividade de Interpretação de Texto",
            "Textos curtos com questões de interpretação para desenvolver a leitura e a compreensão textual dos alunos do 3º ano.",
            Subject::Portugues,
            GradeLevel::Ano3,
            ActivityType::Exercicio,
            maria(),
            (4.7, 203, 980),
            "05 Mar 2024",
            ("interpretacao-texto.pdf", "1.1 MB"),
            &["leitura", "interpretação"],
            ActivityStatus::Aprovada,
        ),
        activity(
            4,
            "Experimentos de Ciências - Plantas",
            "Projeto com experimentos simples sobre germinação e crescimento das plantas, com roteiro de observação para os alunos.",
            Subject::Ciencias,
            GradeLevel::Ano2,
            ActivityType::Projeto,
            maria(),
            (4.6, 124, 450),
            "28 Fev 2024",
            ("experimentos-plantas.pptx", "5.4 MB"),
            &["plantas", "experimentos"],
            ActivityStatus::EmAnalise,
        ),
        activity(
            5,
            "Interpretação de Texto - Fábulas",
            "Coletânea de fábulas com questões de interpretação e compreensão textual.",
            Subject::Portugues,
            GradeLevel::Ano4,
            ActivityType::Exercicio,
            author(2, "Prof. João Santos", "EMEF Monteiro Lobato", "Campinas - SP"),
            (4.9, 203, 1530),
            "02 Mar 2024",
            ("fabulas-interpretacao.pdf", "3.2 MB"),
            &["fábulas", "leitura"],
            ActivityStatus::Aprovada,
        ),
        activity(
            6,
            "Sistema Solar - Plano de Aula Completo",
            "Plano de aula detalhado sobre o sistema solar com atividades práticas e experimentos.",
            Subject::Ciencias,
            GradeLevel::Ano5,
            ActivityType::PlanoAula,
            author(3, "Prof. Ana Costa", "EMEF Cecília Meireles", "Santos - SP"),
            (4.7, 89, 720),
            "20 Fev 2024",
            ("sistema-solar.docx", "4.0 MB"),
            &["astronomia", "sistema solar"],
            ActivityStatus::Aprovada,
        ),
    ]
}
