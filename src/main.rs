// src/main.rs

// --- Imports ---
use atividades::{config::Config, state::AppState, web};
use axum::serve;
use std::env;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "atividades=debug,tower_http=info,tower_sessions=info".into())
                .into()
        }))
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor EducaFácil...");

    // --- Configuração ---
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuração inválida: {}", e);
            return Err(anyhow::anyhow!("Falha ao ler a configuração: {}", e));
        }
    };
    tracing::debug!("Configuração carregada: {:?}", config);
    let addr = config.bind_addr;

    // --- Estado da Aplicação (dados em memória) ---
    let app_state = AppState::seeded(config);

    // --- Listener ---
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener em {}: {}", addr, e);
            return Err(e.into());
        }
    };
    tracing::info!("📡 Servidor escutando em http://{}", addr);

    // --- Router e Camadas ---
    tracing::info!("🛠️ Construindo router e aplicando middlewares...");
    let app = web::routes::create_app(app_state);
    tracing::info!("✅ Router e middlewares configurados.");

    // --- Início do Servidor ---
    tracing::info!("👂 Servidor pronto para aceitar conexões...");
    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    Ok(())
}
