// src/config.rs
use crate::error::{AppError, AppResult};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

// Configuração lida do ambiente (.env carregado em main)
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub submit_delay: Duration,
    pub session_inactivity_days: i64,
    pub session_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            submit_delay: Duration::ZERO,
            session_inactivity_days: 1,
            session_secure: false,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Variáveis ausentes ficam com o valor por omissão; presentes mas
    /// inválidas são erro.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            submit_delay: parse_var::<u64>(&lookup, "SUBMIT_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
            session_inactivity_days: parse_var(&lookup, "SESSION_INACTIVITY_DAYS")?
                .unwrap_or(defaults.session_inactivity_days),
            session_secure: parse_var(&lookup, "SESSION_SECURE")?
                .unwrap_or(defaults.session_secure),
        };
        if config.session_inactivity_days < 1 {
            return Err(AppError::ConfigError(
                "SESSION_INACTIVITY_DAYS deve ser pelo menos 1".to_string(),
            ));
        }
        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> AppResult<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::ConfigError(format!("{} inválido: '{}'", key, raw))),
    }
}
