//! Configurazione - caricata dalle variabili d'ambiente (e dal file .env)

use chrono::Duration;
use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use tracing::info;

/// Durata massima dei token: dieci anni
pub const MAX_JWT_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Durata dei token, `None` = token senza scadenza
    pub jwt_ttl: Option<Duration>,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub run_migrations: bool,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione a partire da una funzione di lookup generica,
    /// così da poterla testare senza toccare l'ambiente del processo
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| "JWT_SECRET must be set in the environment or .env file".to_string())?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:covid19IndiaPortal.db".to_string());

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = parse_or(
            &lookup,
            "SERVER_PORT",
            3000u16,
            "Invalid SERVER_PORT: must be a number between 0-65535",
        )?;

        let max_connections = parse_or(
            &lookup,
            "MAX_DB_CONNECTIONS",
            5u32,
            "Invalid MAX_DB_CONNECTIONS: must be a positive number",
        )?;
        if max_connections == 0 {
            return Err("Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string());
        }

        let connection_lifetime_secs = parse_or(
            &lookup,
            "DB_CONNECTION_LIFETIME_SECS",
            1800u64,
            "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number",
        )?;

        let jwt_ttl = match lookup("JWT_TTL_SECS") {
            Some(raw) => {
                let ttl = raw
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|secs| (1..=MAX_JWT_TTL_SECS).contains(secs))
                    .and_then(Duration::try_seconds)
                    .ok_or_else(|| {
                        format!(
                            "Invalid JWT_TTL_SECS: must be between 1 and {} seconds",
                            MAX_JWT_TTL_SECS
                        )
                    })?;
                Some(ttl)
            }
            None => None,
        };

        let run_migrations = parse_or(
            &lookup,
            "RUN_MIGRATIONS",
            true,
            "Invalid RUN_MIGRATIONS: must be true or false",
        )?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_ttl,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            run_migrations,
            app_env,
        })
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn log_summary(&self) {
        info!(
            env = %self.app_env,
            address = %format!("{}:{}", self.server_host, self.server_port),
            database = %Self::mask_url(&self.database_url),
            max_connections = self.max_connections,
            connection_lifetime_secs = self.connection_lifetime_secs,
            run_migrations = self.run_migrations,
            "Server configuration loaded"
        );
        match self.jwt_ttl {
            Some(ttl) => info!("JWT tokens expire after {}s", ttl.num_seconds()),
            None => info!("JWT tokens are issued without expiration"),
        }
    }

    /// Maschera le credenziali dell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let (Some(at_pos), Some(scheme_end)) = (url.find('@'), url.find("://")) {
            if scheme_end < at_pos {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        // sqlite: nessuna credenziale, il path è innocuo
        url.to_string()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T, error: &str) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| error.to_string()),
        None => Ok(default),
    }
}
