use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    /// Address stored for customers created from the entry form.
    pub default_customer_address: String,
    /// Phone number stored for customers created from the entry form.
    pub default_customer_phone: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://madang.db".to_string()),
            default_customer_address: env::var("DEFAULT_CUSTOMER_ADDRESS")
                .unwrap_or_else(|_| "Seoul".to_string()),
            default_customer_phone: env::var("DEFAULT_CUSTOMER_PHONE")
                .unwrap_or_else(|_| "010-0000-0000".to_string()),
        })
    }

    /// Configuration for a database at `database_url`, everything else defaulted.
    #[cfg(test)]
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            database_url: database_url.into(),
            default_customer_address: "Seoul".to_string(),
            default_customer_phone: "010-0000-0000".to_string(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
}
