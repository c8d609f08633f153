use std::env;
use std::time::Duration;

use crate::shared::constants::DEFAULT_PRODUCT_SERVICE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub product_service: ProductServiceConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
    /// Answer `/addCategory` with `{"hostname": ...}` instead of an empty body
    pub include_hostname: bool,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Downstream service that owns the products referencing a category
#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            product_service: ProductServiceConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        let include_hostname = env::var("INCLUDE_HOSTNAME")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .map_err(|_| "INCLUDE_HOSTNAME must be true or false".to_string())?;

        Ok(Self {
            host,
            port,
            max_request_body_size,
            include_hostname,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    /// The MySQL variables are not checked for presence, a broken DSN fails at connect time.
    pub fn from_env() -> Result<Self, String> {
        let url = mysql_url(
            &env::var("MYSQL_USER").unwrap_or_default(),
            &env::var("MYSQL_PASSWORD").unwrap_or_default(),
            &env::var("MYSQL_ADDRESS").unwrap_or_default(),
            &env::var("MYSQL_DATABASE").unwrap_or_default(),
        );

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }

    /// Connection URL with the password masked, for logging
    pub fn redacted_url(&self) -> String {
        match self.url.split_once('@') {
            Some((_, host)) => format!("mysql://***@{}", host),
            None => "***".to_string(),
        }
    }
}

impl ProductServiceConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("PRODUCT_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_PRODUCT_SERVICE_URL.to_string());

        let timeout_secs = env::var("PRODUCT_SERVICE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "PRODUCT_SERVICE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Assemble a MySQL DSN. User and password are percent-encoded, address and database are not.
pub fn mysql_url(user: &str, password: &str, address: &str, database: &str) -> String {
    format!(
        "mysql://{}:{}@{}/{}",
        urlencoding::encode(user),
        urlencoding::encode(password),
        address,
        database
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_url_plain() {
        assert_eq!(
            mysql_url("shop", "secret", "db:3306", "categories"),
            "mysql://shop:secret@db:3306/categories"
        );
    }

    #[test]
    fn test_mysql_url_encodes_credentials() {
        assert_eq!(
            mysql_url("shop", "p@ss:word/1", "db:3306", "categories"),
            "mysql://shop:p%40ss%3Aword%2F1@db:3306/categories"
        );
    }

    #[test]
    fn test_mysql_url_empty_values() {
        assert_eq!(mysql_url("", "", "", ""), "mysql://:@/");
    }

    #[test]
    fn test_redacted_url_hides_credentials() {
        let config = DatabaseConfig {
            url: mysql_url("shop", "secret", "db:3306", "categories"),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout_secs: 1,
            idle_timeout_secs: 1,
            max_lifetime_secs: 1,
        };
        assert_eq!(config.redacted_url(), "mysql://***@db:3306/categories");
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8081,
            max_request_body_size: 1024,
            include_hostname: false,
        };
        assert_eq!(config.server_address(), "0.0.0.0:8081");
    }
}
