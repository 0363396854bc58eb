/// Runtime configuration for embedding shells
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | KUSINA_DB_PATH | kusina.db | SQLite database file |
/// | KUSINA_LOG_LEVEL | info | Log level for [`crate::utils::logger`] |
/// | KUSINA_DEFAULT_TAX | 0.12 | Tax rate pre-filled on the billing form |
/// | KUSINA_DEFAULT_SERVICE_FEE | 0.00 | Service-fee rate pre-filled on the billing form |
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub db_path: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Default tax rate offered to the billing surface
    pub default_tax_rate: f64,
    /// Default service-fee rate offered to the billing surface
    pub default_service_fee_rate: f64,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("KUSINA_DB_PATH").unwrap_or_else(|_| "kusina.db".into()),
            log_level: std::env::var("KUSINA_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            default_tax_rate: std::env::var("KUSINA_DEFAULT_TAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.12),
            default_service_fee_rate: std::env::var("KUSINA_DEFAULT_SERVICE_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.00),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
