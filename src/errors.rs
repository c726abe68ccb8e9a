use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use tokio::task::JoinError;

/// Failures raised by the member and order stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Diesel error: {0}")]
    DieselError(#[from] DieselError),
    #[error("Connection pool error: {0}")]
    PoolError(#[from] PoolError),
    #[error("Migration error: {0}")]
    MigrationError(String),
    #[error("Blocking task error: {0}")]
    JoinError(#[from] JoinError),
}

/// Failures raised while loading the service configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
