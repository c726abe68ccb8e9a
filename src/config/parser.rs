use super::ServiceConfig;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

use tracing::info;

/// Loads and parses the service configuration from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into a ServiceConfig
pub fn load_service_config(file_path: &Path) -> Result<ServiceConfig, ConfigError> {
    let yaml_str = fs::read_to_string(file_path)?;
    let service_config: ServiceConfig = serde_yaml::from_str(&yaml_str)?;
    info!("Loaded service configuration from {}", file_path.display());
    Ok(service_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_store_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "members:\n  url: /srv/members.db\norders:\n  url: /srv/orders.db\npool_size: 8"
        )
        .unwrap();

        let config = load_service_config(file.path()).unwrap();
        assert_eq!(config.members.unwrap().url, "/srv/members.db");
        assert_eq!(config.orders.unwrap().url, "/srv/orders.db");
        assert_eq!(config.pool_size, Some(8));
    }

    #[test]
    fn every_section_is_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "orders:\n  url: orders-only.db").unwrap();

        let config = load_service_config(file.path()).unwrap();
        assert!(config.members.is_none());
        assert_eq!(config.pool_size, None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_service_config(Path::new("/nonexistent/roster.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "members: [unterminated").unwrap();

        let err = load_service_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }
}
