use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, File, Source};
use serde::{Deserialize, Serialize};

use crate::objects::service::ServiceType;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct KstubConfig {
    /// Output level of logs (trace, debug, info, warn, error).
    /// Defaults to "info".
    pub log_level: String,
    /// Application name the object names are derived from.
    pub name: String,
    /// Number of desired pod replicas. Defaults to 1.
    pub replicas: u32,
    /// Main container port. Defaults to 80.
    pub port: u16,
    /// Type of generated services. Defaults to ClusterIP.
    pub service_type: ServiceType,
    /// Host routed by generated ingresses.
    pub host: String,
    /// Path routed by generated ingresses.
    pub path: String,
}

impl Default for KstubConfig {
    fn default() -> Self {
        KstubConfig {
            log_level: "info".to_string(),
            name: "name".to_string(),
            replicas: 1,
            port: 80,
            service_type: ServiceType::ClusterIP,
            host: "foo.bar.com".to_string(),
            path: "/foo".to_string(),
        }
    }
}

impl KstubConfig {
    /// Read defaults from a config file, format inferred from its extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_source(File::from(path))
            .with_context(|| format!("Failed to read config file {}", path.display()))
    }

    /// Like [`KstubConfig::from_file`], falling back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_source<T>(source: T) -> Result<Self>
    where
        T: Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize::<KstubConfig>()
            .with_context(|| "Failed to parse config".to_string())
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn defaults() {
        let config = KstubConfig::load(None).unwrap();
        assert_eq!(config.name, "name");
        assert_eq!(config.replicas, 1);
        assert_eq!(config.port, 80);
        assert_eq!(config.service_type, ServiceType::ClusterIP);
        assert_eq!(config.host, "foo.bar.com");
        assert_eq!(config.path, "/foo");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() -> Result<()> {
        let yaml = "name: shop\nport: 8080\nservice_type: NodePort\n";
        let config = KstubConfig::from_source(File::from_str(yaml, FileFormat::Yaml))?;
        assert_eq!(config.name, "shop");
        assert_eq!(config.port, 8080);
        assert_eq!(config.service_type, ServiceType::NodePort);
        assert_eq!(config.replicas, 1);
        assert_eq!(config.path, "/foo");
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = KstubConfig::load(Some(Path::new("/nonexistent/kstub.yaml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kstub.yaml"));
    }

    #[test]
    fn service_type_ignores_case() -> Result<()> {
        let yaml = "service_type: nodeport\n";
        let config = KstubConfig::from_source(File::from_str(yaml, FileFormat::Yaml))?;
        assert_eq!(config.service_type, ServiceType::NodePort);
        Ok(())
    }

    #[test]
    fn unknown_service_type_is_rejected() {
        let yaml = "service_type: Headless\n";
        assert!(KstubConfig::from_source(File::from_str(yaml, FileFormat::Yaml)).is_err());
    }
}
