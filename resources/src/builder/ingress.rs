use std::collections::BTreeMap;

use anyhow::{ensure, Result};

use super::{validate_name, validate_port};
use crate::objects::{
    ingress::{
        HttpIngressPath, HttpIngressRuleValue, IngressBackend, IngressRule, IngressRuleValue,
        IngressSpec, IngressTls,
    },
    object_name, Ingress, ObjectMeta, Service, TypeMeta,
};

pub const DEFAULT_HOST: &str = "foo.bar.com";
pub const DEFAULT_PATH: &str = "/foo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressParams {
    pub name: String,
    pub port: u16,
    pub host: String,
    pub path: String,
}

impl IngressParams {
    /// Routes `foo.bar.com/foo`.
    pub fn new(name: &str, port: u16) -> Self {
        IngressParams {
            name: name.to_string(),
            port,
            host: DEFAULT_HOST.to_string(),
            path: DEFAULT_PATH.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_port(self.port)?;
        ensure!(!self.host.is_empty(), "Ingress host must not be empty");
        ensure!(
            self.path.starts_with('/'),
            "Ingress path {} must start with '/'",
            self.path
        );
        Ok(())
    }
}

/// Routes `host` + `path` to the service generated for the same name,
/// terminating TLS with secret `<name>-tls-secret`.
pub fn ingress(params: &IngressParams) -> Ingress {
    let name = &params.name;
    tracing::debug!(
        name = %name,
        host = %params.host,
        path = %params.path,
        "Building ingress"
    );

    let annotations = BTreeMap::from([
        (
            "kubernetes.io/ingress.class".to_string(),
            "nginx".to_string(),
        ),
        (
            "nginx.ingress.kubernetes.io/rewrite-target".to_string(),
            "/".to_string(),
        ),
    ]);

    Ingress {
        type_meta: TypeMeta::of::<Ingress>(),
        metadata: ObjectMeta {
            name: object_name::<Ingress>(name),
            annotations,
            ..ObjectMeta::default()
        },
        spec: IngressSpec {
            backend: None,
            tls: vec![IngressTls {
                hosts: vec![params.host.to_owned()],
                secret_name: format!("{}-tls-secret", name),
            }],
            rules: vec![IngressRule {
                host: params.host.to_owned(),
                value: IngressRuleValue {
                    http: Some(HttpIngressRuleValue {
                        paths: vec![HttpIngressPath {
                            path: params.path.to_owned(),
                            backend: IngressBackend {
                                service_name: object_name::<Service>(name),
                                service_port: params.port,
                            },
                        }],
                    }),
                },
            }],
        },
    }
}
