use serde::Serialize;

use super::{Object, ObjectMeta, TypeMeta};

/// Ingress is a collection of rules that allow inbound connections
/// to reach the endpoints defined by a backend.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Ingress {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: IngressSpec,
}

impl Object for Ingress {
    const API_VERSION: &'static str = "extensions/v1beta1";
    const KIND: &'static str = "Ingress";
    const NAME_SUFFIX: &'static str = "ingress";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct IngressSpec {
    /// Default backend for requests that match no rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<IngressBackend>,
    /// TLS configuration, one entry per certificate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tls: Vec<IngressTls>,
    /// A list of host rules used to configure the Ingress.
    pub rules: Vec<IngressRule>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressTls {
    /// Hosts included in the TLS certificate.
    pub hosts: Vec<String>,
    /// Name of the secret used to terminate TLS traffic.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secret_name: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct IngressRule {
    /// Host is the fully qualified domain name of a network host.
    pub host: String,
    #[serde(flatten)]
    pub value: IngressRuleValue,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct IngressRuleValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpIngressRuleValue>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct HttpIngressRuleValue {
    /// A collection of paths that map requests to backends.
    pub paths: Vec<HttpIngressPath>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct HttpIngressPath {
    /// Path is matched against the path of an incoming request.
    pub path: String,
    pub backend: IngressBackend,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressBackend {
    /// Name of the referenced service.
    pub service_name: String,
    /// Port of the referenced service.
    pub service_port: u16,
}
