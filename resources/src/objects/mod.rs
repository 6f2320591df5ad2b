use std::collections::BTreeMap;

use serde::Serialize;

pub mod deployment;
pub mod ingress;
pub mod pod;
pub mod service;

pub use deployment::Deployment;
pub use ingress::Ingress;
pub use service::Service;

/// A top-level document the generator knows how to emit.
pub trait Object {
    /// Versioned schema of the object, e.g. `apps/v1`.
    const API_VERSION: &'static str;
    /// REST resource this object represents, e.g. `Deployment`.
    const KIND: &'static str;
    /// Appended to the application name to form the object name.
    const NAME_SUFFIX: &'static str;

    fn metadata(&self) -> &ObjectMeta;

    fn name(&self) -> &String {
        &self.metadata().name
    }
}

/// Name of the object of kind `T` generated for application `app`.
pub fn object_name<T: Object>(app: &str) -> String {
    format!("{}-{}", app, T::NAME_SUFFIX)
}

/// Several documents rendered into one stream.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum KubeObject {
    Deployment(Deployment),
    Service(Service),
    Ingress(Ingress),
}

impl KubeObject {
    pub fn kind(&self) -> &'static str {
        match self {
            KubeObject::Deployment(_) => Deployment::KIND,
            KubeObject::Service(_) => Service::KIND,
            KubeObject::Ingress(_) => Ingress::KIND,
        }
    }

    pub fn name(&self) -> &String {
        match self {
            KubeObject::Deployment(deployment) => deployment.name(),
            KubeObject::Service(service) => service.name(),
            KubeObject::Ingress(ingress) => ingress.name(),
        }
    }
}

/// Always inlined into the enclosing document,
/// so `apiVersion` and `kind` sit next to `metadata` and `spec`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    pub api_version: String,
    pub kind: String,
}

impl TypeMeta {
    pub fn of<T: Object>() -> Self {
        TypeMeta {
            api_version: T::API_VERSION.to_string(),
            kind: T::KIND.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ObjectMeta {
    /// Name must be unique within a namespace.
    /// Left empty on pod templates, where it is omitted.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Map of string keys and values that can be used
    /// to organize and categorize objects.
    #[serde(skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    /// Unstructured key value map stored with a resource
    /// that may be set by external tools.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    pub fn new() -> Self {
        Labels(BTreeMap::new())
    }

    /// The `app: <name>` label tying a deployment, its pods and its service together.
    pub fn app(name: &str) -> Self {
        let mut labels = Labels::new();
        labels.insert("app", name);
        labels
    }

    pub fn insert(&mut self, key: &str, value: &str) -> Option<String> {
        self.0.insert(key.to_string(), value.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    /// Label keys and values that must match.
    pub match_labels: Labels,
}
