use serde::Serialize;

use super::ObjectMeta;

/// Describes the data a pod should have when created from a template.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PodTemplateSpec {
    /// Standard object's metadata.
    /// Labels here must be matched by the owning controller's selector.
    pub metadata: ObjectMeta,
    /// Specification of the desired behavior of the pod.
    pub spec: PodSpec,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PodSpec {
    /// List of containers belonging to the pod.
    /// There must be at least one container in a Pod.
    pub containers: Vec<Container>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Container {
    /// Name of the container specified as a DNS_LABEL.
    /// Each container in a pod must have a unique name (DNS_LABEL).
    pub name: String,
    /// Docker image name.
    pub image: String,
    /// List of ports to expose from the container.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPort>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    /// Number of port to expose on the pod's IP address.
    /// This must be a valid port number, 0 < x < 65536.
    pub container_port: u16,
    /// Number of port to expose on the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<u16>,
    /// An IANA_SVC_NAME, unique within the pod.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}
