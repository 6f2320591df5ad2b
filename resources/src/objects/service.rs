use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{Labels, Object, ObjectMeta, TypeMeta};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Service {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

impl Object for Service {
    const API_VERSION: &'static str = "v1";
    const KIND: &'static str = "Service";
    const NAME_SUFFIX: &'static str = "service";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Determines how the Service is exposed.
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    /// Route service traffic to pods with label keys and values matching this selector.
    pub selector: Labels,
    /// The list of ports that are exposed by this service.
    pub ports: Vec<ServicePort>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    /// The IP protocol for this port.
    pub protocol: Protocol,
    /// The port that will be exposed by this service.
    pub port: u16,
    /// Number of the port to access on the pods targeted by the service.
    pub target_port: u16,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ServiceType {
    /// Allocates a cluster-internal IP address for load-balancing to endpoints.
    #[default]
    ClusterIP,
    /// Builds on ClusterIP and allocates a port on every node.
    NodePort,
    /// Builds on NodePort and creates an external load-balancer.
    LoadBalancer,
    /// Aliases this service to the specified external name.
    ExternalName,
}

/// Config files accept any casing, the same as the command line.
impl<'de> Deserialize<'de> for ServiceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ServiceType::from_str(&value)
            .map_err(|_| de::Error::custom(format!("unknown service type {}", value)))
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}
