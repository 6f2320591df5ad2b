use anyhow::Result;

use super::{validate_name, validate_port};
use crate::objects::{
    object_name,
    service::{Protocol, ServicePort, ServiceSpec, ServiceType},
    Labels, ObjectMeta, Service, TypeMeta,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceParams {
    pub name: String,
    pub service_type: ServiceType,
    pub port: u16,
}

impl ServiceParams {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_port(self.port)
    }
}

/// Exposes `port` over TCP on the pods labelled `app: <name>`.
pub fn service(params: &ServiceParams) -> Service {
    let name = &params.name;
    tracing::debug!(
        name = %name,
        service_type = %params.service_type,
        port = params.port,
        "Building service"
    );

    Service {
        type_meta: TypeMeta::of::<Service>(),
        metadata: ObjectMeta {
            name: object_name::<Service>(name),
            ..ObjectMeta::default()
        },
        spec: ServiceSpec {
            service_type: params.service_type,
            selector: Labels::app(name),
            ports: vec![ServicePort {
                protocol: Protocol::Tcp,
                port: params.port,
                target_port: params.port,
            }],
        },
    }
}
