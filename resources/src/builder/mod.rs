//! Assemble manifests from a handful of scalar parameters.
//!
//! Every builder is a pure function of its params struct. Params are checked
//! with `validate` before building; the builders themselves never fail.

use anyhow::{ensure, Result};

use crate::objects::KubeObject;

mod deployment;
mod ingress;
mod service;

pub use deployment::{deployment, DeploymentParams};
pub use ingress::{ingress, IngressParams};
pub use service::{service, ServiceParams};

/// Longest label value the API server accepts.
const MAX_NAME_LEN: usize = 63;

/// Parameters for all manifests of one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppParams {
    pub deployment: DeploymentParams,
    pub service: ServiceParams,
    pub ingress: IngressParams,
}

impl AppParams {
    pub fn validate(&self) -> Result<()> {
        self.deployment.validate()?;
        self.service.validate()?;
        self.ingress.validate()
    }
}

/// Deployment, Service and Ingress for one application, in that order.
pub fn app(params: &AppParams) -> Vec<KubeObject> {
    vec![
        KubeObject::Deployment(deployment(&params.deployment)),
        KubeObject::Service(service(&params.service)),
        KubeObject::Ingress(ingress(&params.ingress)),
    ]
}

/// The name ends up in a label value and as a prefix of every object name,
/// so it must be a DNS-1123 label.
pub fn validate_name(name: &str) -> Result<()> {
    ensure!(!name.is_empty(), "Name must not be empty");
    ensure!(
        name.len() <= MAX_NAME_LEN,
        "Name {} is longer than {} characters",
        name,
        MAX_NAME_LEN
    );
    let valid_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
    ensure!(
        name.chars().all(valid_char),
        "Name {} may only contain lowercase alphanumeric characters or '-'",
        name
    );
    ensure!(
        !name.starts_with('-') && !name.ends_with('-'),
        "Name {} must start and end with an alphanumeric character",
        name
    );
    // YAML 1.1 reads a bare `y` or `n` as a boolean.
    ensure!(
        !matches!(name, "y" | "n"),
        "Name {} would be read back as a boolean",
        name
    );
    Ok(())
}

pub fn validate_port(port: u16) -> Result<()> {
    ensure!(port != 0, "Port must be between 1 and 65535");
    Ok(())
}
