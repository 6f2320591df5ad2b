use anyhow::{ensure, Result};

use super::{validate_name, validate_port};
use crate::objects::{
    deployment::DeploymentSpec,
    object_name,
    pod::{Container, ContainerPort, PodSpec},
    Deployment, Labels, ObjectMeta, TypeMeta,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParams {
    pub name: String,
    pub replicas: u32,
    pub port: u16,
}

impl DeploymentParams {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_port(self.port)?;
        ensure!(
            self.replicas <= i32::MAX as u32,
            "Replicas must not exceed {}",
            i32::MAX
        );
        Ok(())
    }
}

/// One container running `<name>:latest`, exposing `port` on the pod and the host.
pub fn deployment(params: &DeploymentParams) -> Deployment {
    let name = &params.name;
    tracing::debug!(
        name = %name,
        replicas = params.replicas,
        port = params.port,
        "Building deployment"
    );

    let labels = Labels::app(name);
    let container = Container {
        name: name.to_owned(),
        image: format!("{}:latest", name),
        ports: vec![ContainerPort {
            container_port: params.port,
            host_port: Some(params.port),
            name: format!("{}-port", name),
        }],
    };

    Deployment {
        type_meta: TypeMeta::of::<Deployment>(),
        metadata: ObjectMeta {
            name: object_name::<Deployment>(name),
            labels: labels.clone(),
            ..ObjectMeta::default()
        },
        spec: DeploymentSpec::new(
            params.replicas,
            labels,
            PodSpec {
                containers: vec![container],
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, replicas: u32, port: u16) -> DeploymentParams {
        DeploymentParams {
            name: name.to_string(),
            replicas,
            port,
        }
    }

    #[test]
    fn foo_deployment() {
        let deployment = deployment(&params("foo", 3, 8080));

        assert_eq!(deployment.type_meta.kind, "Deployment");
        assert_eq!(deployment.type_meta.api_version, "apps/v1");
        assert_eq!(deployment.metadata.name, "foo-deployment");
        assert_eq!(deployment.spec.replicas, 3);

        let containers = &deployment.spec.template.spec.containers;
        assert_eq!(containers.len(), 1);
        let container = &containers[0];
        assert_eq!(container.name, "foo");
        assert_eq!(container.image, "foo:latest");
        assert_eq!(
            container.ports,
            vec![ContainerPort {
                container_port: 8080,
                host_port: Some(8080),
                name: "foo-port".to_string(),
            }]
        );
    }

    #[test]
    fn selector_matches_template() {
        for (name, replicas, port) in [("foo", 0, 1), ("web-1", 1, 80), ("a", 10, 65535)] {
            let deployment = deployment(&params(name, replicas, port));
            let app = Labels::app(name);
            assert_eq!(
                deployment.spec.selector.match_labels,
                deployment.spec.template.metadata.labels
            );
            assert_eq!(deployment.spec.selector.match_labels, app);
            assert_eq!(deployment.spec.template.metadata.labels, app);
            assert_eq!(deployment.metadata.name, format!("{}-deployment", name));
        }
    }

    #[test]
    fn template_has_no_name_or_annotations() {
        let deployment = deployment(&params("foo", 1, 80));
        assert!(deployment.spec.template.metadata.name.is_empty());
        assert!(deployment.spec.template.metadata.annotations.is_empty());
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            deployment(&params("foo", 2, 80)),
            deployment(&params("foo", 2, 80))
        );
    }

    #[test]
    fn validation() {
        assert!(params("foo", 1, 80).validate().is_ok());
        assert!(params("foo", 0, 80).validate().is_ok());
        assert!(params("foo", 1, 0).validate().is_err());
        assert!(params("foo", u32::MAX, 80).validate().is_err());
        assert!(params("", 1, 80).validate().is_err());
        assert!(params("y", 1, 80).validate().is_err());
    }
}
