use serde::Serialize;

use super::{
    pod::{PodSpec, PodTemplateSpec},
    LabelSelector, Labels, Object, ObjectMeta, TypeMeta,
};

/// Deployment enables declarative updates for Pods and ReplicaSets.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Deployment {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    pub metadata: ObjectMeta,
    /// Specification of the desired behavior of the Deployment.
    pub spec: DeploymentSpec,
}

impl Object for Deployment {
    const API_VERSION: &'static str = "apps/v1";
    const KIND: &'static str = "Deployment";
    const NAME_SUFFIX: &'static str = "deployment";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DeploymentSpec {
    /// Number of desired pods.
    pub replicas: u32,
    /// Label selector for pods.
    /// It must match the pod template's labels.
    pub selector: LabelSelector,
    /// Template describes the pods that will be created.
    pub template: PodTemplateSpec,
}

impl DeploymentSpec {
    /// Selector and template labels are both taken from `labels`,
    /// so the deployment always selects its own pods.
    pub fn new(replicas: u32, labels: Labels, spec: PodSpec) -> Self {
        DeploymentSpec {
            replicas,
            selector: LabelSelector {
                match_labels: labels.clone(),
            },
            template: PodTemplateSpec {
                metadata: ObjectMeta {
                    labels,
                    ..ObjectMeta::default()
                },
                spec,
            },
        }
    }
}
