use anyhow::{Context, Result};
use clap::Args;
use resources::{
    builder::{self, AppParams},
    config::KstubConfig,
    manifest,
};

use crate::{deployment, ingress, service, utils::emit, ServiceTypeArg};

#[derive(Args)]
pub struct Arg {
    /// The name of the application
    #[clap(short, long)]
    name: Option<String>,
    /// The number of desired pod replicas
    #[clap(short, long)]
    replicas: Option<u32>,
    /// The main container port
    #[clap(short, long)]
    port: Option<u16>,
    /// The type of the service
    #[clap(short = 't', long = "type", arg_enum, ignore_case = true, value_name = "TYPE")]
    service_type: Option<ServiceTypeArg>,
    /// The host to route
    #[clap(long)]
    host: Option<String>,
    /// The path to route, starting with '/'
    #[clap(long)]
    path: Option<String>,
}

impl Arg {
    pub fn params(&self, config: &KstubConfig) -> AppParams {
        let deployment = deployment::Arg {
            name: self.name.to_owned(),
            replicas: self.replicas,
            port: self.port,
        };
        let service = service::Arg {
            name: self.name.to_owned(),
            service_type: self.service_type,
            port: self.port,
        };
        let ingress = ingress::Arg {
            name: self.name.to_owned(),
            port: self.port,
            host: self.host.to_owned(),
            path: self.path.to_owned(),
        };
        AppParams {
            deployment: deployment.params(config),
            service: service.params(config),
            ingress: ingress.params(config),
        }
    }

    pub fn handle(&self, config: &KstubConfig) -> Result<()> {
        let params = self.params(config);
        params
            .validate()
            .with_context(|| "Invalid application parameters".to_string())?;
        let objects = builder::app(&params);
        emit(&manifest::render_all(&objects)?)
    }
}
