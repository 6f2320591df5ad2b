use anyhow::{Context, Result};
use clap::Args;
use resources::{
    builder::{self, ServiceParams},
    config::KstubConfig,
    manifest,
    objects::service::ServiceType,
};

use crate::{utils::emit, ServiceTypeArg};

#[derive(Args)]
pub struct Arg {
    /// The name of the service
    #[clap(short, long)]
    pub name: Option<String>,
    /// The type of the service
    #[clap(short = 't', long = "type", arg_enum, ignore_case = true, value_name = "TYPE")]
    pub service_type: Option<ServiceTypeArg>,
    /// The main container port
    #[clap(short, long)]
    pub port: Option<u16>,
}

impl Arg {
    pub fn params(&self, config: &KstubConfig) -> ServiceParams {
        ServiceParams {
            name: self.name.to_owned().unwrap_or_else(|| config.name.to_owned()),
            service_type: self
                .service_type
                .map(ServiceType::from)
                .unwrap_or(config.service_type),
            port: self.port.unwrap_or(config.port),
        }
    }

    pub fn handle(&self, config: &KstubConfig) -> Result<()> {
        let params = self.params(config);
        params
            .validate()
            .with_context(|| "Invalid service parameters".to_string())?;
        let service = builder::service(&params);
        emit(&manifest::render(&service)?)
    }
}
