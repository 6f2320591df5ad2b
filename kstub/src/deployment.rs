use anyhow::{Context, Result};
use clap::Args;
use resources::{
    builder::{self, DeploymentParams},
    config::KstubConfig,
    manifest,
};

use crate::utils::emit;

#[derive(Args)]
pub struct Arg {
    /// The name of the deployment
    #[clap(short, long)]
    pub name: Option<String>,
    /// The number of desired pod replicas
    #[clap(short, long)]
    pub replicas: Option<u32>,
    /// The main container port
    #[clap(short, long)]
    pub port: Option<u16>,
}

impl Arg {
    pub fn params(&self, config: &KstubConfig) -> DeploymentParams {
        DeploymentParams {
            name: self.name.to_owned().unwrap_or_else(|| config.name.to_owned()),
            replicas: self.replicas.unwrap_or(config.replicas),
            port: self.port.unwrap_or(config.port),
        }
    }

    pub fn handle(&self, config: &KstubConfig) -> Result<()> {
        let params = self.params(config);
        params
            .validate()
            .with_context(|| "Invalid deployment parameters".to_string())?;
        let deployment = builder::deployment(&params);
        emit(&manifest::render(&deployment)?)
    }
}
