use anyhow::{Context, Result};
use clap::Args;
use resources::{
    builder::{self, IngressParams},
    config::KstubConfig,
    manifest,
};

use crate::utils::emit;

#[derive(Args)]
pub struct Arg {
    /// The name of the ingress
    #[clap(short, long)]
    pub name: Option<String>,
    /// The port of the backend service
    #[clap(short, long)]
    pub port: Option<u16>,
    /// The host to route
    #[clap(long)]
    pub host: Option<String>,
    /// The path to route, starting with '/'
    #[clap(long)]
    pub path: Option<String>,
}

impl Arg {
    pub fn params(&self, config: &KstubConfig) -> IngressParams {
        IngressParams {
            name: self.name.to_owned().unwrap_or_else(|| config.name.to_owned()),
            port: self.port.unwrap_or(config.port),
            host: self.host.to_owned().unwrap_or_else(|| config.host.to_owned()),
            path: self.path.to_owned().unwrap_or_else(|| config.path.to_owned()),
        }
    }

    pub fn handle(&self, config: &KstubConfig) -> Result<()> {
        let params = self.params(config);
        params
            .validate()
            .with_context(|| "Invalid ingress parameters".to_string())?;
        let ingress = builder::ingress(&params);
        emit(&manifest::render(&ingress)?)
    }
}
