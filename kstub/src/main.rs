use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgEnum, CommandFactory, Parser, Subcommand};
use resources::{config::KstubConfig, objects::service::ServiceType};

mod app;
mod completion;
mod deployment;
mod ingress;
mod service;
mod utils;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// YAML config file providing default parameters
    #[clap(long, global = true, parse(from_os_str), value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output level of logs (trace, debug, info, warn, error)
    #[clap(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deployment manifest
    Deployment(deployment::Arg),
    /// Generate a service manifest
    Service(service::Arg),
    /// Generate an ingress manifest
    Ingress(ingress::Arg),
    /// Generate deployment, service and ingress manifests for one application
    App(app::Arg),
    /// Print the version number of kstub
    Version,
    /// Generate shell completion scripts
    Completion(completion::Arg),
}

#[derive(Copy, Clone, PartialEq, Eq, ArgEnum)]
pub enum ServiceTypeArg {
    #[clap(name = "ClusterIP")]
    ClusterIP,
    #[clap(name = "NodePort")]
    NodePort,
    #[clap(name = "LoadBalancer")]
    LoadBalancer,
    #[clap(name = "ExternalName")]
    ExternalName,
}

impl From<ServiceTypeArg> for ServiceType {
    fn from(arg: ServiceTypeArg) -> Self {
        match arg {
            ServiceTypeArg::ClusterIP => ServiceType::ClusterIP,
            ServiceTypeArg::NodePort => ServiceType::NodePort,
            ServiceTypeArg::LoadBalancer => ServiceType::LoadBalancer,
            ServiceTypeArg::ExternalName => ServiceType::ExternalName,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = KstubConfig::load(cli.config.as_deref())?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    utils::init_tracing(log_level)?;
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    tracing::debug!(?config, "Resolved defaults");

    match &cli.command {
        Commands::Deployment(arg) => arg.handle(&config)?,
        Commands::Service(arg) => arg.handle(&config)?,
        Commands::Ingress(arg) => arg.handle(&config)?,
        Commands::App(arg) => arg.handle(&config)?,
        Commands::Version => println!("kstub {}", env!("CARGO_PKG_VERSION")),
        Commands::Completion(arg) => arg.handle(&mut Cli::command())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn deployment_defaults() {
        let cli = parse(&["kstub", "deployment"]);
        let Commands::Deployment(arg) = cli.command else {
            panic!("expected deployment command");
        };
        let params = arg.params(&KstubConfig::default());
        assert_eq!(params.name, "name");
        assert_eq!(params.replicas, 1);
        assert_eq!(params.port, 80);
    }

    #[test]
    fn deployment_flags() {
        let cli = parse(&["kstub", "deployment", "-n", "foo", "-r", "3", "-p", "8080"]);
        let Commands::Deployment(arg) = cli.command else {
            panic!("expected deployment command");
        };
        let params = arg.params(&KstubConfig::default());
        assert_eq!(params.name, "foo");
        assert_eq!(params.replicas, 3);
        assert_eq!(params.port, 8080);
    }

    #[test]
    fn flags_override_config() {
        let config = KstubConfig {
            name: "shop".to_string(),
            port: 3000,
            service_type: ServiceType::LoadBalancer,
            ..KstubConfig::default()
        };
        let cli = parse(&["kstub", "service", "--port", "8080"]);
        let Commands::Service(arg) = cli.command else {
            panic!("expected service command");
        };
        let params = arg.params(&config);
        assert_eq!(params.name, "shop");
        assert_eq!(params.port, 8080);
        assert_eq!(params.service_type, ServiceType::LoadBalancer);
    }

    #[test]
    fn service_type_flag() {
        let cli = parse(&["kstub", "service", "-t", "NodePort"]);
        let Commands::Service(arg) = cli.command else {
            panic!("expected service command");
        };
        let params = arg.params(&KstubConfig::default());
        assert_eq!(params.service_type, ServiceType::NodePort);
    }

    #[test]
    fn service_type_flag_ignores_case() {
        let cli = parse(&["kstub", "app", "--type", "nodeport"]);
        let Commands::App(arg) = cli.command else {
            panic!("expected app command");
        };
        let params = arg.params(&KstubConfig::default());
        assert_eq!(params.service.service_type, ServiceType::NodePort);
    }

    #[test]
    fn service_help_lists_types() {
        let err = Cli::try_parse_from(["kstub", "service", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let help = err.to_string();
        for value in ["ClusterIP", "NodePort", "LoadBalancer", "ExternalName"] {
            assert!(help.contains(value), "{} missing from help", value);
        }
    }

    #[test]
    fn yaml_boolean_name_is_rejected() {
        let cli = parse(&["kstub", "deployment", "-n", "y"]);
        let Commands::Deployment(arg) = cli.command else {
            panic!("expected deployment command");
        };
        assert!(arg.handle(&KstubConfig::default()).is_err());
    }

    #[test]
    fn unknown_service_type_is_rejected() {
        let result = Cli::try_parse_from(["kstub", "service", "--type", "Headless"]);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(Cli::try_parse_from(["kstub", "ingress", "-p", "70000"]).is_err());
        assert!(Cli::try_parse_from(["kstub", "deployment", "-r", "-1"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["kstub", "ingress", "--log-level", "debug", "--config", "k.yaml"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("k.yaml")));
    }

    #[test]
    fn ingress_host_and_path() {
        let cli = parse(&["kstub", "ingress", "--host", "a.example.com", "--path", "/a"]);
        let Commands::Ingress(arg) = cli.command else {
            panic!("expected ingress command");
        };
        let params = arg.params(&KstubConfig::default());
        assert_eq!(params.host, "a.example.com");
        assert_eq!(params.path, "/a");
        assert_eq!(params.port, 80);
    }

    #[test]
    fn version_flag() {
        let err = Cli::try_parse_from(["kstub", "--version"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
