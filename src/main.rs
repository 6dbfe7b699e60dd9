// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quartermaster::config::Config;
use quartermaster::kubernetes::{
    create_cluster_handle, ensure_helm_chart_crd, ChartInstaller, DryRunInstaller,
    HelmChartInstaller,
};
use quartermaster::provisioner::CommonServicesProvisioner;
use quartermaster::types::{BrokerCredentials, ProvisionRequest};

/// Provision the cache, document store and message broker of a service
#[derive(Parser, Debug)]
#[command(name = "quartermaster", version, about)]
struct Cli {
    /// Name of the service being onboarded; prefixes the target namespace
    service: String,

    /// Print the HelmChart manifests instead of applying them. Still needs a
    /// loadable kubeconfig, but sends no requests to the cluster.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Skip checking that the cluster serves the HelmChart CRD
    #[arg(long, default_value_t = false)]
    skip_preflight: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace_suffix={}, registry={}, storage_class={}",
        config.namespace_suffix, config.policy.registry_root, config.policy.storage_class
    );

    let cluster = create_cluster_handle(&config)
        .await
        .context("Failed to connect to cluster")?;

    if !cli.dry_run && !cli.skip_preflight {
        ensure_helm_chart_crd(cluster.client()).await?;
    }

    let request = ProvisionRequest::new(
        cli.service,
        config.namespace_suffix.clone(),
        Some(cluster),
    );

    if cli.dry_run {
        provision(DryRunInstaller::stdout(), &config, &request).await
    } else {
        provision(HelmChartInstaller::new(), &config, &request).await
    }
}

async fn provision<I: ChartInstaller>(
    installer: I,
    config: &Config,
    request: &ProvisionRequest,
) -> Result<()> {
    let provisioner = CommonServicesProvisioner::new(config.policy.clone(), installer);
    let credentials = &provisioner.policy().broker_credentials;
    info!(
        "Broker user {}, generated password: {}",
        credentials.username(),
        matches!(credentials, BrokerCredentials::Generated { .. })
    );
    let plan = provisioner
        .provision(request)
        .await
        .with_context(|| format!("Failed to provision common services for {}", request.service_name))?;

    info!(
        "Common services for {} submitted to namespace {}",
        request.service_name, plan.namespace
    );
    Ok(())
}
