// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation

use crate::config::Config;
use crate::error::{ProvisionerError, Result};
use crate::types::ClusterHandle;
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, info, instrument};

/// Create a handle to the target cluster, from the configured kubeconfig
/// context or, when none is set, from the inferred environment.
#[instrument(skip(config), fields(context = ?config.kube_context))]
pub async fn create_cluster_handle(config: &Config) -> Result<ClusterHandle> {
    let kube_config = match &config.kube_context {
        Some(context) => {
            debug!("Loading kubeconfig context {}", context);
            let options = KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            };
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                ProvisionerError::KubeconfigError(format!(
                    "Failed to load context {}: {}",
                    context, e
                ))
            })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| ProvisionerError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    let name = config
        .kube_context
        .clone()
        .unwrap_or_else(|| kube_config.cluster_url.to_string());

    let client = Client::try_from(kube_config)
        .map_err(|e| ProvisionerError::KubeconfigError(format!("Failed to create client: {}", e)))?;

    info!("Using cluster {}", name);
    Ok(ClusterHandle::new(name, client))
}
