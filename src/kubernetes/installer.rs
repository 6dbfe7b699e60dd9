// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Chart installers: hand deployment specs over to the cluster's Helm controller.

use crate::constants::OPERATOR_NAME;
use crate::error::{ProvisionerError, Result};
use crate::kubernetes::namespaces::apply_namespace;
use crate::types::{ClusterHandle, DeploymentSpec, HelmChart};
use kube::{
    api::{Patch, PatchParams},
    Api,
};
use std::future::Future;
use std::io::Write;
use std::sync::Mutex;
use tracing::{info, instrument};

/// Submits one deployment spec to a cluster without waiting for the release to come up
pub trait ChartInstaller {
    fn submit(
        &self,
        cluster: &ClusterHandle,
        spec: &DeploymentSpec,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Installs charts by server-side applying a HelmChart resource per release.
/// The Helm controller turns each resource into an install-or-upgrade.
#[derive(Debug, Clone, Default)]
pub struct HelmChartInstaller;

impl HelmChartInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl ChartInstaller for HelmChartInstaller {
    #[instrument(
        skip(self, cluster, spec),
        fields(cluster = %cluster.name(), release = %spec.release_name, namespace = %spec.target_namespace)
    )]
    async fn submit(&self, cluster: &ClusterHandle, spec: &DeploymentSpec) -> Result<()> {
        let chart = HelmChart::from_deployment(spec)?;

        apply_namespace(cluster.client(), &spec.target_namespace).await?;

        let charts: Api<HelmChart> =
            Api::namespaced(cluster.client().clone(), &spec.target_namespace);
        let pp = PatchParams::apply(OPERATOR_NAME).force();
        charts
            .patch(&spec.release_name, &pp, &Patch::Apply(&chart))
            .await?;

        info!(
            "Submitted chart {} {} as release {}/{}",
            spec.chart_name, spec.chart_version, spec.target_namespace, spec.release_name
        );

        Ok(())
    }
}

/// Renders the HelmChart manifests as a YAML stream instead of applying them
pub struct DryRunInstaller<W> {
    out: Mutex<W>,
}

impl DryRunInstaller<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> DryRunInstaller<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> ChartInstaller for DryRunInstaller<W> {
    async fn submit(&self, _cluster: &ClusterHandle, spec: &DeploymentSpec) -> Result<()> {
        let chart = HelmChart::from_deployment(spec)?;
        let manifest = serde_yaml::to_string(&chart)
            .map_err(|e| ProvisionerError::Serialization(e.to_string()))?;

        let mut out = self
            .out
            .lock()
            .map_err(|_| ProvisionerError::Submission("dry-run output lock poisoned".to_string()))?;
        write!(out, "---\n{}", manifest)
            .and_then(|_| out.flush())
            .map_err(|e| ProvisionerError::Submission(format!("Failed to write manifest: {}", e)))?;

        Ok(())
    }
}
