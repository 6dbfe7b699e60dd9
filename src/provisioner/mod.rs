// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Common services provisioning: decides what to deploy, where and with which values.

pub mod charts;
pub mod namespace;
pub mod secret;

pub use charts::{broker_spec, cache_spec, chart_source, document_store_spec};
pub use namespace::{derive_namespace, validate_namespace};
pub use secret::generate_secret;

use crate::error::{ProvisionerError, Result};
use crate::kubernetes::ChartInstaller;
use crate::types::{ClusterHandle, ProvisionPlan, ProvisionPolicy, ProvisionRequest};
use futures::future::try_join_all;
use tracing::{debug, info, instrument};

/// Provisions the cache, document store and broker of one service.
///
/// Submission is fire-and-forget: `provision` returns as soon as the installer
/// accepted all three specs and never observes readiness. Idempotence comes
/// from the installer's update-or-install semantics.
pub struct CommonServicesProvisioner<I> {
    policy: ProvisionPolicy,
    installer: I,
}

impl<I: ChartInstaller> CommonServicesProvisioner<I> {
    pub fn new(policy: ProvisionPolicy, installer: I) -> Self {
        Self { policy, installer }
    }

    pub fn policy(&self) -> &ProvisionPolicy {
        &self.policy
    }

    /// Validate the request and build its three deployment specs. Performs no I/O.
    pub fn plan(&self, request: &ProvisionRequest) -> Result<ProvisionPlan> {
        validate_request(request)?;

        let namespace = derive_namespace(&request.service_name, &request.namespace_suffix);
        validate_namespace(&namespace)?;

        let secret = generate_secret(self.policy.secret_length)?;
        debug!("Generated secret of {} characters", secret.len());

        Ok(ProvisionPlan {
            cache: cache_spec(&self.policy, &namespace),
            document_store: document_store_spec(&self.policy, &namespace),
            broker: broker_spec(&self.policy, &namespace, &secret),
            namespace,
            secret,
        })
    }

    /// Plan the request and submit all three specs to the installer.
    ///
    /// Invalid input fails before anything is submitted. A failing submission
    /// aborts the call; specs already accepted are not rolled back.
    #[instrument(skip(self, request), fields(service = %request.service_name))]
    pub async fn provision(&self, request: &ProvisionRequest) -> Result<ProvisionPlan> {
        let plan = self.plan(request)?;
        let cluster = cluster_of(request)?;

        info!(
            "Submitting {} backing services to namespace {} on cluster {}",
            plan.specs().len(),
            plan.namespace,
            cluster.name()
        );

        try_join_all(
            plan.specs()
                .into_iter()
                .map(|spec| self.installer.submit(cluster, spec)),
        )
        .await?;

        info!(
            "Submitted releases {} to namespace {}",
            plan.release_names().join(", "),
            plan.namespace
        );

        Ok(plan)
    }
}

fn validate_request(request: &ProvisionRequest) -> Result<()> {
    if request.service_name.trim().is_empty() {
        return Err(ProvisionerError::InvalidRequest(
            "service name must not be empty".to_string(),
        ));
    }
    if request.namespace_suffix.is_empty() {
        return Err(ProvisionerError::InvalidRequest(
            "namespace suffix must not be empty".to_string(),
        ));
    }
    cluster_of(request)?;
    Ok(())
}

fn cluster_of(request: &ProvisionRequest) -> Result<&ClusterHandle> {
    request.cluster.as_ref().ok_or_else(|| {
        ProvisionerError::InvalidRequest("no cluster handle supplied".to_string())
    })
}
