// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Installer CRD availability check

use crate::constants::helm_controller::{GROUP, KIND, VERSION};
use crate::error::{ProvisionerError, Result};
use kube::{discovery::Discovery, Client};
use tracing::{info, instrument};

/// Fail unless the HelmChart CRD is served by the cluster.
/// Checked once; a cluster without the Helm controller cannot install anything.
#[instrument(skip(client))]
pub async fn ensure_helm_chart_crd(client: &Client) -> Result<()> {
    if helm_chart_crd_exists(client).await? {
        info!("HelmChart CRD ({}/{}) is available", GROUP, VERSION);
        Ok(())
    } else {
        Err(ProvisionerError::CrdNotAvailable(format!(
            "{} ({}/{}) is not served by the cluster; is the Helm controller installed?",
            KIND, GROUP, VERSION
        )))
    }
}

async fn helm_chart_crd_exists(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[GROUP])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() == GROUP {
            for (ar, _) in group.recommended_resources() {
                if ar.kind == KIND && ar.version == VERSION {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}
