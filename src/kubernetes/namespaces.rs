// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::constants::{labels, OPERATOR_NAME};
use crate::error::{ProvisionerError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, Patch, PatchParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Apply a namespace with server-side apply. Creates it when missing and never
/// reads it first, so repeated calls converge on the same object.
#[instrument(skip(client))]
pub async fn apply_namespace(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let ns = Namespace {
        metadata: ObjectMeta {
            name: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([(
                labels::MANAGED_BY.to_string(),
                OPERATOR_NAME.to_string(),
            )])),
            ..Default::default()
        },
        ..Default::default()
    };

    let pp = PatchParams::apply(OPERATOR_NAME).force();
    namespaces
        .patch(namespace, &pp, &Patch::Apply(&ns))
        .await
        .map_err(|e| {
            ProvisionerError::Submission(format!("Failed to apply namespace {}: {}", namespace, e))
        })?;

    debug!("Namespace {} applied", namespace);
    Ok(())
}
