// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment spec construction for the cache, document store and broker

use crate::constants::charts;
use crate::types::{BrokerCredentials, DeploymentSpec, GeneratedSecret, ProvisionPolicy};
use serde_json::{json, Value};

/// Source URI of a chart: the registry root followed by the chart name.
/// The installer needs this spelled out rather than resolving it from the root.
pub fn chart_source(registry_root: &str, chart_name: &str) -> String {
    format!("{}/{}", registry_root.trim_end_matches('/'), chart_name)
}

fn deployment_spec(
    policy: &ProvisionPolicy,
    namespace: &str,
    chart_name: &str,
    chart_version: &str,
    value_overrides: Value,
) -> DeploymentSpec {
    DeploymentSpec {
        chart_name: chart_name.to_string(),
        chart_version: chart_version.to_string(),
        release_name: chart_name.to_string(),
        target_namespace: namespace.to_string(),
        source_repository_uri: chart_source(&policy.registry_root, chart_name),
        block_until_ready: false,
        value_overrides,
    }
}

/// Single-instance Redis without auth, persisting on the primary only
pub fn cache_spec(policy: &ProvisionPolicy, namespace: &str) -> DeploymentSpec {
    deployment_spec(
        policy,
        namespace,
        charts::CACHE,
        &policy.chart_versions.cache,
        json!({
            "auth": {
                "enabled": false
            },
            "replica": {
                "replicaCount": 0
            },
            "master": {
                "persistence": {
                    "storageClass": policy.storage_class
                }
            }
        }),
    )
}

/// MongoDB with persistence on the policy storage class, chart defaults otherwise
pub fn document_store_spec(policy: &ProvisionPolicy, namespace: &str) -> DeploymentSpec {
    deployment_spec(
        policy,
        namespace,
        charts::DOCUMENT_STORE,
        &policy.chart_versions.document_store,
        json!({
            "persistence": {
                "storageClass": policy.storage_class
            }
        }),
    )
}

/// RabbitMQ with persistence and authentication enabled
pub fn broker_spec(
    policy: &ProvisionPolicy,
    namespace: &str,
    secret: &GeneratedSecret,
) -> DeploymentSpec {
    let (username, password) = match &policy.broker_credentials {
        BrokerCredentials::Fixed { username, password } => (username.as_str(), password.as_str()),
        BrokerCredentials::Generated { username } => (username.as_str(), secret.expose()),
    };

    deployment_spec(
        policy,
        namespace,
        charts::BROKER,
        &policy.chart_versions.broker,
        json!({
            "persistence": {
                "enabled": true,
                "storageClass": policy.storage_class
            },
            "auth": {
                "username": username,
                "password": password
            }
        }),
    )
}
