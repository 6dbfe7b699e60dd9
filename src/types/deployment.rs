// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use serde_json::Value;

/// Everything the chart installer needs to install one backing service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    pub chart_name: String,
    /// Exact chart version, never a range
    pub chart_version: String,
    pub release_name: String,
    pub target_namespace: String,
    pub source_repository_uri: String,
    pub block_until_ready: bool,
    /// Chart value overrides, always a JSON object
    pub value_overrides: Value,
}

/// Hex-encoded random value produced once per invocation
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedSecret(String);

impl GeneratedSecret {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeneratedSecret(<{} chars redacted>)", self.0.len())
    }
}

/// Result of planning one invocation: the namespace, its three specs and the secret
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    pub namespace: String,
    pub cache: DeploymentSpec,
    pub document_store: DeploymentSpec,
    pub broker: DeploymentSpec,
    pub secret: GeneratedSecret,
}

impl ProvisionPlan {
    /// The specs in submission order: cache, document store, broker
    pub fn specs(&self) -> [&DeploymentSpec; 3] {
        [&self.cache, &self.document_store, &self.broker]
    }

    /// Release names in submission order
    pub fn release_names(&self) -> Vec<&str> {
        self.specs()
            .into_iter()
            .map(|spec| spec.release_name.as_str())
            .collect()
    }
}
