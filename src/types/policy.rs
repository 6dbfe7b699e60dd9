// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;

/// Pinned chart versions, one per backing service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartVersions {
    pub cache: String,
    pub document_store: String,
    pub broker: String,
}

impl Default for ChartVersions {
    fn default() -> Self {
        Self {
            cache: defaults::CACHE_CHART_VERSION.to_string(),
            document_store: defaults::DOCUMENT_STORE_CHART_VERSION.to_string(),
            broker: defaults::BROKER_CHART_VERSION.to_string(),
        }
    }
}

/// Where the message broker's credentials come from
#[derive(Clone, PartialEq, Eq)]
pub enum BrokerCredentials {
    /// A fixed username/password pair baked into the deployment spec
    Fixed { username: String, password: String },
    /// The invocation's generated secret is used as password
    Generated { username: String },
}

impl BrokerCredentials {
    pub fn username(&self) -> &str {
        match self {
            BrokerCredentials::Fixed { username, .. } => username,
            BrokerCredentials::Generated { username } => username,
        }
    }
}

impl Default for BrokerCredentials {
    fn default() -> Self {
        BrokerCredentials::Fixed {
            username: defaults::BROKER_USERNAME.to_string(),
            password: defaults::BROKER_PASSWORD.to_string(),
        }
    }
}

impl std::fmt::Debug for BrokerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrokerCredentials::Fixed { username, .. } => f
                .debug_struct("Fixed")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            BrokerCredentials::Generated { username } => f
                .debug_struct("Generated")
                .field("username", username)
                .finish(),
        }
    }
}

/// Policy literals the provisioner applies to every invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionPolicy {
    /// Registry root every chart is pulled from, without the chart name
    pub registry_root: String,
    /// Storage class backing all persistent volumes
    pub storage_class: String,
    pub chart_versions: ChartVersions,
    pub broker_credentials: BrokerCredentials,
    /// Length in hex characters of the generated secret
    pub secret_length: usize,
}

impl Default for ProvisionPolicy {
    fn default() -> Self {
        Self {
            registry_root: defaults::CHART_REGISTRY.to_string(),
            storage_class: defaults::STORAGE_CLASS.to_string(),
            chart_versions: ChartVersions::default(),
            broker_credentials: BrokerCredentials::default(),
            secret_length: defaults::SECRET_LENGTH,
        }
    }
}
