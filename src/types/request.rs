// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::Client;

/// Reference to a running cluster. Quartermaster never mutates it.
#[derive(Clone)]
pub struct ClusterHandle {
    name: String,
    client: Client,
}

impl ClusterHandle {
    pub fn new(name: impl Into<String>, client: Client) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for ClusterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One onboarding invocation: which service, which namespace suffix, which cluster
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    pub service_name: String,
    pub namespace_suffix: String,
    pub cluster: Option<ClusterHandle>,
}

impl ProvisionRequest {
    pub fn new(
        service_name: impl Into<String>,
        namespace_suffix: impl Into<String>,
        cluster: Option<ClusterHandle>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            namespace_suffix: namespace_suffix.into(),
            cluster,
        }
    }
}
