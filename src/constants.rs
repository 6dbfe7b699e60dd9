// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name used for server-side apply
pub const OPERATOR_NAME: &str = "quartermaster";

/// Kubernetes label keys set on everything Quartermaster applies
pub mod labels {
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
    /// Release name of the backing service a HelmChart installs
    pub const RELEASE: &str = "quartermaster.geeko.me/release";
}

/// Chart and release names of the three backing services
pub mod charts {
    pub const CACHE: &str = "redis";
    pub const DOCUMENT_STORE: &str = "mongodb";
    pub const BROKER: &str = "rabbitmq";
}

/// Policy defaults, overridable through the environment
pub mod defaults {
    pub const CHART_REGISTRY: &str = "oci://registry-1.docker.io/bitnamicharts";
    pub const STORAGE_CLASS: &str = "gp2";
    pub const CACHE_CHART_VERSION: &str = "21.2.3";
    pub const DOCUMENT_STORE_CHART_VERSION: &str = "16.5.21";
    pub const BROKER_CHART_VERSION: &str = "16.0.7";
    pub const BROKER_USERNAME: &str = "beckn";
    pub const BROKER_PASSWORD: &str = "beckn1234";
    pub const SECRET_LENGTH: usize = 12;
    /// Upper bound on the generated secret length
    pub const MAX_SECRET_LENGTH: usize = 1024;
}

/// The Helm controller CRD that HelmChart submissions rely on
pub mod helm_controller {
    pub const GROUP: &str = "helm.cattle.io";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "HelmChart";
}
