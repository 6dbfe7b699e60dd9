// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Data model: requests, deployment specs, policy and the HelmChart resource.

pub mod deployment;
pub mod helmchart;
pub mod policy;
pub mod request;

pub use deployment::{DeploymentSpec, GeneratedSecret, ProvisionPlan};
pub use helmchart::{HelmChart, HelmChartSpec};
pub use policy::{BrokerCredentials, ChartVersions, ProvisionPolicy};
pub use request::{ClusterHandle, ProvisionRequest};
