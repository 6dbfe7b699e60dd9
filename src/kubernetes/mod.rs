// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, CRD discovery, namespaces and chart submission.

pub mod client;
pub mod crd;
pub mod installer;
pub mod namespaces;

pub use client::create_cluster_handle;
pub use crd::ensure_helm_chart_crd;
pub use installer::{ChartInstaller, DryRunInstaller, HelmChartInstaller};
pub use namespaces::apply_namespace;
