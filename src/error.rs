// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionerError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid provision request: {0}")]
    InvalidRequest(String),

    #[error("Secure random source failed: {0}")]
    Randomness(String),

    #[error("Chart submission failed: {0}")]
    Submission(String),

    #[error("Failed to render chart values: {0}")]
    Serialization(String),

    #[error("Installer CRD not available: {0}")]
    CrdNotAvailable(String),
}

pub type Result<T> = std::result::Result<T, ProvisionerError>;
