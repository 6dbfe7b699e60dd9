// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace derivation shared by all three backing services

use crate::error::{ProvisionerError, Result};

/// Longest name a Kubernetes namespace may carry (DNS-1123 label)
const MAX_NAMESPACE_LEN: usize = 63;

/// Derive the namespace all backing services of a service land in.
/// Plain concatenation, no separator.
pub fn derive_namespace(service_name: &str, namespace_suffix: &str) -> String {
    format!("{}{}", service_name, namespace_suffix)
}

/// Check that a derived namespace is a valid DNS-1123 label
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() || namespace.len() > MAX_NAMESPACE_LEN {
        return Err(ProvisionerError::InvalidRequest(format!(
            "namespace '{}' must be between 1 and {} characters",
            namespace, MAX_NAMESPACE_LEN
        )));
    }

    let valid_chars = namespace
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    let starts_alnum = namespace.starts_with(|c: char| c.is_ascii_alphanumeric());
    let ends_alnum = namespace.ends_with(|c: char| c.is_ascii_alphanumeric());

    if !(valid_chars && starts_alnum && ends_alnum) {
        return Err(ProvisionerError::InvalidRequest(format!(
            "namespace '{}' is not a valid DNS-1123 label",
            namespace
        )));
    }

    Ok(())
}
