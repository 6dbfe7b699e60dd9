// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use crate::types::{BrokerCredentials, ChartVersions, ProvisionPolicy};
use anyhow::{bail, Context, Result};
use std::env;
use url::Url;

/// Provisioner configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Appended to the service name to form the target namespace
    pub namespace_suffix: String,
    /// Kubeconfig context to use; the inferred config when unset
    pub kube_context: Option<String>,
    pub policy: ProvisionPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let namespace_suffix = lookup("NAMESPACE_SUFFIX")
            .filter(|s| !s.is_empty())
            .context("NAMESPACE_SUFFIX environment variable not set")?;
        let kube_context = lookup("KUBE_CONTEXT").filter(|s| !s.is_empty());

        let registry_root = var_or("CHART_REGISTRY", defaults::CHART_REGISTRY);
        Url::parse(&registry_root)
            .with_context(|| format!("CHART_REGISTRY '{}' is not a valid URL", registry_root))?;

        // In generated mode the broker password is the invocation's fresh secret.
        // Nothing stores it: every run rotates it in the HelmChart values and the
        // chart's own Secret is the only place it lives.
        let username = var_or("RABBITMQ_USERNAME", defaults::BROKER_USERNAME);
        let generated_password: bool = var_or("RABBITMQ_GENERATED_PASSWORD", "false")
            .parse()
            .context("RABBITMQ_GENERATED_PASSWORD must be true or false")?;
        let broker_credentials = if generated_password {
            if lookup("RABBITMQ_PASSWORD").is_some() {
                bail!("RABBITMQ_PASSWORD cannot be set together with RABBITMQ_GENERATED_PASSWORD=true");
            }
            BrokerCredentials::Generated { username }
        } else {
            BrokerCredentials::Fixed {
                username,
                password: var_or("RABBITMQ_PASSWORD", defaults::BROKER_PASSWORD),
            }
        };

        let secret_length: usize = match lookup("SECRET_LENGTH") {
            Some(v) => v
                .parse()
                .with_context(|| format!("SECRET_LENGTH '{}' is not a number", v))?,
            None => defaults::SECRET_LENGTH,
        };
        if secret_length == 0 || secret_length > defaults::MAX_SECRET_LENGTH {
            bail!(
                "SECRET_LENGTH must be between 1 and {}, got {}",
                defaults::MAX_SECRET_LENGTH,
                secret_length
            );
        }

        Ok(Config {
            namespace_suffix,
            kube_context,
            policy: ProvisionPolicy {
                registry_root,
                storage_class: var_or("STORAGE_CLASS", defaults::STORAGE_CLASS),
                chart_versions: ChartVersions {
                    cache: var_or("REDIS_CHART_VERSION", defaults::CACHE_CHART_VERSION),
                    document_store: var_or(
                        "MONGODB_CHART_VERSION",
                        defaults::DOCUMENT_STORE_CHART_VERSION,
                    ),
                    broker: var_or("RABBITMQ_CHART_VERSION", defaults::BROKER_CHART_VERSION),
                },
                broker_credentials,
                secret_length,
            },
        })
    }
}
