// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{labels, OPERATOR_NAME};
use crate::error::{ProvisionerError, Result};
use crate::types::deployment::DeploymentSpec;
use kube::api::ObjectMeta;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HelmChart resource handled by the in-cluster Helm controller.
/// The controller installs or upgrades a release named after the resource.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "helm.cattle.io", version = "v1", kind = "HelmChart")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct HelmChartSpec {
    pub chart: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_namespace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_content: Option<String>,
}

impl HelmChart {
    /// Build the HelmChart resource that installs the given deployment spec
    pub fn from_deployment(spec: &DeploymentSpec) -> Result<Self> {
        if spec.block_until_ready {
            return Err(ProvisionerError::Submission(format!(
                "release {} asks to block until ready, which HelmChart submission cannot honour",
                spec.release_name
            )));
        }

        let values_content = serde_yaml::to_string(&spec.value_overrides)
            .map_err(|e| ProvisionerError::Serialization(e.to_string()))?;

        // OCI references carry the chart in the URI itself
        let (chart, repo) = if spec.source_repository_uri.starts_with("oci://") {
            (spec.source_repository_uri.clone(), None)
        } else {
            (spec.chart_name.clone(), Some(spec.source_repository_uri.clone()))
        };

        Ok(HelmChart {
            metadata: ObjectMeta {
                name: Some(spec.release_name.clone()),
                namespace: Some(spec.target_namespace.clone()),
                labels: Some(BTreeMap::from([
                    (labels::MANAGED_BY.to_string(), OPERATOR_NAME.to_string()),
                    (labels::RELEASE.to_string(), spec.release_name.clone()),
                ])),
                ..Default::default()
            },
            spec: HelmChartSpec {
                chart,
                repo,
                version: Some(spec.chart_version.clone()),
                target_namespace: Some(spec.target_namespace.clone()),
                create_namespace: Some(false),
                values_content: Some(values_content),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::ResourceExt;
    use serde_json::json;

    fn make_spec(source: &str) -> DeploymentSpec {
        DeploymentSpec {
            chart_name: "redis".to_string(),
            chart_version: "21.2.3".to_string(),
            release_name: "redis".to_string(),
            target_namespace: "orders-prod".to_string(),
            source_repository_uri: source.to_string(),
            block_until_ready: false,
            value_overrides: json!({
                "auth": { "enabled": false },
                "replica": { "replicaCount": 0 }
            }),
        }
    }

    #[test]
    fn test_from_deployment_oci_source_goes_into_chart() {
        let chart =
            HelmChart::from_deployment(&make_spec("oci://registry-1.docker.io/bitnamicharts/redis"))
                .unwrap();

        assert_eq!(chart.spec.chart, "oci://registry-1.docker.io/bitnamicharts/redis");
        assert_eq!(chart.spec.repo, None);
    }

    #[test]
    fn test_from_deployment_http_source_goes_into_repo() {
        let chart =
            HelmChart::from_deployment(&make_spec("https://charts.example.com/redis")).unwrap();

        assert_eq!(chart.spec.chart, "redis");
        assert_eq!(
            chart.spec.repo.as_deref(),
            Some("https://charts.example.com/redis")
        );
    }

    #[test]
    fn test_from_deployment_sets_release_namespace_and_version() {
        let chart =
            HelmChart::from_deployment(&make_spec("oci://registry.example/charts/redis")).unwrap();

        assert_eq!(chart.name_any(), "redis");
        assert_eq!(chart.namespace().as_deref(), Some("orders-prod"));
        assert_eq!(chart.spec.target_namespace.as_deref(), Some("orders-prod"));
        assert_eq!(chart.spec.version.as_deref(), Some("21.2.3"));
        assert_eq!(chart.labels().get(labels::MANAGED_BY).unwrap(), OPERATOR_NAME);
        assert_eq!(chart.labels().get(labels::RELEASE).unwrap(), "redis");
    }

    #[test]
    fn test_from_deployment_renders_values_as_yaml() {
        let chart =
            HelmChart::from_deployment(&make_spec("oci://registry.example/charts/redis")).unwrap();

        let values: serde_json::Value =
            serde_yaml::from_str(chart.spec.values_content.as_deref().unwrap()).unwrap();
        assert_eq!(values["auth"]["enabled"], false);
        assert_eq!(values["replica"]["replicaCount"], 0);
    }

    #[test]
    fn test_from_deployment_rejects_blocking_spec() {
        let mut spec = make_spec("oci://registry.example/charts/redis");
        spec.block_until_ready = true;

        let err = HelmChart::from_deployment(&spec).unwrap_err();
        assert!(matches!(err, ProvisionerError::Submission(_)));
    }

    #[test]
    fn test_serialized_manifest_has_kind_and_camel_case_fields() {
        let chart =
            HelmChart::from_deployment(&make_spec("oci://registry.example/charts/redis")).unwrap();

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["apiVersion"], "helm.cattle.io/v1");
        assert_eq!(json["kind"], "HelmChart");
        assert_eq!(json["spec"]["targetNamespace"], "orders-prod");
        assert!(json["spec"].get("repo").is_none());
    }
}
