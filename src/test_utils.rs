// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses and chart submissions.

use crate::error::{ProvisionerError, Result};
use crate::kubernetes::ChartInstaller;
use crate::types::{ClusterHandle, DeploymentSpec};
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request the mock received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request it serves.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for PATCH requests matching the exact path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    /// All requests served so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Prefix match for paths like /api/v1/namespaces/foo
        for ((m, p), resp) in responses.iter() {
            if m == method && path.starts_with(p) {
                return Some(resp.clone());
            }
        }

        None
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let bytes = req.into_body().collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });

            let (status, body) = response.unwrap_or_else(|| (404, not_found_json("path", "")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a mock HelmChart JSON response
pub fn helm_chart_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "helm.cattle.io/v1",
        "kind": "HelmChart",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {
            "chart": name
        }
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Installer that records submitted specs instead of talking to a cluster
#[derive(Clone, Default)]
pub struct RecordingInstaller {
    submitted: Arc<Mutex<Vec<DeploymentSpec>>>,
    fail_release: Option<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the submission of the given release
    pub fn failing_on(release: &str) -> Self {
        Self {
            fail_release: Some(release.to_string()),
            ..Default::default()
        }
    }

    pub fn submitted(&self) -> Vec<DeploymentSpec> {
        self.submitted.lock().unwrap().clone()
    }
}

impl ChartInstaller for RecordingInstaller {
    async fn submit(&self, _cluster: &ClusterHandle, spec: &DeploymentSpec) -> Result<()> {
        if self.fail_release.as_deref() == Some(spec.release_name.as_str()) {
            return Err(ProvisionerError::Submission(format!(
                "release {} rejected",
                spec.release_name
            )));
        }
        self.submitted.lock().unwrap().push(spec.clone());
        Ok(())
    }
}
