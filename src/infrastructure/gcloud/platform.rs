//! Cloud Functions platform adapter
//!
//! Reads (list, describe) go through the gcloud CLI; writes and operation
//! polling go to the Cloud Functions REST API with a bearer token obtained
//! from gcloud and cached until the API rejects it.

use std::sync::Mutex;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;

use super::cli::GcloudCli;
use crate::domain::entities::{InstanceDescriptor, Operation};
use crate::domain::ports::{FunctionPlatform, PlatformError};
use crate::domain::value_objects::ResourceName;

/// Public Cloud Functions API endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://cloudfunctions.googleapis.com";

/// Field mask restricting a patch to the moving-reference URL
pub const SOURCE_UPDATE_MASK: &str = "sourceRepository.url";

/// Patch URL for one function instance
pub fn patch_url(endpoint: &str, resource: &ResourceName) -> String {
    format!(
        "{}/v1/{}?updateMask={}",
        endpoint.trim_end_matches('/'),
        resource,
        SOURCE_UPDATE_MASK
    )
}

/// Status URL for an operation name such as `operations/abc`
pub fn operation_url(endpoint: &str, operation: &str) -> String {
    format!(
        "{}/v1/{}",
        endpoint.trim_end_matches('/'),
        operation.trim_start_matches('/')
    )
}

/// FunctionPlatform backed by gcloud and the REST API
pub struct GcloudPlatform {
    cli: GcloudCli,
    http: Client,
    endpoint: String,
    /// Cached bearer token
    token: Mutex<Option<String>>,
}

impl GcloudPlatform {
    pub fn new(cli: GcloudCli) -> Self {
        Self {
            cli,
            http: Client::new(),
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            token: Mutex::new(None),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn cli(&self) -> &GcloudCli {
        &self.cli
    }

    fn bearer_token(&self) -> Result<String, PlatformError> {
        if let Ok(cache) = self.token.lock() {
            if let Some(token) = cache.as_ref() {
                return Ok(token.clone());
            }
        }

        let token = self.cli.access_token()?;
        if let Ok(mut cache) = self.token.lock() {
            *cache = Some(token.clone());
        }
        Ok(token)
    }

    fn clear_token(&self) {
        if let Ok(mut cache) = self.token.lock() {
            *cache = None;
        }
    }

    fn send_with_token(&self, request: RequestBuilder) -> Result<Response, PlatformError> {
        let token = self.bearer_token()?;
        request
            .bearer_auth(token)
            .send()
            .map_err(|e| PlatformError::Transport(e.to_string()))
    }

    /// Send a request built by `build`; on 401 the cached token is dropped
    /// and the request is retried once with a fresh one.
    fn send<F>(&self, build: F) -> Result<Operation, PlatformError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut response = self.send_with_token(build())?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!("access token rejected, fetching a new one");
            self.clear_token();
            response = self.send_with_token(build())?;
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(PlatformError::Http {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        response
            .json::<Operation>()
            .map_err(|e| PlatformError::InvalidResponse(e.to_string()))
    }
}

impl FunctionPlatform for GcloudPlatform {
    fn list_instances(&self) -> Result<Vec<String>, PlatformError> {
        let raw = self.cli.list_functions()?;
        Ok(raw.lines().map(str::to_string).collect())
    }

    fn describe(&self, function: &str, region: &str) -> Result<InstanceDescriptor, PlatformError> {
        let raw = self.cli.describe_function(function, region)?;
        serde_json::from_str(&raw).map_err(|e| PlatformError::InvalidResponse(e.to_string()))
    }

    fn patch_source(
        &self,
        function: &str,
        region: &str,
        body: &InstanceDescriptor,
    ) -> Result<Operation, PlatformError> {
        let resource = ResourceName::new(self.cli.project(), region, function);
        let url = patch_url(&self.endpoint, &resource);
        tracing::debug!(%url, "patching function source");
        self.send(|| self.http.patch(&url).json(body))
    }

    fn get_operation(&self, name: &str) -> Result<Operation, PlatformError> {
        let url = operation_url(&self.endpoint, name);
        tracing::trace!(%url, "polling operation");
        self.send(|| self.http.get(&url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_url_targets_instance_with_update_mask() {
        let resource = ResourceName::new("acme", "us-east1", "billing");
        assert_eq!(
            patch_url("https://cloudfunctions.googleapis.com/", &resource),
            "https://cloudfunctions.googleapis.com/v1/projects/acme/locations/us-east1/functions/billing?updateMask=sourceRepository.url"
        );
    }

    #[test]
    fn operation_url_joins_name() {
        assert_eq!(
            operation_url(DEFAULT_API_ENDPOINT, "operations/Y2YtZnVuYw"),
            "https://cloudfunctions.googleapis.com/v1/operations/Y2YtZnVuYw"
        );
    }

    #[cfg(unix)]
    #[test]
    fn describe_parses_cli_json() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gcloud");
        std::fs::write(
            &path,
            "#!/bin/sh\ncat <<'EOF'\n{\"name\": \"projects/acme/locations/us-east1/functions/billing\", \"sourceRepository\": {\"url\": \"https://repo/moveable-aliases/master\", \"deployedUrl\": \"https://repo/revisions/abc123\"}}\nEOF\n",
        )
        .unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let platform = GcloudPlatform::new(
            GcloudCli::new("acme").with_binary(path.to_string_lossy().into_owned()),
        );
        let descriptor = platform.describe("billing", "us-east1").unwrap();
        assert_eq!(descriptor.deployed_url(), Some("https://repo/revisions/abc123"));
    }

    #[cfg(unix)]
    mod http {
        use super::*;
        use crate::domain::entities::{OperationError, SourceRepository};
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;
        use wiremock::matchers::{header, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        /// Fake gcloud that hands out `test-token`
        fn token_gcloud() -> (TempDir, String) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("gcloud");
            std::fs::write(&path, "#!/bin/sh\necho test-token\n").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            let binary = path.to_string_lossy().into_owned();
            (dir, binary)
        }

        /// Build the platform and call it off the async runtime; the blocking
        /// client must be created and dropped on a blocking thread.
        async fn call<T, F>(binary: String, endpoint: String, f: F) -> T
        where
            T: Send + 'static,
            F: FnOnce(&GcloudPlatform) -> T + Send + 'static,
        {
            tokio::task::spawn_blocking(move || {
                let platform =
                    GcloudPlatform::new(GcloudCli::new("acme").with_binary(binary))
                        .with_endpoint(endpoint);
                f(&platform)
            })
            .await
            .unwrap()
        }

        #[tokio::test(flavor = "multi_thread")]
        async fn patch_sends_masked_update_with_bearer_token() {
            let server = MockServer::start().await;
            Mock::given(method("PATCH"))
                .and(path("/v1/projects/acme/locations/us-east1/functions/billing"))
                .and(query_param("updateMask", SOURCE_UPDATE_MASK))
                .and(header("authorization", "Bearer test-token"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "name": "operations/abc",
                    "metadata": {"type": "UPDATE_FUNCTION"}
                })))
                .expect(1)
                .mount(&server)
                .await;

            let (_dir, binary) = token_gcloud();
            let body = InstanceDescriptor::new("projects/acme/locations/us-east1/functions/billing")
                .with_source_repository(SourceRepository::new(
                    "https://repo/moveable-aliases/master/paths/billing",
                ));
            let operation = call(binary, server.uri(), move |platform| {
                platform.patch_source("billing", "us-east1", &body)
            })
            .await
            .unwrap();
            assert_eq!(operation, Operation::pending("operations/abc"));

            let requests = server.received_requests().await.unwrap();
            let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
            assert_eq!(
                sent["sourceRepository"]["url"],
                "https://repo/moveable-aliases/master/paths/billing"
            );
            assert!(sent["sourceRepository"].get("deployedUrl").is_none());
        }

        #[tokio::test(flavor = "multi_thread")]
        async fn rejected_patch_is_http_error() {
            let server = MockServer::start().await;
            Mock::given(method("PATCH"))
                .respond_with(ResponseTemplate::new(403).set_body_string("permission denied\n"))
                .mount(&server)
                .await;

            let (_dir, binary) = token_gcloud();
            let err = call(binary, server.uri(), |platform| {
                platform.patch_source("billing", "us-east1", &InstanceDescriptor::new("x"))
            })
            .await
            .unwrap_err();
            assert_eq!(
                err,
                PlatformError::Http {
                    status: 403,
                    body: "permission denied".to_string()
                }
            );
        }

        #[tokio::test(flavor = "multi_thread")]
        async fn get_operation_reports_error_payload() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/v1/operations/abc"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "name": "operations/abc",
                    "done": true,
                    "error": {"code": 3, "message": "Build failed"}
                })))
                .mount(&server)
                .await;

            let (_dir, binary) = token_gcloud();
            let operation = call(binary, server.uri(), |platform| {
                platform.get_operation("operations/abc")
            })
            .await
            .unwrap();
            assert_eq!(
                operation,
                Operation::failed("operations/abc", OperationError::new("Build failed").with_code(3))
            );
        }

        /// Fake gcloud that hands out `old-token` first and `new-token` after
        fn rotating_gcloud() -> (TempDir, String) {
            let dir = tempfile::tempdir().unwrap();
            let marker = dir.path().join("issued");
            let path = dir.path().join("gcloud");
            std::fs::write(
                &path,
                format!(
                    "#!/bin/sh\nif [ -f '{0}' ]; then echo new-token; else touch '{0}'; echo old-token; fi\n",
                    marker.display()
                ),
            )
            .unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            let binary = path.to_string_lossy().into_owned();
            (dir, binary)
        }

        #[tokio::test(flavor = "multi_thread")]
        async fn expired_token_is_refreshed_once() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(header("authorization", "Bearer old-token"))
                .respond_with(ResponseTemplate::new(401))
                .expect(1)
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(header("authorization", "Bearer new-token"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "name": "operations/abc",
                    "done": true
                })))
                .expect(2)
                .mount(&server)
                .await;

            let (_dir, binary) = rotating_gcloud();
            let (first, second) = call(binary, server.uri(), |platform| {
                (
                    platform.get_operation("operations/abc"),
                    platform.get_operation("operations/abc"),
                )
            })
            .await;
            assert_eq!(first.unwrap(), Operation::succeeded("operations/abc"));
            assert_eq!(second.unwrap(), Operation::succeeded("operations/abc"));
        }

        #[tokio::test(flavor = "multi_thread")]
        async fn repeated_unauthorized_is_http_error() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(401).set_body_string("unauthenticated"))
                .expect(2)
                .mount(&server)
                .await;

            let (_dir, binary) = token_gcloud();
            let err = call(binary, server.uri(), |platform| {
                platform.get_operation("operations/abc")
            })
            .await
            .unwrap_err();
            assert_eq!(
                err,
                PlatformError::Http {
                    status: 401,
                    body: "unauthenticated".to_string()
                }
            );
        }

        #[tokio::test(flavor = "multi_thread")]
        async fn token_is_fetched_once_per_platform() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "name": "operations/abc",
                    "done": false
                })))
                .expect(2)
                .mount(&server)
                .await;

            let dir = tempfile::tempdir().unwrap();
            let counter = dir.path().join("calls");
            let script = dir.path().join("gcloud");
            std::fs::write(
                &script,
                format!("#!/bin/sh\necho x >> '{}'\necho test-token\n", counter.display()),
            )
            .unwrap();
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

            call(script.to_string_lossy().into_owned(), server.uri(), |platform| {
                platform.get_operation("operations/abc").unwrap();
                platform.get_operation("operations/abc").unwrap();
            })
            .await;

            let calls = std::fs::read_to_string(&counter).unwrap();
            assert_eq!(calls.lines().count(), 1);
        }
    }
}
