use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config};

/// Backend collections the console talks to, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiResource {
    Dashboard,
    PurchaseRequests,
    Rules,
    Approvals,
    Exceptions,
}

impl ApiResource {
    pub fn path(self) -> &'static str {
        match self {
            ApiResource::Dashboard => "dashboard",
            ApiResource::PurchaseRequests => "pr",
            ApiResource::Rules => "rules",
            ApiResource::Approvals => "approvals",
            ApiResource::Exceptions => "exceptions",
        }
    }
}

/// Named state transitions exposed as `POST /{resource}/{id}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Approve,
    Reject,
    Resolve,
    Escalate,
}

impl MutationAction {
    pub fn path(self) -> &'static str {
        match self {
            MutationAction::Approve => "approve",
            MutationAction::Reject => "reject",
            MutationAction::Resolve => "resolve",
            MutationAction::Escalate => "escalate",
        }
    }
}

/// Query parameters for list calls. Empty values are dropped so an "All"
/// filter never reaches the backend as `?status=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(&'static str, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<V: Into<String>>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.into();
            if !value.trim().is_empty() {
                self.params.push((key, value));
            }
        }
        self
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        };
        config::normalize_base_url(&base)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn resource_url(&self, resource: ApiResource, segments: &[&str]) -> String {
        let mut url = format!("{}/{}", self.resolved_base_url().await, resource.path());
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: ApiResource,
        query: &ListQuery,
    ) -> Result<Vec<T>, ApiError> {
        self.list_at(resource, &[], query).await
    }

    /// Lists a nested collection such as `/approvals/pr/{prId}`.
    pub async fn list_at<T: DeserializeOwned>(
        &self,
        resource: ApiResource,
        segments: &[&str],
        query: &ListQuery,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.resource_url(resource, segments).await;
        let mut request = self.http_client().get(url);
        if !query.is_empty() {
            request = request.query(query.params());
        }
        self.send_json(request).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        resource: ApiResource,
        id: &str,
    ) -> Result<T, ApiError> {
        let url = self.resource_url(resource, &[id]).await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        resource: ApiResource,
        payload: &B,
    ) -> Result<T, ApiError> {
        let url = self.resource_url(resource, &[]).await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn update<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        resource: ApiResource,
        id: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let url = self.resource_url(resource, &[id]).await;
        self.send_json(self.http_client().put(url).json(payload))
            .await
    }

    pub async fn delete(&self, resource: ApiResource, id: &str) -> Result<(), ApiError> {
        let url = self.resource_url(resource, &[id]).await;
        self.send_empty(self.http_client().delete(url)).await
    }

    pub async fn mutate<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        resource: ApiResource,
        id: &str,
        action: MutationAction,
        payload: &B,
    ) -> Result<T, ApiError> {
        let url = self.resource_url(resource, &[id, action.path()]).await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let (method, url, response) = self.send(request).await?;
        let result = map_typed_response(response).await;
        log_failure(&method, &url, result)
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let (method, url, response) = self.send(request).await?;
        let result = map_empty_response(response).await;
        log_failure(&method, &url, result)
    }

    async fn send(&self, request: RequestBuilder) -> Result<(Method, String, Response), ApiError> {
        let mut request = request
            .header(header::ACCEPT, "application/json")
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        request
            .headers_mut()
            .entry(header::CONTENT_TYPE)
            .or_insert(header::HeaderValue::from_static("application/json"));
        let method = request.method().clone();
        let url = request.url().to_string();
        log::debug!("{} {}", method, url);

        match self.dispatch(request).await {
            Ok(response) => Ok((method, url, response)),
            Err(err) => log_failure(&method, &url, Err(err)),
        }
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        if let Some(responder) = find_mock(request.url().as_str()) {
            if let Some(delay) = responder.delay(&request) {
                tokio::time::sleep(delay).await;
            }
            return responder
                .respond(&request)
                .and_then(MockResponse::into_response);
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }
}

fn log_failure<T>(method: &Method, url: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        log::error!("{} {} failed [{}]: {}", method, url, err.code, err.error);
    }
    result
}

pub(crate) async fn map_typed_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(map_error_response(status, response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(map_error_response(status, response).await)
    }
}

async fn map_error_response(status: StatusCode, response: Response) -> ApiError {
    let body = response.json::<Value>().await.ok();
    error_from_status(status, body.as_ref())
}

/// Builds the error for a non-2xx reply. Bodies that already carry an
/// `{error, code}` envelope are passed through, otherwise the backend message
/// (or the status reason) is wrapped as NOT_FOUND or SERVER_ERROR.
pub(crate) fn error_from_status(status: StatusCode, body: Option<&Value>) -> ApiError {
    if let Some(Ok(envelope)) = body
        .filter(|value| value.get("code").is_some())
        .map(|value| serde_json::from_value::<ApiError>(value.clone()))
    {
        return envelope;
    }

    let message = body
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .filter(|msg| !msg.trim().is_empty())
                .or_else(|| value.get("error").and_then(Value::as_str))
        })
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
        });

    if status == StatusCode::NOT_FOUND {
        ApiError::not_found(message)
    } else {
        ApiError::server_error(status.as_u16(), message)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_transport::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::find_mock;


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_query_skips_missing_and_blank_values() {
        let query = ListQuery::new()
            .with("status", Some("PENDING"))
            .with("severity", None::<String>)
            .with("category", Some("  "));
        assert_eq!(query.params(), &[("status", "PENDING".to_string())]);
        assert!(ListQuery::new().with("status", Some("")).is_empty());
    }

    #[test]
    fn resource_and_action_paths_match_backend_routes() {
        assert_eq!(ApiResource::PurchaseRequests.path(), "pr");
        assert_eq!(ApiResource::Dashboard.path(), "dashboard");
        assert_eq!(MutationAction::Escalate.path(), "escalate");
    }

    #[test]
    fn error_from_status_passes_through_error_envelopes() {
        let body = json!({ "error": "Rule exists", "code": "VALIDATION_ERROR" });
        let err = error_from_status(StatusCode::BAD_REQUEST, Some(&body));
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "Rule exists");
    }

    #[test]
    fn error_from_status_maps_not_found() {
        let body = json!({ "status": 404, "error": "Not Found", "message": "PR not found: PR-404" });
        let err = error_from_status(StatusCode::NOT_FOUND, Some(&body));
        assert!(err.is_not_found());
        assert_eq!(err.error, "PR not found: PR-404");
    }

    #[test]
    fn error_from_status_falls_back_to_reason_phrase() {
        let err = error_from_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.code, "SERVER_ERROR");
        assert_eq!(err.error, "Internal Server Error");
        assert_eq!(err.status(), Some(500));
    }
}
