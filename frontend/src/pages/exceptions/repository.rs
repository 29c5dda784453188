use crate::api::{ApiClient, ApiError, ExceptionRecord, Identity, Severity};
use std::rc::Rc;

#[derive(Clone)]
pub struct ExceptionsRepository {
    client: Rc<ApiClient>,
}

impl ExceptionsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, severity: Option<&Severity>) -> Result<Vec<ExceptionRecord>, ApiError> {
        self.client.list_exceptions(severity, None).await
    }

    pub async fn resolve(
        &self,
        exception_id: &str,
        resolution: &str,
        resolver: &Identity,
    ) -> Result<(), ApiError> {
        self.client
            .resolve_exception(exception_id, resolution, resolver)
            .await
            .map(|_| ())
    }

    pub async fn escalate(
        &self,
        exception_id: &str,
        reason: &str,
        escalated_by: &Identity,
    ) -> Result<(), ApiError> {
        self.client
            .escalate_exception(exception_id, reason, escalated_by)
            .await
            .map(|_| ())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn severity_filter_is_passed_through_and_all_omits_it() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/exceptions");
            then.status(200).json_body(json!([]));
        });
        let repo = ExceptionsRepository::new(ApiClient::new_with_base_url(server.url("/api")));

        repo.list(Some(&Severity::High)).await.unwrap();
        assert_eq!(
            server.last_query(GET, "/api/exceptions"),
            vec![("severity".to_string(), "HIGH".to_string())]
        );

        repo.list(None).await.unwrap();
        assert!(server.last_query(GET, "/api/exceptions").is_empty());
        assert_eq!(server.hits(GET, "/api/exceptions"), 2);
    }
}
