use crate::api::{ApiClient, ApiError, Approval, ApprovalStatus, Identity};
use std::rc::Rc;

#[derive(Clone)]
pub struct ApprovalsRepository {
    client: Rc<ApiClient>,
}

impl ApprovalsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, status: &ApprovalStatus) -> Result<Vec<Approval>, ApiError> {
        self.client.list_approvals(Some(status)).await
    }

    pub async fn approve(
        &self,
        approval_id: &str,
        comments: &str,
        approver: &Identity,
    ) -> Result<(), ApiError> {
        self.client
            .approve_approval(approval_id, comments, approver)
            .await
            .map(|_| ())
    }

    pub async fn reject(
        &self,
        approval_id: &str,
        comments: &str,
        approver: &Identity,
    ) -> Result<(), ApiError> {
        self.client
            .reject_approval(approval_id, comments, approver)
            .await
            .map(|_| ())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> ApprovalsRepository {
        ApprovalsRepository::new(ApiClient::new_with_base_url(server.url("/api")))
    }

    #[tokio::test]
    async fn approvals_repository_calls_api() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/approvals");
            then.status(200).json_body(json!([
                { "id": 7, "prId": "PR-1", "approvalLevel": 2, "status": "PENDING" }
            ]));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/approvals/7/approve");
            then.status(200)
                .json_body(json!({ "id": 7, "prId": "PR-1", "status": "APPROVED" }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/approvals/7/reject");
            then.status(200)
                .json_body(json!({ "id": 7, "prId": "PR-1", "status": "REJECTED" }));
        });

        let repo = repo(&server);
        let approver = Identity {
            id: "u-9".into(),
            display_name: "CFO".into(),
        };
        let rows = repo.list(&ApprovalStatus::Pending).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "7");
        assert_eq!(
            server.last_query(GET, "/api/approvals"),
            vec![("status".to_string(), "PENDING".to_string())]
        );

        repo.approve("7", "fine", &approver).await.unwrap();
        repo.reject("7", "over budget", &approver).await.unwrap();
        assert_eq!(
            server.last_body(POST, "/api/approvals/7/reject"),
            Some(json!({ "comments": "over budget", "approverId": "u-9" }))
        );
    }
}
