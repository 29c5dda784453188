use crate::api::{ApiClient, ApiError, Approval, ApprovalStatus};
use crate::pages::approvals::repository::ApprovalsRepository;
use crate::state::{
    list_page::{list_loader, mutation_handler, ListController, MutationKind, MutationRequest},
    session::{require_identity, use_session},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ApprovalsViewModel {
    pub list: ListController<Approval, ApprovalStatus>,
}

impl ApprovalsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = ApprovalsRepository::new(api);
        let (session, _) = use_session();

        let list_repo = repository.clone();
        let loader = list_loader(move |status: ApprovalStatus| {
            let repo = list_repo.clone();
            async move { repo.list(&status).await }
        });

        let handler = mutation_handler(move |request: MutationRequest| {
            let repo = repository.clone();
            let approver = require_identity(&session.get_untracked());
            async move {
                let approver = approver?;
                match request.kind {
                    MutationKind::Approve => {
                        repo.approve(&request.target_id, &request.input, &approver)
                            .await
                    }
                    MutationKind::Reject => {
                        repo.reject(&request.target_id, &request.input, &approver)
                            .await
                    }
                    other => Err(ApiError::validation(format!(
                        "{} is not available for approvals",
                        other.verb()
                    ))),
                }
            }
        });

        Self {
            list: ListController::new(ApprovalStatus::Pending, loader).with_mutations(handler),
        }
    }

    pub fn status_options() -> Vec<ApprovalStatus> {
        ApprovalStatus::known()
    }
}

impl Default for ApprovalsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_approvals_view_model() -> ApprovalsViewModel {
    match use_context::<ApprovalsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ApprovalsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::list_page::{LoadState, MutationOutcome, Notice};
    use crate::state::session::{SessionContext, SessionState, SESSION_LOADING_MESSAGE};
    use crate::test_support::helpers::{ops_user, provide_session};
    use serde_json::json;

    fn mock_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/approvals");
            then.status(200).json_body(json!([
                { "id": "A-7", "prId": "PR-1", "approvalLevel": 1, "status": "PENDING" }
            ]));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/approvals/A-7/approve");
            then.status(200)
                .json_body(json!({ "id": "A-7", "prId": "PR-1", "status": "APPROVED" }));
        });
        server
    }

    #[tokio::test]
    async fn approve_posts_comment_with_session_identity_then_refetches() {
        let runtime = create_runtime();
        let server = mock_server();
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        provide_session(Some(ops_user()));

        let vm = ApprovalsViewModel::new();
        vm.list.request_mutation("A-7", MutationKind::Approve);
        let outcome = vm.list.submit_prompt("ok").await;

        assert_eq!(outcome, MutationOutcome::Succeeded);
        assert_eq!(server.hits(POST, "/api/approvals/A-7/approve"), 1);
        assert_eq!(
            server.last_body(POST, "/api/approvals/A-7/approve"),
            Some(json!({ "comments": "ok", "approverId": "u-ops" }))
        );
        assert_eq!(server.hits(GET, "/api/approvals"), 1);
        assert_eq!(
            vm.list.notice.get_untracked(),
            Some(Notice::Success("A-7 approved".into()))
        );
        assert_eq!(vm.list.state.get_untracked().items().len(), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn signed_out_mutation_fails_without_posting() {
        let runtime = create_runtime();
        let server = mock_server();
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        provide_session(None);

        let vm = ApprovalsViewModel::new();
        vm.list.request_mutation("A-7", MutationKind::Approve);
        let outcome = vm.list.submit_prompt("ok").await;

        match outcome {
            MutationOutcome::Failed(err) => assert_eq!(err.code, "VALIDATION_ERROR"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(server.hits(POST, "/api/approvals/A-7/approve"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn mutation_while_session_loads_fails_with_loading_notice() {
        let runtime = create_runtime();
        let server = mock_server();
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        provide_context::<SessionContext>(create_signal(SessionState {
            identity: None,
            loading: true,
        }));

        let vm = ApprovalsViewModel::new();
        vm.list.request_mutation("A-7", MutationKind::Approve);
        let outcome = vm.list.submit_prompt("ok").await;

        match outcome {
            MutationOutcome::Failed(err) => assert_eq!(err.error, SESSION_LOADING_MESSAGE),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(server.hits(POST, "/api/approvals/A-7/approve"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn filter_is_sent_as_status_query() {
        let runtime = create_runtime();
        let server = mock_server();
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        provide_session(Some(ops_user()));

        let vm = ApprovalsViewModel::new();
        vm.list.set_filter(ApprovalStatus::Rejected);
        vm.list.refresh().await;

        assert_eq!(
            server.last_query(GET, "/api/approvals"),
            vec![("status".to_string(), "REJECTED".to_string())]
        );
        assert!(matches!(vm.list.state.get_untracked(), LoadState::Loaded(_)));
        runtime.dispose();
    }
}
