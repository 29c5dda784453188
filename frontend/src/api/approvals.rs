use super::{
    client::{ApiClient, ApiResource, ListQuery, MutationAction},
    types::{Approval, ApprovalStatus, ApiError, DecisionPayload, Identity},
};

impl ApiClient {
    pub async fn list_approvals(
        &self,
        status: Option<&ApprovalStatus>,
    ) -> Result<Vec<Approval>, ApiError> {
        let query = ListQuery::new().with("status", status.map(ApprovalStatus::as_str));
        self.list(ApiResource::Approvals, &query).await
    }

    pub async fn list_approvals_for_pr(&self, pr_id: &str) -> Result<Vec<Approval>, ApiError> {
        self.list_at(ApiResource::Approvals, &["pr", pr_id], &ListQuery::new())
            .await
    }

    pub async fn approve_approval(
        &self,
        approval_id: &str,
        comments: &str,
        approver: &Identity,
    ) -> Result<Approval, ApiError> {
        self.decide_approval(approval_id, MutationAction::Approve, comments, approver)
            .await
    }

    pub async fn reject_approval(
        &self,
        approval_id: &str,
        comments: &str,
        approver: &Identity,
    ) -> Result<Approval, ApiError> {
        self.decide_approval(approval_id, MutationAction::Reject, comments, approver)
            .await
    }

    async fn decide_approval(
        &self,
        approval_id: &str,
        action: MutationAction,
        comments: &str,
        approver: &Identity,
    ) -> Result<Approval, ApiError> {
        let payload = DecisionPayload {
            comments: comments.to_string(),
            approver_id: approver.id.clone(),
        };
        self.mutate(ApiResource::Approvals, approval_id, action, &payload)
            .await
    }
}
