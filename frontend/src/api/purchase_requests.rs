use super::{
    client::{ApiClient, ApiResource, ListQuery, MutationAction},
    types::{
        ApiError, CreatePurchaseRequest, DecisionPayload, Identity, PrStatus, PurchaseRequest,
        RejectionPayload,
    },
};

impl ApiClient {
    pub async fn list_purchase_requests(
        &self,
        status: Option<&PrStatus>,
    ) -> Result<Vec<PurchaseRequest>, ApiError> {
        let query = ListQuery::new().with("status", status.map(PrStatus::as_str));
        self.list(ApiResource::PurchaseRequests, &query).await
    }

    pub async fn get_purchase_request(&self, pr_id: &str) -> Result<PurchaseRequest, ApiError> {
        self.get(ApiResource::PurchaseRequests, pr_id).await
    }

    pub async fn create_purchase_request(
        &self,
        payload: &CreatePurchaseRequest,
    ) -> Result<PurchaseRequest, ApiError> {
        self.create(ApiResource::PurchaseRequests, payload).await
    }

    pub async fn approve_purchase_request(
        &self,
        pr_id: &str,
        comments: &str,
        approver: &Identity,
    ) -> Result<PurchaseRequest, ApiError> {
        let payload = DecisionPayload {
            comments: comments.to_string(),
            approver_id: approver.id.clone(),
        };
        self.mutate(
            ApiResource::PurchaseRequests,
            pr_id,
            MutationAction::Approve,
            &payload,
        )
        .await
    }

    pub async fn reject_purchase_request(
        &self,
        pr_id: &str,
        reason: &str,
        approver: &Identity,
    ) -> Result<PurchaseRequest, ApiError> {
        let payload = RejectionPayload {
            reason: reason.to_string(),
            approver_id: approver.id.clone(),
        };
        self.mutate(
            ApiResource::PurchaseRequests,
            pr_id,
            MutationAction::Reject,
            &payload,
        )
        .await
    }
}
