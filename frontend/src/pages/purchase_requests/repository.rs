use crate::api::{ApiClient, ApiError, CreatePurchaseRequest, Identity, PrStatus, PurchaseRequest};
use crate::pages::purchase_requests::utils::PrDetail;
use std::rc::Rc;

#[derive(Clone)]
pub struct PurchaseRequestsRepository {
    client: Rc<ApiClient>,
}

impl PurchaseRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, status: Option<&PrStatus>) -> Result<Vec<PurchaseRequest>, ApiError> {
        self.client.list_purchase_requests(status).await
    }

    /// Loads a purchase request with its approval trail and exceptions. Only
    /// the request itself is required; a failing trail is logged and shown
    /// empty.
    pub async fn detail(&self, pr_id: &str) -> Result<PrDetail, ApiError> {
        let request = self.client.get_purchase_request(pr_id).await?;
        let approvals = self
            .client
            .list_approvals_for_pr(pr_id)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Approval trail for {} unavailable: {}", pr_id, err);
                Vec::new()
            });
        let exceptions = self
            .client
            .list_exceptions_for_pr(pr_id)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Exceptions for {} unavailable: {}", pr_id, err);
                Vec::new()
            });
        Ok(PrDetail {
            request,
            approvals,
            exceptions,
        })
    }

    pub async fn create(&self, payload: &CreatePurchaseRequest) -> Result<PurchaseRequest, ApiError> {
        self.client.create_purchase_request(payload).await
    }

    pub async fn approve(
        &self,
        pr_id: &str,
        comments: &str,
        approver: &Identity,
    ) -> Result<(), ApiError> {
        self.client
            .approve_purchase_request(pr_id, comments, approver)
            .await
            .map(|_| ())
    }

    pub async fn reject(
        &self,
        pr_id: &str,
        reason: &str,
        approver: &Identity,
    ) -> Result<(), ApiError> {
        self.client
            .reject_purchase_request(pr_id, reason, approver)
            .await
            .map(|_| ())
    }
}
