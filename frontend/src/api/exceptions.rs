use super::{
    client::{ApiClient, ApiResource, ListQuery, MutationAction},
    types::{
        ApiError, EscalationPayload, ExceptionRecord, ExceptionStatus, Identity,
        ResolutionPayload, Severity,
    },
};

impl ApiClient {
    pub async fn list_exceptions(
        &self,
        severity: Option<&Severity>,
        status: Option<&ExceptionStatus>,
    ) -> Result<Vec<ExceptionRecord>, ApiError> {
        let query = ListQuery::new()
            .with("severity", severity.map(Severity::as_str))
            .with("status", status.map(ExceptionStatus::as_str));
        self.list(ApiResource::Exceptions, &query).await
    }

    pub async fn list_exceptions_for_pr(
        &self,
        pr_id: &str,
    ) -> Result<Vec<ExceptionRecord>, ApiError> {
        self.list_at(ApiResource::Exceptions, &["pr", pr_id], &ListQuery::new())
            .await
    }

    pub async fn resolve_exception(
        &self,
        exception_id: &str,
        resolution: &str,
        resolver: &Identity,
    ) -> Result<ExceptionRecord, ApiError> {
        let payload = ResolutionPayload {
            resolution: resolution.to_string(),
            resolved_by: resolver.id.clone(),
        };
        self.mutate(
            ApiResource::Exceptions,
            exception_id,
            MutationAction::Resolve,
            &payload,
        )
        .await
    }

    pub async fn escalate_exception(
        &self,
        exception_id: &str,
        reason: &str,
        escalated_by: &Identity,
    ) -> Result<ExceptionRecord, ApiError> {
        let payload = EscalationPayload {
            reason: reason.to_string(),
            escalated_by: escalated_by.id.clone(),
        };
        self.mutate(
            ApiResource::Exceptions,
            exception_id,
            MutationAction::Escalate,
            &payload,
        )
        .await
    }
}
