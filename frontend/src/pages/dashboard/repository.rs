use crate::api::{ApiClient, ApiError, DashboardSummary};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.client.get_dashboard_summary().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn summary_defaults_missing_counters() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/dashboard/summary");
            then.status(200).json_body(json!({
                "totalPRs": 12,
                "pendingApprovals": 3,
                "totalValue": 1250000.5
            }));
        });
        let repo = DashboardRepository::new(ApiClient::new_with_base_url(server.url("/api")));

        let summary = repo.fetch_summary().await.unwrap();
        assert_eq!(summary.total_prs, 12);
        assert_eq!(summary.pending_approvals, 3);
        assert_eq!(summary.active_exceptions, 0);
        assert_eq!(summary.total_value, 1250000.5);
    }
}
