use super::{
    client::{ApiClient, ApiResource},
    types::{ApiError, DashboardSummary},
};

impl ApiClient {
    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get(ApiResource::Dashboard, "summary").await
    }
}
