use super::{
    client::{ApiClient, ApiResource, ListQuery},
    types::{ApiError, Rule, RuleDraft},
};

impl ApiClient {
    pub async fn list_rules(
        &self,
        category: Option<&str>,
        active: Option<bool>,
    ) -> Result<Vec<Rule>, ApiError> {
        let query = ListQuery::new()
            .with("category", category)
            .with("active", active.map(|flag| flag.to_string()));
        self.list(ApiResource::Rules, &query).await
    }

    pub async fn create_rule(&self, draft: &RuleDraft) -> Result<Rule, ApiError> {
        self.create(ApiResource::Rules, draft).await
    }

    pub async fn update_rule(&self, id: &str, draft: &RuleDraft) -> Result<Rule, ApiError> {
        self.update(ApiResource::Rules, id, draft).await
    }

    pub async fn delete_rule(&self, id: &str) -> Result<(), ApiError> {
        self.delete(ApiResource::Rules, id).await
    }
}
