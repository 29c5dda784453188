use crate::api::{ApiClient, ApiError, Rule, RuleDraft};
use crate::pages::rules::utils::RuleFilter;
use std::rc::Rc;

#[derive(Clone)]
pub struct RulesRepository {
    client: Rc<ApiClient>,
}

impl RulesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, filter: &RuleFilter) -> Result<Vec<Rule>, ApiError> {
        self.client
            .list_rules(filter.category_param(), filter.active_param())
            .await
    }

    pub async fn create(&self, draft: &RuleDraft) -> Result<(), ApiError> {
        self.client.create_rule(draft).await.map(|_| ())
    }

    pub async fn set_active(&self, rule: &Rule, active: bool) -> Result<(), ApiError> {
        let mut draft = rule.to_draft();
        draft.active = active;
        self.client.update_rule(&rule.id, &draft).await.map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_rule(id).await
    }
}
