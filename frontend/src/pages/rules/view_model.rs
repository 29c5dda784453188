use crate::api::{ApiClient, ApiError, Rule};
use crate::pages::rules::{
    repository::RulesRepository,
    utils::{validate_rule_form, RuleFilter, RuleFormInput},
};
use crate::state::list_page::{list_loader, ListController, MutationOutcome};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RulesViewModel {
    pub list: ListController<Rule, RuleFilter>,
    pub form: RwSignal<RuleFormInput>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub show_form: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Rule>>,
    repository: StoredValue<RulesRepository>,
}

impl RulesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = RulesRepository::new(api);

        let list_repo = repository.clone();
        let loader = list_loader(move |filter: RuleFilter| {
            let repo = list_repo.clone();
            async move { repo.list(&filter).await }
        });

        Self {
            list: ListController::new(RuleFilter::default(), loader),
            form: create_rw_signal(RuleFormInput::default()),
            form_error: create_rw_signal(None),
            show_form: create_rw_signal(false),
            pending_delete: create_rw_signal(None),
            repository: store_value(repository),
        }
    }

    pub async fn submit_create(&self) -> MutationOutcome {
        let draft = match validate_rule_form(&self.form.get_untracked()) {
            Ok(draft) => draft,
            Err(err) => {
                self.form_error.set(Some(err.clone()));
                return MutationOutcome::Failed(err);
            }
        };
        self.form_error.set(None);
        self.list.notice.set(None);

        let repo = self.repository.get_value();
        let outcome = self
            .list
            .run(async move { repo.create(&draft).await }, "Rule created")
            .await;
        if outcome == MutationOutcome::Succeeded {
            self.form.set(RuleFormInput::default());
            self.show_form.set(false);
        }
        outcome
    }

    pub async fn toggle_active(&self, rule: Rule) -> MutationOutcome {
        self.list.notice.set(None);
        let active = !rule.active;
        let message = format!(
            "{} {}",
            rule.rule_id,
            if active { "activated" } else { "deactivated" }
        );
        let repo = self.repository.get_value();
        self.list
            .run(async move { repo.set_active(&rule, active).await }, message)
            .await
    }

    pub fn request_delete(&self, rule: Rule) {
        self.list.notice.set(None);
        self.pending_delete.set(Some(rule));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Deletes the rule awaiting confirmation. Without one this is a no-op.
    pub async fn confirm_delete(&self) -> MutationOutcome {
        let Some(rule) = self.pending_delete.get_untracked() else {
            return MutationOutcome::Cancelled;
        };
        self.pending_delete.set(None);
        let repo = self.repository.get_value();
        let message = format!("{} deleted", rule.rule_id);
        self.list
            .run(async move { repo.delete(&rule.id).await }, message)
            .await
    }

    pub fn toggle_form(&self) {
        self.show_form.update(|open| *open = !*open);
        self.form_error.set(None);
    }
}

impl Default for RulesViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_rules_view_model() -> RulesViewModel {
    match use_context::<RulesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RulesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::list_page::Notice;
    use serde_json::json;

    fn rule() -> Rule {
        serde_json::from_value(json!({
            "id": 9,
            "ruleId": "RULE-009",
            "fieldName": "estimatedValueInr",
            "operator": ">",
            "ruleValue": "100000",
            "description": "CFO approval above 1L",
            "severity": "HIGH",
            "active": true
        }))
        .unwrap()
    }

    fn setup(server: &MockServer) -> RulesViewModel {
        server.mock(|when, then| {
            when.method(GET).path("/api/rules");
            then.status(200).json_body(json!([]));
        });
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        RulesViewModel::new()
    }

    #[tokio::test]
    async fn filter_maps_to_category_and_active_params() {
        let runtime = create_runtime();
        let server = MockServer::start();
        let vm = setup(&server);

        vm.list.set_filter(RuleFilter {
            category: "Services".into(),
            active_only: true,
        });
        vm.list.refresh().await;

        let query = server.last_query(GET, "/api/rules");
        assert!(query.contains(&("category".to_string(), "Services".to_string())));
        assert!(query.contains(&("active".to_string(), "true".to_string())));
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_waits_for_confirmation() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/rules/9");
            then.status(204).empty_body();
        });
        let vm = setup(&server);

        vm.request_delete(rule());
        vm.cancel_delete();
        assert_eq!(vm.confirm_delete().await, MutationOutcome::Cancelled);
        assert_eq!(server.total_hits(), 0);

        vm.request_delete(rule());
        assert_eq!(vm.confirm_delete().await, MutationOutcome::Succeeded);
        assert_eq!(server.hits(DELETE, "/api/rules/9"), 1);
        assert_eq!(server.hits(GET, "/api/rules"), 1);
        assert_eq!(
            vm.list.notice.get_untracked(),
            Some(Notice::Success("RULE-009 deleted".into()))
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn toggle_deactivates_then_refetches() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/api/rules/9");
            then.status(200).json_body(json!({ "id": 9, "ruleId": "RULE-009", "active": false }));
        });
        let vm = setup(&server);

        let outcome = vm.toggle_active(rule()).await;

        assert_eq!(outcome, MutationOutcome::Succeeded);
        assert_eq!(server.last_body(PUT, "/api/rules/9").unwrap()["active"], json!(false));
        assert_eq!(server.hits(GET, "/api/rules"), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn create_sends_draft_without_rule_id() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/rules");
            then.status(201).json_body(json!({ "id": 10, "ruleId": "RULE-010" }));
        });
        let vm = setup(&server);
        vm.form.set(RuleFormInput {
            rule_value: "250000".into(),
            description: "Dual sign-off".into(),
            ..RuleFormInput::default()
        });

        assert_eq!(vm.submit_create().await, MutationOutcome::Succeeded);
        let body = server.last_body(POST, "/api/rules").unwrap();
        assert!(body.get("ruleId").is_none());
        assert_eq!(body["active"], json!(true));
        assert_eq!(vm.form.get_untracked(), RuleFormInput::default());
        runtime.dispose();
    }
}
