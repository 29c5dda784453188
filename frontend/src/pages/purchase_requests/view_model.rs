use crate::api::{ApiClient, ApiError, PrStatus, PurchaseRequest};
use crate::pages::purchase_requests::{
    repository::PurchaseRequestsRepository,
    utils::{validate_create_form, CreateFormInput, DetailState},
};
use crate::state::{
    list_page::{
        list_loader, mutation_handler, ListController, MutationKind, MutationOutcome,
        MutationRequest,
    },
    session::{require_identity, use_session},
};
use leptos::*;

pub type StatusFilter = Option<PrStatus>;

#[derive(Clone, Copy)]
pub struct PurchaseRequestsViewModel {
    pub list: ListController<PurchaseRequest, StatusFilter>,
    pub form: RwSignal<CreateFormInput>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub show_form: RwSignal<bool>,
    pub detail: RwSignal<DetailState>,
    repository: StoredValue<PurchaseRequestsRepository>,
}

impl PurchaseRequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = PurchaseRequestsRepository::new(api);
        let (session, _) = use_session();

        let list_repo = repository.clone();
        let loader = list_loader(move |status: StatusFilter| {
            let repo = list_repo.clone();
            async move { repo.list(status.as_ref()).await }
        });

        let mutation_repo = repository.clone();
        let handler = mutation_handler(move |request: MutationRequest| {
            let repo = mutation_repo.clone();
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
                        "{} is not available for purchase requests",
                        other.verb()
                    ))),
                }
            }
        });

        Self {
            list: ListController::new(None, loader).with_mutations(handler),
            form: create_rw_signal(CreateFormInput::default()),
            form_error: create_rw_signal(None),
            show_form: create_rw_signal(false),
            detail: create_rw_signal(DetailState::Closed),
            repository: store_value(repository),
        }
    }

    /// Validates the create form and, when valid, creates the request and
    /// refetches the list. Invalid input never reaches the network.
    pub async fn submit_create(&self) -> MutationOutcome {
        let payload = match validate_create_form(&self.form.get_untracked()) {
            Ok(payload) => payload,
            Err(err) => {
                self.form_error.set(Some(err.clone()));
                return MutationOutcome::Failed(err);
            }
        };
        self.form_error.set(None);
        self.list.notice.set(None);

        let repo = self.repository.get_value();
        let description = payload.description.clone();
        let outcome = self
            .list
            .run(
                async move { repo.create(&payload).await.map(|_| ()) },
                format!("Purchase request \"{}\" created", description),
            )
            .await;
        if outcome == MutationOutcome::Succeeded {
            self.form.set(CreateFormInput::default());
            self.show_form.set(false);
        }
        outcome
    }

    pub async fn open_detail(&self, pr_id: String) {
        self.detail.set(DetailState::Loading(pr_id.clone()));
        let result = self.repository.get_value().detail(&pr_id).await;
        // A newer selection (or closing the panel) wins.
        if self.detail.with_untracked(|state| state.target() != Some(pr_id.as_str())) {
            return;
        }
        match result {
            Ok(detail) => self.detail.set(DetailState::Loaded(Box::new(detail))),
            Err(err) => {
                log::warn!("Purchase request {} failed to load: {}", pr_id, err);
                self.detail.set(DetailState::Failed(pr_id, err));
            }
        }
    }

    pub fn close_detail(&self) {
        self.detail.set(DetailState::Closed);
    }

    pub fn toggle_form(&self) {
        self.show_form.update(|open| *open = !*open);
        self.form_error.set(None);
    }
}

impl Default for PurchaseRequestsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_purchase_requests_view_model() -> PurchaseRequestsViewModel {
    match use_context::<PurchaseRequestsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = PurchaseRequestsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
