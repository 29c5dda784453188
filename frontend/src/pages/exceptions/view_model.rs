use crate::api::{ApiClient, ApiError, ExceptionRecord, Severity};
use crate::pages::exceptions::repository::ExceptionsRepository;
use crate::state::{
    list_page::{list_loader, mutation_handler, ListController, MutationKind, MutationRequest},
    session::{require_identity, use_session},
};
use leptos::*;

/// `None` lists every severity.
pub type SeverityFilter = Option<Severity>;

#[derive(Clone, Copy)]
pub struct ExceptionsViewModel {
    pub list: ListController<ExceptionRecord, SeverityFilter>,
}

impl ExceptionsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = ExceptionsRepository::new(api);
        let (session, _) = use_session();

        let list_repo = repository.clone();
        let loader = list_loader(move |severity: SeverityFilter| {
            let repo = list_repo.clone();
            async move { repo.list(severity.as_ref()).await }
        });

        let handler = mutation_handler(move |request: MutationRequest| {
            let repo = repository.clone();
            let actor = require_identity(&session.get_untracked());
            async move {
                let actor = actor?;
                match request.kind {
                    MutationKind::Resolve => {
                        repo.resolve(&request.target_id, &request.input, &actor)
                            .await
                    }
                    MutationKind::Escalate => {
                        repo.escalate(&request.target_id, &request.input, &actor)
                            .await
                    }
                    other => Err(ApiError::validation(format!(
                        "{} is not available for exceptions",
                        other.verb()
                    ))),
                }
            }
        });

        Self {
            list: ListController::new(None, loader).with_mutations(handler),
        }
    }
}

impl Default for ExceptionsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_exceptions_view_model() -> ExceptionsViewModel {
    match use_context::<ExceptionsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ExceptionsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

/// Maps the filter `<select>` value back to a filter; anything unrecognised
/// means "all".
pub fn parse_severity_filter(value: &str) -> SeverityFilter {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("ALL") {
        return None;
    }
    match Severity::from(value.to_ascii_uppercase()) {
        Severity::Other(_) => None,
        known => Some(known),
    }
}
