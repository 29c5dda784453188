//! State shared by every list page: the current filter, the load state of the
//! list, and the prompt/notice pair that drives row mutations.
//!
//! Loads are tagged with a generation ticket so that only the most recent
//! request is applied when filter changes overlap.

use crate::api::ApiError;
use leptos::*;
use std::{future::Future, pin::Pin, rc::Rc};

pub type LocalFuture<T> = Pin<Box<dyn Future<Output = T>>>;
pub type ListLoader<T, F> = Rc<dyn Fn(F) -> LocalFuture<Result<Vec<T>, ApiError>>>;
pub type MutationHandler = Rc<dyn Fn(MutationRequest) -> LocalFuture<Result<(), ApiError>>>;

pub fn list_loader<T, F, Fut>(load: impl Fn(F) -> Fut + 'static) -> ListLoader<T, F>
where
    T: 'static,
    F: 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    Rc::new(move |filter: F| -> LocalFuture<Result<Vec<T>, ApiError>> { Box::pin(load(filter)) })
}

pub fn mutation_handler<Fut>(run: impl Fn(MutationRequest) -> Fut + 'static) -> MutationHandler
where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    Rc::new(move |request: MutationRequest| -> LocalFuture<Result<(), ApiError>> {
        Box::pin(run(request))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T: Clone> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn items(&self) -> Vec<T> {
        match self {
            LoadState::Loaded(items) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<ApiError> {
        match self {
            LoadState::Failed(err) => Some(err.clone()),
            _ => None,
        }
    }

    /// True only for a successful load that returned no rows.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, LoadState::Loaded(items) if items.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Approve,
    Reject,
    Resolve,
    Escalate,
}

impl MutationKind {
    pub fn verb(self) -> &'static str {
        match self {
            MutationKind::Approve => "Approve",
            MutationKind::Reject => "Reject",
            MutationKind::Resolve => "Resolve",
            MutationKind::Escalate => "Escalate",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            MutationKind::Approve => "approved",
            MutationKind::Reject => "rejected",
            MutationKind::Resolve => "resolved",
            MutationKind::Escalate => "escalated",
        }
    }

    pub fn input_label(self) -> &'static str {
        match self {
            MutationKind::Approve => "Approval comments",
            MutationKind::Reject => "Rejection reason",
            MutationKind::Resolve => "Resolution",
            MutationKind::Escalate => "Escalation reason",
        }
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, MutationKind::Reject | MutationKind::Escalate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPrompt {
    pub target_id: String,
    pub kind: MutationKind,
}

impl PendingPrompt {
    pub fn title(&self) -> String {
        format!("{} {}", self.kind.verb(), self.target_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub target_id: String,
    pub kind: MutationKind,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Cancelled,
    Succeeded,
    Failed(ApiError),
}

/// Trimmed prompt text, or `None` when the user entered nothing.
pub fn prompt_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Clone, Copy)]
pub struct FetchGeneration(StoredValue<u64>);

impl FetchGeneration {
    pub fn new() -> Self {
        Self(store_value(0))
    }

    pub fn begin(&self) -> u64 {
        self.0.update_value(|current| *current += 1);
        self.0.get_value()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get_value() == ticket
    }
}

impl Default for FetchGeneration {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a finished load if its ticket is still the latest one issued.
pub fn apply_load_result<T: 'static>(
    state: RwSignal<LoadState<T>>,
    generation: FetchGeneration,
    ticket: u64,
    result: Result<Vec<T>, ApiError>,
) -> bool {
    if !generation.is_current(ticket) {
        log::debug!("Discarding stale list response (ticket {})", ticket);
        return false;
    }
    match result {
        Ok(items) => state.set(LoadState::Loaded(items)),
        Err(err) => state.set(LoadState::Failed(err)),
    }
    true
}

pub struct ListController<T: 'static, F: 'static> {
    pub filter: RwSignal<F>,
    pub state: RwSignal<LoadState<T>>,
    pub prompt: RwSignal<Option<PendingPrompt>>,
    pub notice: RwSignal<Option<Notice>>,
    pub mutation_pending: RwSignal<bool>,
    generation: FetchGeneration,
    loader: StoredValue<ListLoader<T, F>>,
    mutation: StoredValue<Option<MutationHandler>>,
}

impl<T: 'static, F: 'static> Clone for ListController<T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, F: 'static> Copy for ListController<T, F> {}

impl<T, F> ListController<T, F>
where
    T: Clone + 'static,
    F: Clone + PartialEq + 'static,
{
    pub fn new(initial_filter: F, loader: ListLoader<T, F>) -> Self {
        Self {
            filter: create_rw_signal(initial_filter),
            state: create_rw_signal(LoadState::Idle),
            prompt: create_rw_signal(None),
            notice: create_rw_signal(None),
            mutation_pending: create_rw_signal(false),
            generation: FetchGeneration::new(),
            loader: store_value(loader),
            mutation: store_value(None),
        }
    }

    pub fn with_mutations(self, handler: MutationHandler) -> Self {
        self.mutation.set_value(Some(handler));
        self
    }

    /// Loads on mount and again whenever the filter changes.
    pub fn mount(&self) {
        let controller = *self;
        create_effect(move |_| {
            let filter = controller.filter.get();
            spawn_local(async move {
                controller.load(filter).await;
            });
        });
    }

    pub fn set_filter(&self, filter: F) {
        if self.filter.get_untracked() != filter {
            self.filter.set(filter);
        }
    }

    pub async fn refresh(&self) -> bool {
        self.load(self.filter.get_untracked()).await
    }

    /// Issues one list call for `filter`. Returns whether the result was
    /// applied (false when a newer load superseded it).
    pub async fn load(&self, filter: F) -> bool {
        let ticket = self.generation.begin();
        self.state.set(LoadState::Loading);
        let loader = self.loader.get_value();
        let result = loader(filter).await;
        if let Err(err) = &result {
            log::warn!("List load failed [{}]: {}", err.code, err.error);
        }
        apply_load_result(self.state, self.generation, ticket, result)
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(LoadState::items))
    }

    pub fn request_mutation(&self, target_id: impl Into<String>, kind: MutationKind) {
        self.notice.set(None);
        self.prompt.set(Some(PendingPrompt {
            target_id: target_id.into(),
            kind,
        }));
    }

    pub fn cancel_prompt(&self) {
        self.prompt.set(None);
    }

    /// Closes the prompt and, for non-blank input, runs the mutation. Blank
    /// input is a cancel and makes no network call.
    pub async fn submit_prompt(&self, input: &str) -> MutationOutcome {
        let Some(pending) = self.prompt.get_untracked() else {
            return MutationOutcome::Cancelled;
        };
        self.prompt.set(None);
        let Some(input) = prompt_input(input) else {
            return MutationOutcome::Cancelled;
        };
        let Some(handler) = self.mutation.get_value() else {
            return self
                .finish_mutation(Err(ApiError::unknown("This list has no row actions")), "")
                .await;
        };
        let request = MutationRequest {
            target_id: pending.target_id.clone(),
            kind: pending.kind,
            input,
        };
        let success = format!("{} {}", pending.target_id, pending.kind.past_tense());
        self.run(handler(request), success).await
    }

    /// Runs any mutation future, records its notice and refetches the list
    /// whatever the outcome.
    pub async fn run<Fut>(&self, mutation: Fut, success_message: impl Into<String>) -> MutationOutcome
    where
        Fut: Future<Output = Result<(), ApiError>>,
    {
        self.mutation_pending.set(true);
        let result = mutation.await;
        self.mutation_pending.set(false);
        self.finish_mutation(result, &success_message.into()).await
    }

    async fn finish_mutation(&self, result: Result<(), ApiError>, success: &str) -> MutationOutcome {
        let outcome = match result {
            Ok(()) => {
                self.notice.set(Some(Notice::Success(success.to_string())));
                MutationOutcome::Succeeded
            }
            Err(err) => {
                log::error!("Mutation failed [{}]: {}", err.code, err.error);
                self.notice.set(Some(Notice::Error(err.clone())));
                MutationOutcome::Failed(err)
            }
        };
        self.refresh().await;
        outcome
    }

    pub fn submit_callback(&self) -> Callback<String> {
        let controller = *self;
        Callback::new(move |input: String| {
            spawn_local(async move {
                controller.submit_prompt(&input).await;
            });
        })
    }

    pub fn cancel_callback(&self) -> Callback<()> {
        let controller = *self;
        Callback::new(move |_| controller.cancel_prompt())
    }
}
