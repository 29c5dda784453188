use crate::{
    components::{
        dialog::PromptDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
    },
    state::list_page::{ListController, LoadState, Notice, PendingPrompt},
};
use leptos::*;

/// Renders the non-table states of a list: a spinner while loading, an error
/// panel on failure and the empty state for a successful empty result. Each
/// is distinct so a failed load never looks like "no records".
#[component]
pub fn ListStatus<T>(
    state: RwSignal<LoadState<T>>,
    #[prop(into)] empty_title: String,
    #[prop(optional, into)] empty_description: Option<String>,
) -> impl IntoView
where
    T: Clone + 'static,
{
    let error = Signal::derive(move || state.with(LoadState::error));
    let empty_title = store_value(empty_title);
    let empty_description = store_value(empty_description);

    view! {
        <Show when=move || state.with(LoadState::is_loading)>
            <div data-state="loading">
                <LoadingSpinner />
            </div>
        </Show>
        <Show when=move || error.get().is_some()>
            <div data-state="failed">
                <InlineErrorMessage error=error />
            </div>
        </Show>
        <Show when=move || state.with(LoadState::is_empty_result)>
            <EmptyState
                title=empty_title.get_value()
                description=empty_description.get_value().unwrap_or_default()
            />
        </Show>
    }
}

/// Success or failure message left by the last row mutation.
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || match notice.get() {
        Some(Notice::Success(message)) => view! { <SuccessMessage message=message /> }.into_view(),
        Some(Notice::Error(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
        None => ().into_view(),
    }
}

/// The prompt a list controller opens for approve/reject/resolve/escalate.
#[component]
pub fn MutationPrompt<T, F>(controller: ListController<T, F>) -> impl IntoView
where
    T: Clone + 'static,
    F: Clone + PartialEq + 'static,
{
    let prompt = controller.prompt;
    let is_open = Signal::derive(move || prompt.with(Option::is_some));
    let title = Signal::derive(move || {
        prompt.with(|pending| pending.as_ref().map(PendingPrompt::title).unwrap_or_default())
    });
    let label = Signal::derive(move || {
        prompt.with(|pending| {
            pending
                .as_ref()
                .map(|pending| pending.kind.input_label())
                .unwrap_or_default()
                .to_string()
        })
    });
    let submit_label = Signal::derive(move || {
        prompt.with(|pending| {
            pending
                .as_ref()
                .map(|pending| pending.kind.verb())
                .unwrap_or("Submit")
                .to_string()
        })
    });
    let destructive = Signal::derive(move || {
        prompt.with(|pending| pending.as_ref().is_some_and(|pending| pending.kind.is_destructive()))
    });
    let pending = controller.mutation_pending;

    view! {
        <PromptDialog
            is_open=is_open
            title=title
            label=label
            on_submit=controller.submit_callback()
            on_cancel=controller.cancel_callback()
            submit_label=submit_label
            pending=Signal::derive(move || pending.get())
            destructive=destructive
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::ssr::render_to_string;

    fn render_state(state: LoadState<u32>) -> String {
        render_to_string(move || {
            let state = create_rw_signal(state);
            view! { <ListStatus state=state empty_title="No records" /> }
        })
    }

    #[test]
    fn failed_state_renders_error_not_empty_state() {
        let html = render_state(LoadState::Failed(ApiError::server_error(500, "db down")));
        assert!(html.contains("data-state=\"failed\""));
        assert!(html.contains("db down"));
        assert!(!html.contains("No records"));
    }

    #[test]
    fn empty_result_renders_empty_state() {
        let html = render_state(LoadState::Loaded(vec![]));
        assert!(html.contains("No records"));
        assert!(!html.contains("data-state=\"failed\""));
    }

    #[test]
    fn loading_state_renders_spinner_only() {
        let html = render_state(LoadState::Loading);
        assert!(html.contains("data-state=\"loading\""));
        assert!(!html.contains("No records"));
    }

    #[test]
    fn notice_banner_renders_success_and_error() {
        let html = render_to_string(move || {
            let notice = create_rw_signal(Some(Notice::Success("A-7 approved".into())));
            view! { <NoticeBanner notice=notice /> }
        });
        assert!(html.contains("A-7 approved"));

        let html = render_to_string(move || {
            let notice = create_rw_signal(Some(Notice::Error(ApiError::not_found("gone"))));
            view! { <NoticeBanner notice=notice /> }
        });
        assert!(html.contains("gone"));
    }

    #[test]
    fn mutation_prompt_follows_pending_prompt() {
        let html = render_to_string(move || {
            let controller: ListController<u32, ()> = ListController::new(
                (),
                crate::state::list_page::list_loader(|_| async { Ok(vec![]) }),
            );
            controller.request_mutation("A-7", crate::state::list_page::MutationKind::Reject);
            view! { <MutationPrompt controller=controller /> }
        });
        assert!(html.contains("Reject A-7"));
        assert!(html.contains("Rejection reason"));
    }

    #[test]
    fn mutation_prompt_is_hidden_without_pending_prompt() {
        let html = render_to_string(move || {
            let controller: ListController<u32, ()> = ListController::new(
                (),
                crate::state::list_page::list_loader(|_| async { Ok(vec![]) }),
            );
            view! { <MutationPrompt controller=controller /> }
        });
        assert!(!html.contains("textarea"));
    }
}
