use crate::api::ApiError;
use crate::components::{
    error::InlineErrorMessage,
    layout::LoadingSpinner,
    status_badge::{approval_status_tone, exception_status_tone, pr_status_tone, severity_tone, StatusBadge},
};
use crate::pages::purchase_requests::utils::{DetailState, PrDetail};
use crate::utils::format::{format_date, format_optional_inr, or_dash};
use leptos::*;

#[component]
pub fn PurchaseRequestDetail(detail: RwSignal<DetailState>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || detail.with(DetailState::is_open)>
            <section class="bg-white shadow rounded-lg p-6 mt-6" aria-label="Purchase request detail">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-medium text-gray-900">
                        {move || detail.with(|state| state.target().unwrap_or_default().to_string())}
                    </h3>
                    <button
                        type="button"
                        class="text-sm text-gray-500 hover:text-gray-700"
                        on:click=move |_| on_close.call(())
                    >
                        "Close"
                    </button>
                </div>
                {move || match detail.get() {
                    DetailState::Closed => ().into_view(),
                    DetailState::Loading(_) => view! { <LoadingSpinner /> }.into_view(),
                    DetailState::Failed(id, err) => failure_view(id, err),
                    DetailState::Loaded(loaded) => view! { <DetailBody detail=*loaded /> }.into_view(),
                }}
            </section>
        </Show>
    }
}

fn failure_view(id: String, err: ApiError) -> View {
    let err = if err.is_not_found() {
        ApiError {
            error: format!("Purchase request {} was not found.", id),
            ..err
        }
    } else {
        err
    };
    view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view()
}

#[component]
fn DetailBody(detail: PrDetail) -> impl IntoView {
    let PrDetail {
        request,
        approvals,
        exceptions,
    } = detail;

    view! {
        <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 text-sm">
            <div>
                <dt class="text-gray-500">"Description"</dt>
                <dd class="text-gray-900">{request.description.clone()}</dd>
            </div>
            <div>
                <dt class="text-gray-500">"Status"</dt>
                <dd>
                    <StatusBadge status=request.status.as_str().to_string() tone=pr_status_tone(&request.status) />
                </dd>
            </div>
            <div>
                <dt class="text-gray-500">"Category"</dt>
                <dd class="text-gray-900">{or_dash(request.category.as_deref())}</dd>
            </div>
            <div>
                <dt class="text-gray-500">"Department"</dt>
                <dd class="text-gray-900">{or_dash(request.department.as_deref())}</dd>
            </div>
            <div>
                <dt class="text-gray-500">"Estimated Value"</dt>
                <dd class="text-gray-900">{format_optional_inr(request.estimated_value_inr)}</dd>
            </div>
            <div>
                <dt class="text-gray-500">"Required By"</dt>
                <dd class="text-gray-900">{format_date(request.required_by_date.as_deref())}</dd>
            </div>
            <div class="sm:col-span-2">
                <dt class="text-gray-500">"Justification"</dt>
                <dd class="text-gray-900">{or_dash(request.justification.as_deref())}</dd>
            </div>
        </dl>

        <h4 class="mt-6 mb-2 text-sm font-semibold text-gray-700">"Approval Trail"</h4>
        {if approvals.is_empty() {
            view! { <p class="text-sm text-gray-500">"No approval steps yet."</p> }.into_view()
        } else {
            view! {
                <ol class="space-y-2">
                    {approvals
                        .into_iter()
                        .map(|approval| view! {
                            <li class="flex items-center gap-3 text-sm">
                                <span class="text-gray-500">
                                    {format!("Level {}", approval.approval_level.unwrap_or_default())}
                                </span>
                                <span>{or_dash(approval.approver_name.as_deref())}</span>
                                <StatusBadge
                                    status=approval.status.as_str().to_string()
                                    tone=approval_status_tone(&approval.status)
                                />
                                <span class="text-gray-500">{approval.comments.clone().unwrap_or_default()}</span>
                            </li>
                        })
                        .collect_view()}
                </ol>
            }
            .into_view()
        }}

        <h4 class="mt-6 mb-2 text-sm font-semibold text-gray-700">"Exceptions"</h4>
        {if exceptions.is_empty() {
            view! { <p class="text-sm text-gray-500">"No exceptions raised."</p> }.into_view()
        } else {
            view! {
                <ul class="space-y-2">
                    {exceptions
                        .into_iter()
                        .map(|record| view! {
                            <li class="flex items-center gap-3 text-sm">
                                <span class="font-medium">{record.exception_id.clone()}</span>
                                <span>{record.description.clone()}</span>
                                <StatusBadge status=record.severity.as_str().to_string() tone=severity_tone(&record.severity) />
                                <StatusBadge status=record.status.as_str().to_string() tone=exception_status_tone(&record.status) />
                            </li>
                        })
                        .collect_view()}
                </ul>
            }
            .into_view()
        }}
    }
}
