use crate::api::{ApiError, DashboardSummary};
use crate::components::{error::InlineErrorMessage, layout::LoadingSpinner, stats_card::StatsCard};
use crate::utils::format::format_inr;
use leptos::*;

#[component]
pub fn SummarySection(
    #[prop(into)] summary: Signal<Option<Result<DashboardSummary, ApiError>>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <section class="space-y-4">
            {move || match summary.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! {
                    <div>
                        <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                        {on_retry.map(|retry| view! {
                            <button
                                type="button"
                                class="text-sm text-blue-600 hover:underline"
                                on:click=move |_| retry.call(())
                            >
                                "Retry"
                            </button>
                        })}
                    </div>
                }
                .into_view(),
                Some(Ok(data)) => view! {
                    <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <StatsCard label="Total PRs" value=data.total_prs.to_string() />
                        <StatsCard
                            label="Pending Approvals"
                            value=data.pending_approvals.to_string()
                            accent="border-yellow-500"
                        />
                        <StatsCard label="Approved" value=data.approved.to_string() accent="border-green-500" />
                        <StatsCard label="Drafts" value=data.drafts.to_string() accent="border-gray-400" />
                        <StatsCard
                            label="Active Exceptions"
                            value=data.active_exceptions.to_string()
                            accent="border-red-500"
                        />
                        <StatsCard label="Total Value" value=format_inr(data.total_value) accent="border-indigo-500" />
                    </dl>
                }
                .into_view(),
            }}
        </section>
    }
}
