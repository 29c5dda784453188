use crate::api::{ExceptionRecord, ExceptionStatus, Severity};
use crate::components::{
    common::{Button, ButtonVariant},
    layout::{Layout, PageHeader},
    list_status::{ListStatus, MutationPrompt, NoticeBanner},
    status_badge::{exception_status_tone, severity_tone, StatusBadge},
};
use crate::pages::exceptions::view_model::{
    parse_severity_filter, use_exceptions_view_model, ExceptionsViewModel,
};
use crate::state::list_page::MutationKind;
use crate::utils::format::{format_date, or_dash};
use leptos::*;

const TH: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD: &str = "px-6 py-4 text-sm text-gray-900";

#[component]
pub fn ExceptionsPage() -> impl IntoView {
    let vm = use_exceptions_view_model();
    vm.list.mount();
    let on_action = Callback::new(move |(id, kind): (String, MutationKind)| {
        vm.list.request_mutation(id, kind)
    });

    view! {
        <Layout>
            <PageHeader title="Exceptions" subtitle="Compliance exceptions raised against purchase requests." />
            <NoticeBanner notice=vm.list.notice />
            <SeverityFilter vm=vm />
            <ExceptionsTable rows=vm.list.items() on_action=on_action />
            <ListStatus
                state=vm.list.state
                empty_title="No exceptions"
                empty_description="Nothing is flagged at this severity."
            />
            <MutationPrompt controller=vm.list />
        </Layout>
    }
}

#[component]
fn SeverityFilter(vm: ExceptionsViewModel) -> impl IntoView {
    let filter = vm.list.filter;
    let options = std::iter::once(("ALL".to_string(), None)).chain(
        [Severity::High, Severity::Medium, Severity::Low]
            .into_iter()
            .map(|severity| (severity.as_str().to_string(), Some(severity))),
    );

    view! {
        <div class="flex flex-wrap gap-2 mb-4" role="group" aria-label="Severity">
            {options
                .map(|(label, severity)| {
                    let value = label.clone();
                    let severity = store_value(severity);
                    let active = move || filter.with(|current| *current == severity.get_value());
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if active() {
                                    "px-3 py-1 rounded-full text-sm bg-blue-600 text-white"
                                } else {
                                    "px-3 py-1 rounded-full text-sm bg-white border border-gray-300 text-gray-700"
                                }
                            }
                            aria-pressed=move || active().to_string()
                            on:click=move |_| vm.list.set_filter(parse_severity_filter(&value))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ExceptionsTable(
    #[prop(into)] rows: Signal<Vec<ExceptionRecord>>,
    on_action: Callback<(String, MutationKind)>,
) -> impl IntoView {
    view! {
        <Show when=move || rows.with(|rows| !rows.is_empty())>
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class=TH>"Exception"</th>
                            <th class=TH>"PR"</th>
                            <th class=TH>"Description"</th>
                            <th class=TH>"Severity"</th>
                            <th class=TH>"Status"</th>
                            <th class=TH>"Assigned To"</th>
                            <th class=TH>"Raised"</th>
                            <th class=TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || rows.get()
                            key=|record| record.exception_id.clone()
                            children=move |record: ExceptionRecord| {
                                let open = record.status == ExceptionStatus::Open;
                                let id = store_value(record.exception_id.clone());
                                let actions_for = record.exception_id.clone();
                                view! {
                                    <tr>
                                        <td class=TD>{record.exception_id.clone()}</td>
                                        <td class=TD>{or_dash(record.pr_id.as_deref())}</td>
                                        <td class=TD>{record.description.clone()}</td>
                                        <td class=TD>
                                            <StatusBadge
                                                status=record.severity.as_str().to_string()
                                                tone=severity_tone(&record.severity)
                                            />
                                        </td>
                                        <td class=TD>
                                            <StatusBadge
                                                status=record.status.as_str().to_string()
                                                tone=exception_status_tone(&record.status)
                                            />
                                        </td>
                                        <td class=TD>{or_dash(record.assigned_to.as_deref())}</td>
                                        <td class=TD>{format_date(record.created_at.as_deref())}</td>
                                        <td class=TD>
                                            <Show when=move || open>
                                                <div class="flex gap-2" data-actions=actions_for.clone()>
                                                    <Button
                                                        variant=ButtonVariant::Success
                                                        on:click=move |_| on_action.call((id.get_value(), MutationKind::Resolve))
                                                    >
                                                        "Resolve"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Danger
                                                        on:click=move |_| on_action.call((id.get_value(), MutationKind::Escalate))
                                                    >
                                                        "Escalate"
                                                    </Button>
                                                </div>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
