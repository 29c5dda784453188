use crate::api::{Approval, ApprovalStatus};
use crate::components::{
    common::{Button, ButtonVariant},
    layout::{Layout, PageHeader},
    list_status::{ListStatus, MutationPrompt, NoticeBanner},
    status_badge::{approval_status_tone, StatusBadge},
};
use crate::pages::approvals::view_model::{use_approvals_view_model, ApprovalsViewModel};
use crate::state::list_page::MutationKind;
use crate::utils::format::{format_date, or_dash};
use leptos::*;

const TH: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    let vm = use_approvals_view_model();
    vm.list.mount();
    let on_action = Callback::new(move |(id, kind): (String, MutationKind)| {
        vm.list.request_mutation(id, kind)
    });

    view! {
        <Layout>
            <PageHeader title="Approvals" subtitle="Approval steps raised for purchase requests." />
            <NoticeBanner notice=vm.list.notice />
            <StatusFilter vm=vm />
            <ApprovalsTable rows=vm.list.items() on_action=on_action />
            <ListStatus state=vm.list.state empty_title="No approvals match this filter" />
            <MutationPrompt controller=vm.list />
        </Layout>
    }
}

#[component]
fn StatusFilter(vm: ApprovalsViewModel) -> impl IntoView {
    let filter = vm.list.filter;
    view! {
        <div class="flex items-center gap-2 mb-4">
            <label class="text-sm font-medium text-gray-700" for="approval-status">"Status"</label>
            <select
                id="approval-status"
                class="border border-gray-300 rounded-md px-2 py-1 text-sm"
                on:change=move |ev| vm.list.set_filter(ApprovalStatus::from(event_target_value(&ev)))
            >
                {ApprovalsViewModel::status_options()
                    .into_iter()
                    .map(|status| {
                        let value = status.as_str().to_string();
                        let label = status.label();
                        view! {
                            <option value=value selected=move || filter.get() == status>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn ApprovalsTable(
    #[prop(into)] rows: Signal<Vec<Approval>>,
    on_action: Callback<(String, MutationKind)>,
) -> impl IntoView {
    view! {
        <Show when=move || rows.with(|rows| !rows.is_empty())>
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class=TH>"Approval"</th>
                            <th class=TH>"PR"</th>
                            <th class=TH>"Level"</th>
                            <th class=TH>"Approver"</th>
                            <th class=TH>"Status"</th>
                            <th class=TH>"Created"</th>
                            <th class=TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || rows.get()
                            key=|approval| approval.id.clone()
                            children=move |approval: Approval| {
                                let pending = approval.status == ApprovalStatus::Pending;
                                let id = store_value(approval.id.clone());
                                let actions_for = approval.id.clone();
                                view! {
                                    <tr>
                                        <td class=TD>{approval.id.clone()}</td>
                                        <td class=TD>{approval.pr_id.clone()}</td>
                                        <td class=TD>
                                            {approval.approval_level.map(|level| level.to_string()).unwrap_or_else(|| "-".into())}
                                        </td>
                                        <td class=TD>{or_dash(approval.approver_name.as_deref())}</td>
                                        <td class=TD>
                                            <StatusBadge
                                                status=approval.status.as_str().to_string()
                                                tone=approval_status_tone(&approval.status)
                                            />
                                        </td>
                                        <td class=TD>{format_date(approval.created_at.as_deref())}</td>
                                        <td class=TD>
                                            <Show when=move || pending>
                                                <div class="flex gap-2" data-actions=actions_for.clone()>
                                                    <Button
                                                        variant=ButtonVariant::Success
                                                        on:click=move |_| on_action.call((id.get_value(), MutationKind::Approve))
                                                    >
                                                        "Approve"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Danger
                                                        on:click=move |_| on_action.call((id.get_value(), MutationKind::Reject))
                                                    >
                                                        "Reject"
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{ops_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    fn approval(id: &str, status: ApprovalStatus) -> Approval {
        Approval {
            id: id.into(),
            pr_id: "PR-1".into(),
            approval_level: Some(1),
            status,
            approver_name: Some("CFO".into()),
            comments: None,
            created_at: Some("2025-11-20T10:15:00".into()),
        }
    }

    #[test]
    fn table_offers_decisions_only_for_pending_rows() {
        let html = render_to_string(move || {
            let rows = vec![
                approval("A-7", ApprovalStatus::Pending),
                approval("A-8", ApprovalStatus::Approved),
            ];
            view! {
                <ApprovalsTable
                    rows=Signal::derive(move || rows.clone())
                    on_action=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("A-7"));
        assert!(html.contains("A-8"));
        assert!(html.contains("2025-11-20"));
        assert_eq!(html.matches("data-actions=").count(), 1);
        assert!(html.contains("data-actions=\"A-7\""));
        assert!(!html.contains("data-actions=\"A-8\""));
    }

    #[test]
    fn approvals_page_renders_filter_and_header() {
        let server = MockServer::start();
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            provide_session(Some(ops_user()));
            view! { <ApprovalsPage /> }
        });
        assert!(html.contains("Approvals"));
        assert!(html.contains("PENDING"));
        assert!(html.contains("REJECTED"));
    }
}
