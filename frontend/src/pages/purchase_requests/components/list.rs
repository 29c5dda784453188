use crate::api::{PrStatus, PurchaseRequest};
use crate::components::{
    common::{Button, ButtonVariant},
    status_badge::{pr_status_tone, StatusBadge},
};
use crate::state::list_page::MutationKind;
use crate::utils::format::{format_date, format_optional_inr, or_dash};
use leptos::*;

const TH: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-900";

#[component]
pub fn PurchaseRequestsTable(
    #[prop(into)] rows: Signal<Vec<PurchaseRequest>>,
    on_view: Callback<String>,
    on_action: Callback<(String, MutationKind)>,
) -> impl IntoView {
    view! {
        <Show when=move || rows.with(|rows| !rows.is_empty())>
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class=TH>"PR ID"</th>
                            <th class=TH>"Description"</th>
                            <th class=TH>"Value"</th>
                            <th class=TH>"Status"</th>
                            <th class=TH>"Created By"</th>
                            <th class=TH>"Created At"</th>
                            <th class=TH></th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || rows.get()
                            key=|pr| pr.pr_id.clone()
                            children=move |pr: PurchaseRequest| {
                                let awaiting_decision = pr.status == PrStatus::PendingApproval;
                                let id = store_value(pr.pr_id.clone());
                                view! {
                                    <tr>
                                        <td class=TD>{pr.pr_id.clone()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-900">{pr.description.clone()}</td>
                                        <td class=TD>{format_optional_inr(pr.estimated_value_inr)}</td>
                                        <td class=TD>
                                            <StatusBadge
                                                status=pr.status.as_str().to_string()
                                                tone=pr_status_tone(&pr.status)
                                            />
                                        </td>
                                        <td class=TD>{or_dash(pr.created_by.as_deref())}</td>
                                        <td class=TD>{format_date(pr.created_at.as_deref())}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                            <div class="flex justify-end gap-2">
                                                <Button
                                                    variant=ButtonVariant::Link
                                                    on:click=move |_| on_view.call(id.get_value())
                                                >
                                                    "View"
                                                </Button>
                                                <Show when=move || awaiting_decision>
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
                                                </Show>
                                            </div>
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
    use crate::test_support::ssr::render_to_string;

    fn pr(id: &str, status: PrStatus, value: Option<f64>) -> PurchaseRequest {
        PurchaseRequest {
            pr_id: id.into(),
            description: "5 Dell Laptops".into(),
            category: Some("IT Hardware".into()),
            estimated_value_inr: value,
            department: Some("IT".into()),
            status,
            created_by: Some("Jane".into()),
            created_at: Some("2025-11-20T10:15:00".into()),
            justification: None,
            required_by_date: None,
        }
    }

    fn render(rows: Vec<PurchaseRequest>) -> String {
        render_to_string(move || {
            view! {
                <PurchaseRequestsTable
                    rows=Signal::derive(move || rows.clone())
                    on_view=Callback::new(|_| {})
                    on_action=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn pending_row_renders_badge_value_and_decisions() {
        let html = render(vec![pr("PR-1", PrStatus::PendingApproval, Some(250000.0))]);
        assert!(html.contains("PR-1"));
        assert!(html.contains("PENDING APPROVAL"));
        assert!(html.contains("₹250,000"));
        assert!(html.contains("2025-11-20"));
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
    }

    #[test]
    fn decided_rows_only_offer_view() {
        let html = render(vec![
            pr("PR-2", PrStatus::Approved, None),
            pr("PR-3", PrStatus::Other("ON_HOLD".into()), Some(1000.5)),
        ]);
        assert_eq!(html.matches("View").count(), 2);
        assert!(!html.contains("Approve"));
        assert!(html.contains("ON HOLD"));
        assert!(html.contains("₹1,000.5"));
    }

    #[test]
    fn empty_rows_render_no_table() {
        let html = render(vec![]);
        assert!(!html.contains("<table"));
    }
}
