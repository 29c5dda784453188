use crate::api::PrStatus;
use crate::components::{
    common::{Button, ButtonVariant},
    layout::{Layout, PageHeader},
    list_status::{ListStatus, MutationPrompt, NoticeBanner},
};
use crate::pages::purchase_requests::{
    components::{CreatePurchaseRequestForm, PurchaseRequestDetail, PurchaseRequestsTable},
    view_model::{use_purchase_requests_view_model, PurchaseRequestsViewModel},
};
use crate::state::list_page::MutationKind;
use leptos::*;

#[component]
pub fn PurchaseRequestsPage() -> impl IntoView {
    let vm = use_purchase_requests_view_model();
    vm.list.mount();

    let on_view = Callback::new(move |pr_id: String| {
        spawn_local(async move {
            vm.open_detail(pr_id).await;
        });
    });
    let on_action = Callback::new(move |(id, kind): (String, MutationKind)| {
        vm.list.request_mutation(id, kind)
    });
    let on_submit = Callback::new(move |_: ()| {
        spawn_local(async move {
            vm.submit_create().await;
        });
    });

    view! {
        <Layout>
            <PageHeader title="Purchase Requests" subtitle="Raise purchase requests and follow them through approval.">
                <Button variant=ButtonVariant::Primary on:click=move |_| vm.toggle_form()>
                    {move || if vm.show_form.get() { "Close Form" } else { "New Purchase Request" }}
                </Button>
            </PageHeader>
            <NoticeBanner notice=vm.list.notice />
            <Show when=move || vm.show_form.get()>
                <CreatePurchaseRequestForm
                    form=vm.form
                    error=vm.form_error
                    pending=vm.list.mutation_pending
                    on_submit=on_submit
                    on_cancel=Callback::new(move |_| vm.toggle_form())
                />
            </Show>
            <StatusFilter vm=vm />
            <PurchaseRequestsTable rows=vm.list.items() on_view=on_view on_action=on_action />
            <ListStatus
                state=vm.list.state
                empty_title="No purchase requests"
                empty_description="Nothing matches the selected status."
            />
            <PurchaseRequestDetail detail=vm.detail on_close=Callback::new(move |_| vm.close_detail()) />
            <MutationPrompt controller=vm.list />
        </Layout>
    }
}

#[component]
fn StatusFilter(vm: PurchaseRequestsViewModel) -> impl IntoView {
    let filter = vm.list.filter;
    let on_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let status = (!value.is_empty()).then(|| PrStatus::from(value));
        vm.list.set_filter(status);
    };

    view! {
        <div class="flex items-center gap-2 mb-4">
            <label class="text-sm font-medium text-gray-700" for="pr-status">"Status"</label>
            <select id="pr-status" class="border border-gray-300 rounded-md px-2 py-1 text-sm" on:change=on_change>
                <option value="" selected=move || filter.with(Option::is_none)>"All"</option>
                {PrStatus::known()
                    .into_iter()
                    .map(|status| {
                        let value = status.as_str().to_string();
                        let label = status.label();
                        view! {
                            <option
                                value=value
                                selected=move || filter.with(|current| current.as_ref() == Some(&status))
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use crate::state::list_page::LoadState;
    use crate::test_support::helpers::{ops_user, provide_session};
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn page_renders_loaded_rows() {
        let server = MockServer::start();
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            provide_session(Some(ops_user()));
            let vm = use_purchase_requests_view_model();
            let row = serde_json::from_value(json!({
                "prId": "PR-1",
                "description": "5 Dell Laptops",
                "status": "PENDING_APPROVAL",
                "estimatedValueInr": 250000
            }))
            .unwrap();
            vm.list.state.set(LoadState::Loaded(vec![row]));
            view! { <PurchaseRequestsPage /> }
        });
        assert!(html.contains("PR-1"));
        assert!(html.contains("PENDING APPROVAL"));
        assert!(html.contains("₹250,000"));
        assert!(!html.contains("No purchase requests"));
    }

    #[tokio::test]
    async fn server_error_renders_error_panel_not_empty_state() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/pr");
            then.status(500).json_body(json!({ "error": "Database unavailable" }));
        });
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        provide_session(Some(ops_user()));
        let vm = use_purchase_requests_view_model();
        vm.list.refresh().await;

        leptos_reactive::suppress_resource_load(true);
        let html = view! { <PurchaseRequestsPage /> }
            .into_view()
            .render_to_string()
            .to_string();
        leptos_reactive::suppress_resource_load(false);

        assert!(html.contains("Database unavailable"));
        assert!(html.contains("data-state=\"failed\""));
        assert!(!html.contains("No purchase requests"));
        runtime.dispose();
    }
}
