use crate::components::layout::{Layout, PageHeader};
use crate::pages::dashboard::{
    components::{QuickLinks, SummarySection},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Layout>
            <PageHeader title="Dashboard" subtitle="Procurement activity at a glance." />
            <div class="space-y-6">
                <SummarySection summary=vm.summary() on_retry=Callback::new(move |_| vm.refresh()) />
                <QuickLinks />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{ops_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_page_renders_quick_links_while_loading() {
        let server = MockServer::start();
        let base_url = server.url("/api");
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url(base_url.clone()));
            provide_session(Some(ops_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Quick Actions"));
        assert!(html.contains("Raise a purchase request"));
        assert!(html.contains("aria-busy"));
        assert_eq!(server.total_hits(), 0);
    }
}
