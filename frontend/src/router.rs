use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::layout::NAV_LINKS,
    pages::{ApprovalsPage, DashboardPage, ExceptionsPage, PurchaseRequestsPage, RulesPage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/purchase-requests",
    "/approvals",
    "/exceptions",
    "/rules",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Procurement Console"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/purchase-requests" view=PurchaseRequestsPage/>
                    <Route path="/approvals" view=ApprovalsPage/>
                    <Route path="/exceptions" view=ExceptionsPage/>
                    <Route path="/rules" view=RulesPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <crate::components::layout::Layout>
            <crate::components::empty_state::EmptyState
                title="Page not found"
                description="Use the navigation above to pick a section."
            />
        </crate::components::layout::Layout>
    }
}
