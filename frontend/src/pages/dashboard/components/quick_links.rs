use leptos::*;

const LINKS: &[(&str, &str, &str)] = &[
    ("/purchase-requests", "Raise a purchase request", "Create and track purchase requests"),
    ("/approvals", "Review approvals", "Decide requests waiting at your level"),
    ("/exceptions", "Work exceptions", "Resolve or escalate compliance flags"),
    ("/rules", "Manage rules", "Maintain the compliance rule set"),
];

#[component]
pub fn QuickLinks() -> impl IntoView {
    view! {
        <section class="bg-white shadow rounded-lg p-6">
            <h3 class="text-base font-semibold text-gray-900 mb-4">"Quick Actions"</h3>
            <div class="grid grid-cols-1 gap-3 sm:grid-cols-2">
                {LINKS
                    .iter()
                    .map(|(href, title, hint)| view! {
                        <a href=*href class="block rounded-md border border-gray-200 p-4 hover:bg-gray-50">
                            <p class="text-sm font-medium text-blue-700">{*title}</p>
                            <p class="text-xs text-gray-500">{*hint}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
