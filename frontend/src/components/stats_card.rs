use leptos::*;

#[component]
pub fn StatsCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] accent: Option<String>,
) -> impl IntoView {
    let accent = accent.unwrap_or_else(|| "border-blue-500".to_string());
    view! {
        <div class=format!("bg-white overflow-hidden shadow rounded-lg border-l-4 {}", accent)>
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-gray-500 truncate">{label}</dt>
                <dd class="mt-1 text-2xl font-semibold text-gray-900">{value}</dd>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stats_card_renders_label_and_value() {
        let html = render_to_string(move || {
            view! { <StatsCard label="Pending Approvals" value="4" accent="border-yellow-500" /> }
        });
        assert!(html.contains("Pending Approvals"));
        assert!(html.contains(">4<"));
        assert!(html.contains("border-yellow-500"));
    }
}
