use crate::api::Rule;
use crate::components::{
    common::{Button, ButtonVariant},
    status_badge::{severity_tone, BadgeTone, StatusBadge},
};
use crate::utils::format::or_dash;
use leptos::*;

const TH: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD: &str = "px-6 py-4 text-sm text-gray-900";

#[component]
pub fn RulesTable(
    #[prop(into)] rows: Signal<Vec<Rule>>,
    on_toggle: Callback<Rule>,
    on_delete: Callback<Rule>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || rows.with(|rows| !rows.is_empty())>
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class=TH>"Rule ID"</th>
                            <th class=TH>"Description"</th>
                            <th class=TH>"Category"</th>
                            <th class=TH>"Condition"</th>
                            <th class=TH>"Severity"</th>
                            <th class=TH>"Owner"</th>
                            <th class=TH>"Status"</th>
                            <th class=TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || rows.get()
                            key=|rule| (rule.id.clone(), rule.active)
                            children=move |rule: Rule| {
                                let (status, tone) = if rule.active {
                                    ("ACTIVE", BadgeTone::Success)
                                } else {
                                    ("INACTIVE", BadgeTone::Neutral)
                                };
                                let toggle_label = if rule.active { "Deactivate" } else { "Activate" };
                                let target = store_value(rule.clone());
                                view! {
                                    <tr>
                                        <td class=TD>
                                            <span class="font-semibold">{rule.rule_id.clone()}</span>
                                        </td>
                                        <td class=TD>{rule.description.clone()}</td>
                                        <td class=TD>{or_dash(rule.category.as_deref())}</td>
                                        <td class=TD>
                                            <code class="rounded bg-gray-100 px-1.5 py-0.5 text-xs">{or_dash(Some(&rule.condition()))}</code>
                                        </td>
                                        <td class=TD>
                                            <StatusBadge status=rule.severity.as_str().to_string() tone=severity_tone(&rule.severity) />
                                        </td>
                                        <td class=TD>{rule.created_by.clone().unwrap_or_else(|| "SYSTEM".into())}</td>
                                        <td class=TD>
                                            <StatusBadge status=status tone=tone />
                                        </td>
                                        <td class=TD>
                                            <div class="flex gap-2">
                                                <Button
                                                    variant=ButtonVariant::Secondary
                                                    disabled=busy
                                                    on:click=move |_| on_toggle.call(target.get_value())
                                                >
                                                    {toggle_label}
                                                </Button>
                                                <Button
                                                    variant=ButtonVariant::Danger
                                                    disabled=busy
                                                    on:click=move |_| on_delete.call(target.get_value())
                                                >
                                                    "Delete"
                                                </Button>
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
