use crate::api::{ApiError, Severity};
use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
};
use crate::pages::purchase_requests::utils::CATEGORIES;
use crate::pages::rules::utils::{RuleFormInput, ALL_CATEGORIES, FIELD_NAMES, OPERATORS};
use leptos::*;

const INPUT: &str = "mt-1 block w-full border border-gray-300 rounded-md shadow-sm px-3 py-2 text-sm";
const LABEL: &str = "block text-sm font-medium text-gray-700";

#[component]
pub fn RuleForm(
    form: RwSignal<RuleFormInput>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let categories = std::iter::once(ALL_CATEGORIES).chain(CATEGORIES.iter().copied());

    view! {
        <form
            class="bg-white shadow rounded-lg p-6 space-y-4 mb-6"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <h3 class="text-lg font-medium text-gray-900">"New Business Rule"</h3>
            <InlineErrorMessage error=error />
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <div>
                    <label class=LABEL for="rule-id">"Rule ID"</label>
                    <input
                        id="rule-id"
                        type="text"
                        placeholder="Assigned automatically when blank"
                        class=INPUT
                        prop:value=move || form.with(|input| input.rule_id.clone())
                        on:input=move |ev| form.update(|input| input.rule_id = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="rule-category">"Category"</label>
                    <select
                        id="rule-category"
                        class=INPUT
                        on:change=move |ev| form.update(|input| input.category = event_target_value(&ev))
                    >
                        {categories
                            .map(|category| view! {
                                <option
                                    value=category
                                    selected=move || form.with(|input| input.category == category)
                                >
                                    {category}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                <div>
                    <label class=LABEL for="rule-field">"Field"</label>
                    <select
                        id="rule-field"
                        class=INPUT
                        on:change=move |ev| form.update(|input| input.field_name = event_target_value(&ev))
                    >
                        {FIELD_NAMES
                            .iter()
                            .map(|(name, label)| view! {
                                <option
                                    value=*name
                                    selected=move || form.with(|input| input.field_name == *name)
                                >
                                    {*label}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=LABEL for="rule-operator">"Operator"</label>
                    <select
                        id="rule-operator"
                        class=INPUT
                        on:change=move |ev| form.update(|input| input.operator = event_target_value(&ev))
                    >
                        {OPERATORS
                            .iter()
                            .map(|op| view! {
                                <option value=*op selected=move || form.with(|input| input.operator == *op)>
                                    {*op}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=LABEL for="rule-value">"Value"</label>
                    <input
                        id="rule-value"
                        type="text"
                        placeholder="100000 or CURRENT_DATE+7"
                        class=INPUT
                        prop:value=move || form.with(|input| input.rule_value.clone())
                        on:input=move |ev| form.update(|input| input.rule_value = event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <label class=LABEL for="rule-description">"Description"</label>
                <input
                    id="rule-description"
                    type="text"
                    class=INPUT
                    prop:value=move || form.with(|input| input.description.clone())
                    on:input=move |ev| form.update(|input| input.description = event_target_value(&ev))
                />
            </div>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                <div>
                    <label class=LABEL for="rule-action">"Action"</label>
                    <input
                        id="rule-action"
                        type="text"
                        placeholder="e.g. REQUIRE_CFO_APPROVAL"
                        class=INPUT
                        prop:value=move || form.with(|input| input.action.clone())
                        on:input=move |ev| form.update(|input| input.action = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="rule-severity">"Severity"</label>
                    <select
                        id="rule-severity"
                        class=INPUT
                        on:change=move |ev| form.update(|input| input.severity = Severity::from(event_target_value(&ev)))
                    >
                        {Severity::known()
                            .into_iter()
                            .map(|severity| {
                                let value = severity.as_str().to_string();
                                view! {
                                    <option
                                        value=value.clone()
                                        selected=move || form.with(|input| input.severity == severity)
                                    >
                                        {value}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <label class="flex items-center gap-2 mt-6 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|input| input.automatable)
                        on:change=move |ev| form.update(|input| input.automatable = event_target_checked(&ev))
                    />
                    "Automatable"
                </label>
            </div>
            <div class="flex justify-end gap-2">
                <Button variant=ButtonVariant::Secondary attr:type="button" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </Button>
                <Button variant=ButtonVariant::Primary attr:type="submit" disabled=pending loading=pending>
                    "Create Rule"
                </Button>
            </div>
        </form>
    }
}
