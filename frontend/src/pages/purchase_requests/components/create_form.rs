use crate::api::ApiError;
use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
};
use crate::pages::purchase_requests::utils::{CreateFormInput, CATEGORIES};
use leptos::*;

const INPUT: &str = "mt-1 block w-full border border-gray-300 rounded-md shadow-sm px-3 py-2 text-sm focus:ring-blue-500 focus:border-blue-500";
const LABEL: &str = "block text-sm font-medium text-gray-700";

#[component]
pub fn CreatePurchaseRequestForm(
    form: RwSignal<CreateFormInput>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="bg-white shadow rounded-lg p-6 space-y-4 mb-6"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <h3 class="text-lg font-medium text-gray-900">"New Purchase Request"</h3>
            <InlineErrorMessage error=error />
            <div>
                <label class=LABEL for="pr-description">"Description"</label>
                <input
                    id="pr-description"
                    type="text"
                    class=INPUT
                    prop:value=move || form.with(|input| input.description.clone())
                    on:input=move |ev| form.update(|input| input.description = event_target_value(&ev))
                />
            </div>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <div>
                    <label class=LABEL for="pr-category">"Category"</label>
                    <select
                        id="pr-category"
                        class=INPUT
                        on:change=move |ev| form.update(|input| input.category = event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <option
                                        value=*category
                                        selected=move || form.with(|input| input.category == *category)
                                    >
                                        {*category}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class=LABEL for="pr-department">"Department"</label>
                    <input
                        id="pr-department"
                        type="text"
                        class=INPUT
                        prop:value=move || form.with(|input| input.department.clone())
                        on:input=move |ev| form.update(|input| input.department = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="pr-value">"Estimated Value (INR)"</label>
                    <input
                        id="pr-value"
                        type="number"
                        min="0"
                        step="0.01"
                        class=INPUT
                        prop:value=move || form.with(|input| input.estimated_value.clone())
                        on:input=move |ev| form.update(|input| input.estimated_value = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="pr-required-by">"Required By"</label>
                    <input
                        id="pr-required-by"
                        type="date"
                        class=INPUT
                        prop:value=move || form.with(|input| input.required_by_date.clone())
                        on:input=move |ev| form.update(|input| input.required_by_date = event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <label class=LABEL for="pr-justification">"Justification"</label>
                <textarea
                    id="pr-justification"
                    rows="3"
                    class=INPUT
                    prop:value=move || form.with(|input| input.justification.clone())
                    on:input=move |ev| form.update(|input| input.justification = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="flex justify-end gap-2">
                <Button variant=ButtonVariant::Secondary attr:type="button" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </Button>
                <Button variant=ButtonVariant::Primary attr:type="submit" disabled=pending loading=pending>
                    "Create"
                </Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_lists_categories_and_validation_errors() {
        let html = render_to_string(move || {
            let form = create_rw_signal(CreateFormInput::default());
            let error = crate::pages::purchase_requests::utils::validate_create_form(
                &CreateFormInput::default(),
            )
            .err();
            view! {
                <CreatePurchaseRequestForm
                    form=form
                    error=Signal::derive(move || error.clone())
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        for category in CATEGORIES {
            assert!(html.contains(category));
        }
        assert!(html.contains("Description is required."));
    }
}
