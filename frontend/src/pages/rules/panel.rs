use crate::api::Rule;
use crate::components::{
    common::{Button, ButtonVariant},
    dialog::ConfirmDialog,
    layout::{Layout, PageHeader},
    list_status::{ListStatus, NoticeBanner},
};
use crate::pages::purchase_requests::utils::CATEGORIES;
use crate::pages::rules::{
    components::{RuleForm, RulesTable},
    utils::{RuleFilter, ALL_CATEGORIES},
    view_model::{use_rules_view_model, RulesViewModel},
};
use leptos::*;

#[component]
pub fn RulesPage() -> impl IntoView {
    let vm = use_rules_view_model();
    vm.list.mount();

    let on_toggle = Callback::new(move |rule: Rule| {
        spawn_local(async move {
            vm.toggle_active(rule).await;
        });
    });
    let on_delete = Callback::new(move |rule: Rule| vm.request_delete(rule));
    let on_submit = Callback::new(move |_: ()| {
        spawn_local(async move {
            vm.submit_create().await;
        });
    });
    let confirm_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            vm.confirm_delete().await;
        });
    });
    let delete_message = Signal::derive(move || {
        vm.pending_delete.with(|rule| {
            rule.as_ref()
                .map(|rule| format!("Delete rule {}? This cannot be undone.", rule.rule_id))
                .unwrap_or_default()
        })
    });

    view! {
        <Layout>
            <PageHeader title="Business Rules" subtitle="Compliance checks evaluated against every purchase request.">
                <Button variant=ButtonVariant::Primary on:click=move |_| vm.toggle_form()>
                    {move || if vm.show_form.get() { "Close Form" } else { "Add New Rule" }}
                </Button>
            </PageHeader>
            <NoticeBanner notice=vm.list.notice />
            <Show when=move || vm.show_form.get()>
                <RuleForm
                    form=vm.form
                    error=vm.form_error
                    pending=vm.list.mutation_pending
                    on_submit=on_submit
                    on_cancel=Callback::new(move |_| vm.toggle_form())
                />
            </Show>
            <RuleFilters vm=vm />
            <RulesTable
                rows=vm.list.items()
                on_toggle=on_toggle
                on_delete=on_delete
                busy=vm.list.mutation_pending
            />
            <ListStatus state=vm.list.state empty_title="No rules match this filter" />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete rule"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Delete"
                destructive=true
            />
        </Layout>
    }
}

#[component]
fn RuleFilters(vm: RulesViewModel) -> impl IntoView {
    let filter = vm.list.filter;
    let categories = std::iter::once(ALL_CATEGORIES).chain(CATEGORIES.iter().copied());
    let set_category = move |ev: ev::Event| {
        let category = event_target_value(&ev);
        vm.list.set_filter(RuleFilter {
            category,
            ..filter.get_untracked()
        });
    };
    let set_active_only = move |ev: ev::Event| {
        let active_only = event_target_checked(&ev);
        vm.list.set_filter(RuleFilter {
            active_only,
            ..filter.get_untracked()
        });
    };

    view! {
        <div class="flex flex-wrap items-center gap-4 mb-4">
            <label class="text-sm font-medium text-gray-700">
                "Category "
                <select class="ml-2 border border-gray-300 rounded-md px-2 py-1 text-sm" on:change=set_category>
                    <option value="" selected=move || filter.with(|f| f.category.is_empty())>"Any"</option>
                    {categories
                        .map(|category| view! {
                            <option value=category selected=move || filter.with(|f| f.category == category)>
                                {category}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="flex items-center gap-2 text-sm text-gray-700">
                <input
                    type="checkbox"
                    prop:checked=move || filter.with(|f| f.active_only)
                    on:change=set_active_only
                />
                "Active only"
            </label>
        </div>
    }
}
