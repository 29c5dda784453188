use leptos::ev::KeyboardEvent;
use leptos::*;

const PRIMARY_ACTION: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50";
const DANGER_ACTION: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-red-600 text-white hover:bg-red-700 disabled:opacity-50";
const CANCEL_ACTION: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-700 hover:bg-gray-200";

fn action_class(destructive: bool) -> &'static str {
    if destructive {
        DANGER_ACTION
    } else {
        PRIMARY_ACTION
    }
}

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Modal chrome shared by the dialogs: backdrop, Escape handling and header.
#[component]
fn DialogFrame(
    is_open: Signal<bool>,
    title: Signal<String>,
    on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-white shadow-xl border border-gray-200 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-gray-900">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-gray-500 hover:text-gray-900"
                            on:click=move |_| on_cancel.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_disabled = Signal::derive(move || confirm_disabled.get());

    view! {
        <DialogFrame is_open=is_open title=title on_cancel=on_cancel>
            <p class="text-sm text-gray-600">{move || message.get()}</p>
            <div class="flex justify-end gap-2">
                <button type="button" class=CANCEL_ACTION on:click=move |_| on_cancel.call(())>
                    {"Cancel"}
                </button>
                <button
                    type="button"
                    class=action_class(destructive)
                    disabled=move || confirm_disabled.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || confirm_text.get()}
                </button>
            </div>
        </DialogFrame>
    }
}

/// Collects the free-text input a row mutation needs (comments, reason,
/// resolution). Submit stays disabled until something non-blank is typed.
#[component]
pub fn PromptDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] label: MaybeSignal<String>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] submit_label: MaybeSignal<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional, into)] destructive: MaybeSignal<bool>,
) -> impl IntoView {
    let input = create_rw_signal(String::new());
    let submit_text = Signal::derive(move || label_or(submit_label.get(), "Submit"));
    let title = Signal::derive(move || title.get());
    let label = Signal::derive(move || label.get());
    let pending = Signal::derive(move || pending.get());
    let destructive = Signal::derive(move || destructive.get());
    let blank = move || input.with(|value| value.trim().is_empty());

    let cancel = Callback::new(move |_| {
        input.set(String::new());
        on_cancel.call(());
    });
    let submit = move |_| {
        if blank() {
            return;
        }
        let value = input.get_untracked();
        input.set(String::new());
        on_submit.call(value);
    };

    view! {
        <DialogFrame is_open=is_open title=title on_cancel=cancel>
            <label class="block text-sm font-medium text-gray-700">
                {move || label.get()}
                <textarea
                    class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                    rows="3"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="flex justify-end gap-2">
                <button type="button" class=CANCEL_ACTION on:click=move |_| cancel.call(())>
                    {"Cancel"}
                </button>
                <button
                    type="button"
                    class=move || action_class(destructive.get())
                    disabled=move || blank() || pending.get()
                    on:click=submit
                >
                    {move || submit_text.get()}
                </button>
            </div>
        </DialogFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_or_falls_back_for_blank_text() {
        assert_eq!(label_or("  ".into(), "Confirm"), "Confirm");
        assert_eq!(label_or("Delete".into(), "Confirm"), "Delete");
    }

    #[test]
    fn destructive_actions_use_danger_palette() {
        assert!(action_class(true).contains("bg-red-600"));
        assert!(action_class(false).contains("bg-blue-600"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_message_and_default_labels() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Delete rule"
                    message="Delete rule R-004? This cannot be undone."
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    destructive=true
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Delete rule R-004?"));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
        assert!(html.contains("bg-red-600"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="Delete rule"
                    message="hidden message"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("hidden message"));
    }

    #[test]
    fn prompt_dialog_renders_label_and_disabled_submit() {
        let html = render_to_string(move || {
            view! {
                <PromptDialog
                    is_open=Signal::derive(|| true)
                    title="Approve A-7"
                    label="Approval comments"
                    submit_label="Approve"
                    on_submit=Callback::new(|_: String| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Approve A-7"));
        assert!(html.contains("Approval comments"));
        assert!(html.contains("<textarea"));
        assert!(html.contains("disabled"));
    }
}
