use crate::state::session::use_session;
use leptos::*;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/purchase-requests", "Purchase Requests"),
    ("/approvals", "Approvals"),
    ("/exceptions", "Exceptions"),
    ("/rules", "Rules"),
];

const NAV_LINK_CLASS: &str =
    "text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100";

#[component]
pub fn Header() -> impl IntoView {
    let (session, _set_session) = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let signed_in_as = move || {
        session
            .get()
            .identity
            .map(|identity| {
                if identity.display_name.trim().is_empty() {
                    identity.id
                } else {
                    identity.display_name
                }
            })
            .unwrap_or_else(|| "Not signed in".to_string())
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-gray-900">"Procurement Console"</h1>
                    <div class="flex items-center gap-4">
                        <nav class="hidden lg:flex space-x-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> })
                                .collect_view()}
                        </nav>
                        <span class="text-sm text-gray-500" data-testid="session-user">{signed_in_as}</span>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-600 hover:bg-gray-100"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            "☰"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-gray-200">
                        <nav class="px-4 py-3 space-y-1">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=*href
                                        class=format!("block {}", NAV_LINK_CLASS)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

/// Page title row with an optional action area on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 md:flex-row md:items-center md:justify-between mb-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900">{title}</h2>
                {subtitle.map(|text| view! { <p class="text-sm text-gray-500">{text}</p> })}
            </div>
            {children.map(|actions| view! { <div class="flex gap-2">{actions()}</div> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" aria-busy="true">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{ops_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_every_page_link_and_user() {
        let html = render_to_string(move || {
            provide_session(Some(ops_user()));
            view! { <Header /> }
        });
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(label));
        }
        assert!(html.contains("Asha Rao"));
    }

    #[test]
    fn header_marks_signed_out_sessions() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <Header /> }
        });
        assert!(html.contains("Not signed in"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session(Some(ops_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn page_header_renders_title_subtitle_and_actions() {
        let html = render_to_string(move || {
            view! {
                <PageHeader title="Rules" subtitle="Compliance checks">
                    <button>"New Rule"</button>
                </PageHeader>
            }
        });
        assert!(html.contains("Rules"));
        assert!(html.contains("Compliance checks"));
        assert!(html.contains("New Rule"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
