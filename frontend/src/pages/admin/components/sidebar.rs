use crate::pages::admin::tabs::AdminTab;
use leptos::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "w-full text-left px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "w-full text-left px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}

#[component]
pub fn Sidebar(active_tab: Memo<AdminTab>, on_select: Callback<AdminTab>) -> impl IntoView {
    view! {
        <nav class="w-56 flex-shrink-0 space-y-1" aria-label="Admin sections">
            {AdminTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            data-tab=tab.slug()
                            class=move || tab_class(active_tab.get() == tab)
                            aria-current=move || (active_tab.get() == tab).then_some("page")
                            on:click=move |_| on_select.call(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn ShellHeader(on_sign_out: Callback<()>, pending: Signal<bool>) -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center h-16">
                <h1 class="text-xl font-semibold text-fg">"Homestead Admin"</h1>
                <button
                    type="button"
                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                    disabled=move || pending.get()
                    on:click=move |_| on_sign_out.call(())
                >
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
