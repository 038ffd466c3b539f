use crate::pages::admin::tabs::AdminTab;
use leptos::*;

/// Landing view of the shell. Issues no requests.
#[component]
pub fn DashboardOverview(on_select: Callback<AdminTab>) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">"Dashboard"</h2>
                <p class="text-sm text-fg-muted">"Choose a section to review."</p>
            </div>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                {AdminTab::SECTIONS
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                data-tab=tab.slug()
                                class="text-left bg-surface-elevated shadow rounded-lg p-5 hover:bg-action-ghost-bg-hover"
                                on:click=move |_| on_select.call(tab)
                            >
                                <h3 class="text-base font-semibold text-fg">{tab.label()}</h3>
                                <p class="mt-1 text-sm text-fg-muted">{tab.description()}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_the_four_sections() {
        let html = render_to_string(|| {
            view! { <DashboardOverview on_select=Callback::new(|_| {}) /> }
        });
        for tab in AdminTab::SECTIONS {
            assert!(html.contains(tab.label()), "missing {}", tab.label());
        }
        assert!(!html.contains("data-tab=\"dashboard\""));
    }
}
