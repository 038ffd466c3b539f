use crate::pages::admin::tabs::AdminTab;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-surface flex items-center">
            <section class="max-w-3xl mx-auto py-12 px-4 sm:px-6 lg:px-8 text-center space-y-6">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">"Homestead"</h1>
                <p class="text-base text-fg-muted sm:text-lg">
                    "Back office for listings, members and billing."
                </p>
                <ul class="flex flex-wrap justify-center gap-2 text-sm text-fg-muted">
                    {AdminTab::SECTIONS
                        .into_iter()
                        .map(|tab| view! { <li class="px-3 py-1 rounded-full bg-surface-muted">{tab.label()}</li> })
                        .collect_view()}
                </ul>
                <a
                    href="/admin"
                    class="inline-flex items-center px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg shadow"
                >
                    "Open admin"
                </a>
            </section>
        </main>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn links_to_the_admin_gate() {
        let html = render_to_string(|| view! { <HomePage /> });
        assert!(html.contains("href=\"/admin\""));
        assert!(html.contains("Subscriptions"));
    }
}
