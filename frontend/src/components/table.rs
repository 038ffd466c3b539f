use crate::utils::format::{humanize, status_badge_class};
use leptos::*;

#[component]
pub fn TableFrame(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">{title}</h2>
                <p class="text-sm text-fg-muted">{description}</p>
            </div>
            {children()}
        </section>
    }
}

#[component]
pub fn HeaderCell(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
            {label}
        </th>
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!(
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
        status_badge_class(&status)
    );
    view! { <span class=class>{humanize(&status)}</span> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn status_badge_uses_status_colour() {
        let html = render_to_string(|| view! { <StatusBadge status="completed" /> });
        assert!(html.contains("bg-green-100"));
        assert!(html.contains("Completed"));
    }
}
