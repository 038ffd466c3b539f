use crate::api::ApiError;
use leptos::*;

/// Shown in place of a table whose fetch failed.
#[component]
pub fn DataUnavailable(error: ApiError, on_retry: Callback<()>) -> impl IntoView {
    let code = error.code;
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-2 my-2" role="alert">
            <div class="font-bold">"Data unavailable"</div>
            <p class="text-sm">{error.error}</p>
            {(!code.is_empty()).then(|| view! {
                <div class="text-xs opacity-75">{"Code: "}{code}</div>
            })}
            <button
                type="button"
                class="px-3 py-1 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                on:click=move |_| on_retry.call(())
            >
                "Retry"
            </button>
        </div>
    }
}
