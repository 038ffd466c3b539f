use crate::{
    components::layout::ErrorMessage,
    state::session::{use_session, use_sign_in_action},
};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn GateForm() -> impl IntoView {
    let (session, _set_session) = use_session();
    let sign_in_action = use_sign_in_action();
    let pending = sign_in_action.pending();
    let (credential, set_credential) = create_signal(String::new());
    let error = Signal::derive(move || session.get().error);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        sign_in_action.dispatch(credential.get_untracked());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Admin sign in"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Homestead listings dashboard"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                    <div>
                        <label for="admin-password" class="sr-only">"Password"</label>
                        <input
                            id="admin-password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class="appearance-none rounded-md relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg focus:outline-none focus:z-10 sm:text-sm"
                            placeholder="Admin password"
                            prop:value=credential
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                set_credential.set(target.value());
                            }
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionState;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn renders_password_field_and_submit() {
        let html = render_with_session(SessionState::default(), || view! { <GateForm /> });
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Sign in"));
        assert!(!html.contains("Invalid password"));
    }

    #[test]
    fn renders_the_last_error() {
        let state = SessionState {
            error: Some("Invalid password".into()),
            ..SessionState::default()
        };
        let html = render_with_session(state, || view! { <GateForm /> });
        assert!(html.contains("Invalid password"));
    }
}
