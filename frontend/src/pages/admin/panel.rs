use super::{
    components::{
        dashboard::DashboardOverview, gate_form::GateForm, payments_table::PaymentsTab,
        properties_table::PropertiesTab, sidebar::{ShellHeader, Sidebar},
        subscriptions_table::SubscriptionsTab, users_table::UsersTab,
    },
    tabs::AdminTab,
    view_model::{use_admin_shell_view_model, AdminShellViewModel},
};
use crate::state::session::use_session;
use leptos::*;

/// Shows the gate until the session reports authenticated.
#[component]
pub fn AdminPage() -> impl IntoView {
    let (session, _set_session) = use_session();
    let authenticated = create_memo(move |_| session.get().authenticated);

    view! {
        <Show when=move || authenticated.get() fallback=|| view! { <GateForm /> }>
            <AdminShell />
        </Show>
    }
}

#[component]
pub fn AdminShell() -> impl IntoView {
    let vm = use_admin_shell_view_model();
    view! { <AdminShellView vm=vm /> }
}

#[component]
pub fn AdminShellView(vm: AdminShellViewModel) -> impl IntoView {
    let on_select = Callback::new(move |tab: AdminTab| vm.select_tab(tab));
    let on_sign_out = Callback::new(move |_: ()| vm.sign_out_action.dispatch(()));
    let signing_out = vm.sign_out_action.pending();

    // Only the active view is mounted; switching tabs drops the previous one.
    let active_view = move || match vm.active_tab.get() {
        AdminTab::Dashboard => view! { <DashboardOverview on_select=on_select /> }.into_view(),
        AdminTab::Users => view! { <UsersTab /> }.into_view(),
        AdminTab::Properties => view! { <PropertiesTab /> }.into_view(),
        AdminTab::Subscriptions => view! { <SubscriptionsTab /> }.into_view(),
        AdminTab::Payments => view! { <PaymentsTab /> }.into_view(),
    };

    view! {
        <div class="min-h-screen bg-surface">
            <ShellHeader on_sign_out=on_sign_out pending=Signal::from(signing_out) />
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 flex gap-6">
                <Sidebar active_tab=vm.active_tab on_select=on_select />
                <main class="flex-1 min-w-0" data-active-tab=move || vm.active_tab.get().slug()>
                    {active_view}
                </main>
            </div>
        </div>
    }
}
