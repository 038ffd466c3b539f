use super::{collection_view, CELL_CLASS, MUTED_CELL_CLASS};
use crate::{
    api::{Pagination, UserRecord},
    components::table::{StatusBadge, TableFrame},
    pages::admin::view_model::{
        can_go_next, can_go_previous, page_summary, use_users_view_model, TableState,
    },
    utils::format::format_timestamp_date,
};
use leptos::*;

const HEADERS: &[&str] = &[
    "Name",
    "Email",
    "Mobile",
    "Role",
    "Subscription",
    "Status",
    "Joined",
];

fn user_row(user: UserRecord) -> View {
    let account_status = if user.is_active { "active" } else { "inactive" };
    view! {
        <tr data-id=user.id>
            <td class=CELL_CLASS>{user.name}</td>
            <td class=MUTED_CELL_CLASS>{user.email}</td>
            <td class=MUTED_CELL_CLASS>{user.mobile}</td>
            <td class=MUTED_CELL_CLASS>{user.role}</td>
            <td class=CELL_CLASS><StatusBadge status=user.subscription_status /></td>
            <td class=CELL_CLASS><StatusBadge status=account_status /></td>
            <td class=MUTED_CELL_CLASS>{format_timestamp_date(&user.created_at)}</td>
        </tr>
    }
    .into_view()
}

#[component]
pub fn UsersTable(state: Signal<TableState<UserRecord>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <TableFrame title="Users" description="Registered accounts and their subscription status.">
            {move || collection_view(state.get(), on_retry, "No users yet", HEADERS, user_row)}
        </TableFrame>
    }
}

#[component]
pub fn PageControls(
    pagination: Signal<Option<Pagination>>,
    loading: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    move || {
        pagination.get().map(|meta| {
            let previous_disabled = move || loading.get() || !can_go_previous(&meta);
            let next_disabled = move || loading.get() || !can_go_next(&meta);
            view! {
                <div class="flex items-center justify-between pt-2">
                    <span class="text-sm text-fg-muted">{page_summary(&meta)}</span>
                    <div class="space-x-2">
                        <button
                            type="button"
                            class="px-3 py-1 rounded-md text-sm border border-border disabled:opacity-50"
                            disabled=previous_disabled
                            on:click=move |_| on_page.call(meta.current_page.saturating_sub(1))
                        >
                            "Previous"
                        </button>
                        <button
                            type="button"
                            class="px-3 py-1 rounded-md text-sm border border-border disabled:opacity-50"
                            disabled=next_disabled
                            on:click=move |_| on_page.call(meta.current_page + 1)
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn UsersTab() -> impl IntoView {
    let vm = use_users_view_model();
    let on_retry = Callback::new(move |_: ()| vm.retry());
    let on_page = Callback::new(move |page: u32| vm.go_to_page(page));
    view! {
        <div class="space-y-2">
            <UsersTable state=vm.state on_retry=on_retry />
            <PageControls pagination=vm.pagination loading=vm.loading on_page=on_page />
        </div>
    }
}
