use super::{collection_view, CELL_CLASS, MUTED_CELL_CLASS};
use crate::{
    api::SubscriptionRecord,
    components::table::{StatusBadge, TableFrame},
    pages::admin::{
        repository::AdminRepository,
        view_model::{use_collection_view_model, TableState},
    },
    utils::format::{format_date, format_money, humanize, DEFAULT_CURRENCY},
};
use leptos::*;

const HEADERS: &[&str] = &[
    "ID", "User", "Plan", "Status", "Start", "End", "Amount", "Method",
];

fn subscription_row(subscription: SubscriptionRecord) -> View {
    view! {
        <tr data-id=subscription.id.clone()>
            <td class=MUTED_CELL_CLASS>{subscription.id}</td>
            <td class=MUTED_CELL_CLASS>{subscription.user_id}</td>
            <td class=CELL_CLASS>{humanize(&subscription.plan)}</td>
            <td class=CELL_CLASS><StatusBadge status=subscription.status /></td>
            <td class=MUTED_CELL_CLASS>{format_date(&subscription.start_date)}</td>
            <td class=MUTED_CELL_CLASS>{format_date(&subscription.end_date)}</td>
            <td class=CELL_CLASS>{format_money(subscription.amount, DEFAULT_CURRENCY)}</td>
            <td class=MUTED_CELL_CLASS>{humanize(&subscription.payment_method)}</td>
        </tr>
    }
    .into_view()
}

#[component]
pub fn SubscriptionsTable(
    state: Signal<TableState<SubscriptionRecord>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <TableFrame title="Subscriptions" description="Listing plans held by users.">
            {move || {
                collection_view(
                    state.get(),
                    on_retry,
                    "No subscriptions yet",
                    HEADERS,
                    subscription_row,
                )
            }}
        </TableFrame>
    }
}

#[component]
pub fn SubscriptionsTab() -> impl IntoView {
    let vm = use_collection_view_model(|repo: AdminRepository| async move {
        repo.fetch_subscriptions().await
    });
    view! { <SubscriptionsTable state=vm.state on_retry=Callback::new(move |_: ()| vm.retry()) /> }
}
