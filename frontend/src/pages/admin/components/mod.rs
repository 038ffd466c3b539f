pub mod dashboard;
pub mod gate_form;
pub mod payments_table;
pub mod properties_table;
pub mod sidebar;
pub mod subscriptions_table;
pub mod users_table;

use crate::{
    components::{
        data_unavailable::DataUnavailable, empty_state::EmptyState, layout::LoadingSpinner,
        table::HeaderCell,
    },
    pages::admin::view_model::TableState,
};
use leptos::*;

pub(crate) const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";
pub(crate) const MUTED_CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg-muted";

/// Renders one of the four table states; `row` is only called for loaded rows.
pub(crate) fn collection_view<T, R>(
    state: TableState<T>,
    on_retry: Callback<()>,
    empty_title: &'static str,
    headers: &'static [&'static str],
    row: R,
) -> View
where
    T: 'static,
    R: Fn(T) -> View,
{
    match state {
        TableState::Loading => view! { <LoadingSpinner /> }.into_view(),
        TableState::Empty => view! { <EmptyState title=empty_title /> }.into_view(),
        TableState::Unavailable(error) => {
            view! { <DataUnavailable error=error on_retry=on_retry /> }.into_view()
        }
        TableState::Rows(rows) => view! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            {headers
                                .iter()
                                .map(|label| view! { <HeaderCell label=*label /> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody class="bg-surface-elevated divide-y divide-border">
                        {rows.into_iter().map(row).collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_view(),
    }
}
