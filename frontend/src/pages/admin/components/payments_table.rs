use super::{collection_view, CELL_CLASS, MUTED_CELL_CLASS};
use crate::{
    api::PaymentRecord,
    components::table::{StatusBadge, TableFrame},
    pages::admin::{
        repository::AdminRepository,
        view_model::{use_collection_view_model, TableState},
    },
    utils::format::{format_money, format_timestamp_date, humanize},
};
use leptos::*;

const HEADERS: &[&str] = &[
    "Transaction",
    "User",
    "Type",
    "Amount",
    "Method",
    "Status",
    "Date",
    "Description",
];

fn payment_row(payment: PaymentRecord) -> View {
    view! {
        <tr data-id=payment.id>
            <td class=MUTED_CELL_CLASS>{payment.transaction_id}</td>
            <td class=MUTED_CELL_CLASS>{payment.user_id}</td>
            <td class=CELL_CLASS>{humanize(&payment.payment_type)}</td>
            <td class=CELL_CLASS>{format_money(payment.amount, &payment.currency)}</td>
            <td class=MUTED_CELL_CLASS>{humanize(&payment.payment_method)}</td>
            <td class=CELL_CLASS><StatusBadge status=payment.status /></td>
            <td class=MUTED_CELL_CLASS>{format_timestamp_date(&payment.created_at)}</td>
            <td class=MUTED_CELL_CLASS>{payment.description}</td>
        </tr>
    }
    .into_view()
}

#[component]
pub fn PaymentsTable(state: Signal<TableState<PaymentRecord>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <TableFrame title="Payments" description="Payments received from users.">
            {move || collection_view(state.get(), on_retry, "No payments recorded", HEADERS, payment_row)}
        </TableFrame>
    }
}

#[component]
pub fn PaymentsTab() -> impl IntoView {
    let vm = use_collection_view_model(|repo: AdminRepository| async move {
        repo.fetch_payments().await
    });
    view! { <PaymentsTable state=vm.state on_retry=Callback::new(move |_: ()| vm.retry()) /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    #[test]
    fn row_uses_the_payment_currency() {
        let payment = PaymentRecord {
            id: "pay-1".into(),
            user_id: "3".into(),
            payment_type: "featured_listing".into(),
            amount: 1500.0,
            currency: "INR".into(),
            status: "refunded".into(),
            payment_method: "credit_card".into(),
            transaction_id: "TXN-0042".into(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap(),
            description: "Featured slot".into(),
        };
        let html = render_to_string(move || {
            let state = Signal::derive(move || TableState::Rows(vec![payment.clone()]));
            view! { <PaymentsTable state=state on_retry=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("TXN-0042"));
        assert!(html.contains("Featured listing"));
        assert!(html.contains("INR 1,500.00"));
        assert!(html.contains("Refunded"));
        assert!(html.contains("Credit card"));
    }

    #[test]
    fn failure_shows_server_code() {
        let html = render_to_string(|| {
            let state = Signal::derive(|| {
                TableState::<PaymentRecord>::Unavailable(ApiError::unauthorized("Sign in to continue"))
            });
            view! { <PaymentsTable state=state on_retry=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Sign in to continue"));
        assert!(html.contains("Code: UNAUTHORIZED"));
    }
}
