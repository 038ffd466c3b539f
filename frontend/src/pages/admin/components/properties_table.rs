use super::{collection_view, CELL_CLASS, MUTED_CELL_CLASS};
use crate::{
    api::PropertyRecord,
    components::table::{StatusBadge, TableFrame},
    pages::admin::{
        repository::AdminRepository,
        view_model::{use_collection_view_model, TableState},
    },
    utils::format::{format_price, format_timestamp_date, humanize, DEFAULT_CURRENCY},
};
use leptos::*;

const HEADERS: &[&str] = &[
    "Title", "Type", "Price", "Location", "Beds / Baths", "Area", "Status", "Listed",
];

fn property_row(property: PropertyRecord) -> View {
    view! {
        <tr data-id=property.id>
            <td class=CELL_CLASS>{property.title}</td>
            <td class=MUTED_CELL_CLASS>{humanize(&property.listing_type)}</td>
            <td class=CELL_CLASS>{format_price(property.price, DEFAULT_CURRENCY)}</td>
            <td class=MUTED_CELL_CLASS>{property.location}</td>
            <td class=MUTED_CELL_CLASS>
                {format!("{} / {}", property.bedrooms, property.bathrooms)}
            </td>
            <td class=MUTED_CELL_CLASS>{format!("{} sq ft", property.area)}</td>
            <td class=CELL_CLASS><StatusBadge status=property.status /></td>
            <td class=MUTED_CELL_CLASS>{format_timestamp_date(&property.created_at)}</td>
        </tr>
    }
    .into_view()
}

#[component]
pub fn PropertiesTable(
    state: Signal<TableState<PropertyRecord>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <TableFrame title="Properties" description="Listings across every owner.">
            {move || {
                collection_view(state.get(), on_retry, "No properties listed", HEADERS, property_row)
            }}
        </TableFrame>
    }
}

#[component]
pub fn PropertiesTab() -> impl IntoView {
    let vm = use_collection_view_model(|repo: AdminRepository| async move {
        repo.fetch_properties().await
    });
    view! { <PropertiesTable state=vm.state on_retry=Callback::new(move |_: ()| vm.retry()) /> }
}
