use super::{
    repository::AdminRepository,
    tabs::{transition, AdminTab},
};
use crate::{
    api::{ApiError, Pagination, UserRecord},
    state::session::{
        expire_session, use_admin_repository, use_session, use_sign_out_action, SessionState,
        SessionStore,
    },
};
use leptos::*;
use serde::{de::DeserializeOwned, Serialize};
use std::{cell::Cell, future::Future, rc::Rc};

/// What a table view shows for its collection.
#[derive(Debug, Clone, PartialEq)]
pub enum TableState<T> {
    Loading,
    Rows(Vec<T>),
    Empty,
    Unavailable(ApiError),
}

pub fn table_state<T>(loading: bool, result: Option<Result<Vec<T>, ApiError>>) -> TableState<T> {
    if loading {
        return TableState::Loading;
    }
    match result {
        None => TableState::Loading,
        Some(Ok(rows)) if rows.is_empty() => TableState::Empty,
        Some(Ok(rows)) => TableState::Rows(rows),
        Some(Err(err)) => TableState::Unavailable(err),
    }
}

fn expire_if_unauthorized(
    err: &ApiError,
    store: &SessionStore,
    set_session: WriteSignal<SessionState>,
) {
    if err.is_unauthorized() {
        log::info!("Admin session rejected by the server; signing out locally");
        expire_session(store, set_session);
    }
}

/// Tallies the collection fetches table views issue. Views pick it up
/// from context when one is provided.
#[derive(Debug, Clone, Default)]
pub struct FetchCounter(Rc<Cell<u32>>);

impl FetchCounter {
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    fn record(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

fn record_fetch(counter: &Option<FetchCounter>) {
    if let Some(counter) = counter {
        counter.record();
    }
}

#[derive(Clone, Copy)]
pub struct AdminShellViewModel {
    tab: RwSignal<AdminTab>,
    pub active_tab: Memo<AdminTab>,
    pub sign_out_action: Action<(), ()>,
}

impl AdminShellViewModel {
    pub fn select_tab(&self, selected: AdminTab) {
        if let Some(next) = transition(self.tab.get_untracked(), selected) {
            self.tab.set(next);
        }
    }
}

pub fn use_admin_shell_view_model() -> AdminShellViewModel {
    let tab = create_rw_signal(AdminTab::default());
    let active_tab = create_memo(move |_| tab.get());
    let sign_out_action = use_sign_out_action();

    AdminShellViewModel {
        tab,
        active_tab,
        sign_out_action,
    }
}

/// State of one unpaginated collection view. Each mount fetches once;
/// `retry` re-issues the request.
pub struct CollectionViewModel<T: 'static> {
    pub state: Signal<TableState<T>>,
    reload: RwSignal<u32>,
}

impl<T: 'static> Clone for CollectionViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CollectionViewModel<T> {}

impl<T: 'static> CollectionViewModel<T> {
    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_collection_view_model<T, F, Fut>(fetch: F) -> CollectionViewModel<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
    F: Fn(AdminRepository) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let repository = use_admin_repository();
    let store = repository.session_store().clone();
    let (_session, set_session) = use_session();
    let reload = create_rw_signal(0u32);
    let counter = use_context::<FetchCounter>();

    let resource = create_resource(
        move || reload.get(),
        move |_| {
            record_fetch(&counter);
            fetch(repository.clone())
        },
    );

    create_effect(move |_| {
        if let Some(Err(err)) = resource.get() {
            expire_if_unauthorized(&err, &store, set_session);
        }
    });

    let loading = resource.loading();
    let state = Signal::derive(move || table_state(loading.get(), resource.get()));

    CollectionViewModel { state, reload }
}

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub state: Signal<TableState<UserRecord>>,
    pub pagination: Signal<Option<Pagination>>,
    pub loading: Signal<bool>,
    page: RwSignal<u32>,
    reload: RwSignal<u32>,
}

impl UsersViewModel {
    pub fn go_to_page(&self, page: u32) {
        if self.loading.get_untracked() || page == 0 {
            return;
        }
        self.page.set(page);
    }

    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn can_go_previous(pagination: &Pagination) -> bool {
    pagination.current_page > 1
}

pub fn can_go_next(pagination: &Pagination) -> bool {
    pagination.current_page < pagination.pages
}

pub fn page_summary(pagination: &Pagination) -> String {
    format!(
        "Page {} of {} ({} users)",
        pagination.current_page, pagination.pages, pagination.total
    )
}

pub fn use_users_view_model() -> UsersViewModel {
    let repository = use_admin_repository();
    let store = repository.session_store().clone();
    let (_session, set_session) = use_session();
    let page = create_rw_signal(1u32);
    let reload = create_rw_signal(0u32);
    let counter = use_context::<FetchCounter>();

    let resource = create_resource(
        move || (page.get(), reload.get()),
        move |(page, _reload)| {
            record_fetch(&counter);
            let repo = repository.clone();
            async move { repo.fetch_users(page).await }
        },
    );

    create_effect(move |_| {
        if let Some(Err(err)) = resource.get() {
            expire_if_unauthorized(&err, &store, set_session);
        }
    });

    let loading = resource.loading();
    let state = Signal::derive(move || {
        table_state(
            loading.get(),
            resource.get().map(|result| result.map(|page| page.rows)),
        )
    });
    let pagination = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .and_then(|page| page.pagination)
    });

    UsersViewModel {
        state,
        pagination,
        loading,
        page,
        reload,
    }
}
