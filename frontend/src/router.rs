use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{admin::AdminPage, home::HomePage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/admin"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/admin" view=AdminPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn admin_gate_is_routed() {
        assert!(ROUTE_PATHS.contains(&"/admin"));
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
