//! Shared admin-gate helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical redirect behavior once the session has been
//! restored from durable storage. The redirect only applies while the guarded
//! path is still current, so a logout that navigates elsewhere is not
//! overridden.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;

/// Route guarded by the session flag.
pub const ADMIN_PATH: &str = "/admin";

/// Whether the current route should bounce to `/login`.
pub fn should_redirect_to_login(state: &SessionState, pathname: &str) -> bool {
    pathname == ADMIN_PATH && state.restored && !state.logged_in
}

/// Redirect to `/login` whenever the restored session is logged out on
/// the admin path.
pub fn install_login_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let pathname = use_location().pathname;
    Effect::new(move || {
        let state = session.get();
        if should_redirect_to_login(&state, &pathname.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
