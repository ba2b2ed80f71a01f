//! Top navigation bar.
//!
//! Shows the staff login link to visitors and the admin/logout pair once the
//! session flag is set. Logging out returns to the feed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::storage::LocalStorage;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    // Held in the local arena so the logout handler stays `Copy` inside `Show`.
    let navigate = StoredValue::new_local(use_navigate());

    let on_logout = move |_| {
        navigate.with_value(|nav| nav("/", NavigateOptions::default()));
        session.update(|s| s.logout(&LocalStorage));
    };

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                <span class="nav-bar__logo">"S"</span>
                <span class="nav-bar__title">"S.TECH " <em>"NEWS"</em></span>
                <span class="nav-bar__tagline">"✨ Intelligence Hub"</span>
            </A>
            <div class="nav-bar__links">
                <A href="/" attr:class="nav-bar__link">"🏠 Home"</A>
                <span class="nav-bar__divider" aria-hidden="true"></span>
                <Show
                    when=move || session.get().logged_in
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="nav-bar__login">"🔑 STAFF LOGIN"</A>
                        }
                    }
                >
                    <A href="/admin" attr:class="nav-bar__link nav-bar__link--admin">"⚙️ Admin Panel"</A>
                    <button class="nav-bar__logout" type="button" on:click=on_logout>
                        "👋 Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
