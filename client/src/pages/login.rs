//! Staff login page guarding the admin panel.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{ACCESS_DENIED_MESSAGE, SessionState};
use crate::util::dialog;
use crate::util::storage::LocalStorage;

const MISSING_FIELDS_MESSAGE: &str = "Enter both username and password.";

/// Require both fields; values are compared verbatim, so nothing is trimmed.
fn validate_credentials_input(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if let Err(msg) = validate_credentials_input(&user, &pass) {
            info.set(msg.to_owned());
            return;
        }
        let accepted = session
            .try_update(|s| s.login(&LocalStorage, &user, &pass))
            .unwrap_or(false);
        if accepted {
            info.set(String::new());
            navigate("/admin", NavigateOptions::default());
        } else {
            info.set(ACCESS_DENIED_MESSAGE.to_owned());
            dialog::alert(ACCESS_DENIED_MESSAGE);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-card__header">
                    <div class="login-card__icon">"🔐"</div>
                    <h2>"Access " <span>"Portal"</span></h2>
                    <p class="login-card__subtitle">"🛑 Authorized Personnel Only"</p>
                </header>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        placeholder="👤 Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="🔒 Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"GO TO DASHBOARD 🚀"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
