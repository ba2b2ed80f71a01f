//! Admin panel: article editor plus record management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Until the session is restored a placeholder renders; a
//! restored logged-out session is redirected to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::article_form::ArticleForm;
use crate::components::record_row::RecordRow;
use crate::state::articles::ArticlesState;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let articles = expect_context::<RwSignal<ArticlesState>>();
    install_login_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.get().logged_in
            fallback=move || {
                view! {
                    <main class="admin-page">
                        <p>
                            {move || {
                                if session.get().restored { "Redirecting to login..." } else { "Loading..." }
                            }}
                        </p>
                    </main>
                }
            }
        >
            <main class="admin-page">
                <aside class="admin-page__editor">
                    <ArticleForm/>
                </aside>
                <section class="admin-page__records">
                    <div class="admin-page__records-header">
                        <span>"🗄️ Database Records"</span>
                        <span class="admin-page__count">
                            {move || format!("{} entries", articles.get().len())}
                        </span>
                    </div>
                    {move || {
                        articles
                            .get()
                            .items
                            .into_iter()
                            .map(|article| view! { <RecordRow article=article/> })
                            .collect_view()
                    }}
                </section>
            </main>
        </Show>
    }
}
