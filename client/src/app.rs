//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{admin::AdminPage, feed::FeedPage, login::LoginPage};
use crate::state::{articles::ArticlesState, editor::EditorState, session::SessionState};
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the session flag, kicks off
/// the one-time feed load, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let articles = RwSignal::new(ArticlesState::default());
    let editor = RwSignal::new(EditorState::default());

    provide_context(session);
    provide_context(articles);
    provide_context(editor);

    // Effects only run in the browser, after hydration.
    Effect::new(move || session.set(SessionState::restore(&LocalStorage)));

    #[cfg(feature = "hydrate")]
    load_feed(articles);

    view! {
        <Stylesheet id="leptos" href="/pkg/stech-news.css"/>
        <Title text="S.TECH News"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FeedPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}

/// Fetch the remote feed once and merge it into the article list.
#[cfg(feature = "hydrate")]
fn load_feed(articles: RwSignal<ArticlesState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_feed().await {
            Ok(fetched) => {
                log::info!("feed loaded: {} articles", fetched.len());
                articles.update(|s| s.seed(fetched));
            }
            Err(e) => log::error!("Error fetching data: {e}"),
        }
    });
}
