//! Public feed page listing every article read-only.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::state::articles::ArticlesState;

#[component]
pub fn FeedPage() -> impl IntoView {
    let articles = expect_context::<RwSignal<ArticlesState>>();

    view! {
        <main class="feed-page">
            <header class="feed-page__header">
                <span class="feed-page__live">"🔴 Live Updates"</span>
                <h2 class="feed-page__headline">
                    "Inside" <br/> <span>"The Campus 🎓"</span>
                </h2>
                <p class="feed-page__lede">
                    "Campus news, activities and announcements from S.TECH 📡"
                </p>
            </header>
            <div class="feed-page__grid">
                {move || {
                    articles
                        .get()
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(position, article)| view! { <ArticleCard article=article position=position/> })
                        .collect_view()
                }}
            </div>
        </main>
    }
}
