//! Read-only feed card for one article.

use leptos::prelude::*;

use crate::state::articles::Article;
use crate::util::card_style::{card_style, is_featured};

/// A feed card. `position` is the card's index in the feed.
#[component]
pub fn ArticleCard(article: Article, position: usize) -> impl IntoView {
    let style = card_style(article.id);
    let featured = is_featured(position);

    view! {
        <article
            class=format!("article-card article-card--{}", style.accent)
            class:article-card--featured=featured
        >
            <div class="article-card__icon">{style.icon}</div>
            <h3 class="article-card__title">{article.title}</h3>
            <p class="article-card__body">{article.body}</p>
            <footer class="article-card__footer">
                <span class="article-card__id">{format!("📌 Article #{}", article.id)}</span>
            </footer>
        </article>
    }
}
