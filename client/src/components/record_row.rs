//! Admin list row with edit and delete actions.

use leptos::prelude::*;

use crate::state::articles::{Article, ArticlesState};
use crate::state::editor::EditorState;
use crate::util::dialog;

const DELETE_PROMPT: &str = "Delete this entry?";

#[component]
pub fn RecordRow(article: Article) -> impl IntoView {
    let articles = expect_context::<RwSignal<ArticlesState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let id = article.id;

    let on_edit = {
        let article = article.clone();
        move |_| {
            editor.update(|e| e.begin_edit(&article));
            dialog::scroll_to_top();
        }
    };

    let on_delete = move |_| {
        if !dialog::confirm(DELETE_PROMPT) {
            return;
        }
        let removed = articles.try_update(|s| s.delete(id)).unwrap_or(false);
        if !removed {
            log::debug!("delete ignored: article {id} already gone");
        }
    };

    view! {
        <div class="record-row">
            <div class="record-row__text">
                <span class="record-row__id">{format!("🆔 ID: {id}")}</span>
                <h4 class="record-row__title">{article.title}</h4>
            </div>
            <div class="record-row__actions">
                <button class="record-row__edit" title="Edit" on:click=on_edit>"✏️"</button>
                <button class="record-row__delete" title="Delete" on:click=on_delete>"🗑️"</button>
            </div>
        </div>
    }
}
