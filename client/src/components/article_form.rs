//! Admin form for publishing and editing articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `EditorState` draft. Submits are applied to
//! `ArticlesState` in a single signal update.

use leptos::prelude::*;

use crate::state::articles::ArticlesState;
use crate::state::editor::{EditorState, SubmitOutcome};
use crate::util::clock;

#[component]
pub fn ArticleForm() -> impl IntoView {
    let articles = expect_context::<RwSignal<ArticlesState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut draft = editor.get_untracked();
        if let Err(e) = draft.validate() {
            info.set(e.to_string());
            return;
        }
        let Some(result) = articles.try_update(|s| draft.submit(s, clock::now_ms())) else {
            return;
        };
        match result {
            Ok(SubmitOutcome::Discarded(id)) => {
                log::warn!("edit discarded: article {id} no longer exists");
                info.set(format!("Article #{id} was deleted; edit discarded."));
            }
            Ok(SubmitOutcome::Created(_) | SubmitOutcome::Updated(_)) => info.set(String::new()),
            Err(e) => info.set(e.to_string()),
        }
        editor.set(draft);
    };

    let on_discard = move |_| {
        editor.update(EditorState::cancel);
        info.set(String::new());
    };

    let editing = move || editor.get().is_editing();

    view! {
        <div class="article-form" class:article-form--editing=editing>
            <header class="article-form__header">
                <span class="article-form__icon">{move || if editing() { "✍️" } else { "📢" }}</span>
                <h2>{move || if editing() { "Editor Mode" } else { "New Broadcast" }}</h2>
            </header>
            <form class="article-form__form" on:submit=on_submit>
                <input
                    class="article-form__input"
                    placeholder="📝 Announcement Title"
                    required
                    prop:value=move || editor.get().title
                    on:input=move |ev| editor.update(|e| e.title = event_target_value(&ev))
                />
                <textarea
                    class="article-form__input article-form__input--body"
                    rows="6"
                    placeholder="✍️ Write content here..."
                    required
                    prop:value=move || editor.get().body
                    on:input=move |ev| editor.update(|e| e.body = event_target_value(&ev))
                ></textarea>
                <button class="article-form__submit" type="submit">
                    {move || if editing() { "UPDATE NOW ✅" } else { "PUBLISH NEWS 📡" }}
                </button>
                <Show when=editing>
                    <button class="article-form__discard" type="button" on:click=on_discard>
                        "❌ Discard"
                    </button>
                </Show>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="article-form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
