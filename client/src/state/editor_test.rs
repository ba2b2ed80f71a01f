use super::*;

fn find(articles: &ArticlesState, id: i64) -> &Article {
    articles.items.iter().find(|a| a.id == id).unwrap()
}

fn store() -> ArticlesState {
    let mut state = ArticlesState::default();
    state.seed(
        (1..=3)
            .map(|id| Article { id, title: format!("t{id}"), body: format!("b{id}") })
            .collect(),
    );
    state
}

fn draft(title: &str, body: &str) -> EditorState {
    EditorState { mode: EditorMode::Create, title: title.to_owned(), body: body.to_owned() }
}

// =============================================================
// Create mode
// =============================================================

#[test]
fn default_is_create_mode_with_empty_draft() {
    let editor = EditorState::default();
    assert_eq!(editor.mode, EditorMode::Create);
    assert!(!editor.is_editing());
    assert!(editor.title.is_empty());
    assert!(editor.body.is_empty());
}

#[test]
fn submit_in_create_mode_prepends_and_stays_in_create() {
    let mut articles = store();
    let mut editor = draft("T", "B");

    let outcome = editor.submit(&mut articles, 1_000).unwrap();

    assert_eq!(outcome, SubmitOutcome::Created(1_000));
    assert_eq!(articles.items[0].title, "T");
    assert_eq!(articles.len(), 4);
    assert_eq!(editor, EditorState::default());
}

#[test]
fn submit_rejects_missing_title_and_keeps_draft() {
    let mut articles = store();
    let mut editor = draft("", "body");

    assert_eq!(editor.submit(&mut articles, 1_000), Err(DraftError::MissingTitle));
    assert_eq!(editor.body, "body");
    assert_eq!(articles.len(), 3);
}

#[test]
fn submit_accepts_whitespace_only_fields() {
    let mut articles = store();
    let mut editor = draft(" ", "B");

    let outcome = editor.submit(&mut articles, 1_000).unwrap();

    assert_eq!(outcome, SubmitOutcome::Created(1_000));
    assert_eq!(articles.len(), 4);
    assert_eq!(articles.items[0].title, " ");
}

#[test]
fn submit_rejects_missing_body() {
    let mut articles = store();
    let mut editor = draft("title", "");
    assert_eq!(editor.submit(&mut articles, 1_000), Err(DraftError::MissingBody));
    assert_eq!(articles.len(), 3);
}

// =============================================================
// Editing mode
// =============================================================

#[test]
fn begin_edit_seeds_draft_from_record() {
    let articles = store();
    let mut editor = EditorState::default();
    editor.begin_edit(find(&articles, 2));

    assert_eq!(editor.mode, EditorMode::Editing(2));
    assert_eq!(editor.title, "t2");
    assert_eq!(editor.body, "b2");
}

#[test]
fn begin_edit_replaces_previous_target() {
    let articles = store();
    let mut editor = EditorState::default();
    editor.begin_edit(find(&articles, 1));
    editor.begin_edit(find(&articles, 3));
    assert_eq!(editor.mode, EditorMode::Editing(3));
    assert_eq!(editor.title, "t3");
}

#[test]
fn submit_while_editing_replaces_target_and_returns_to_create() {
    let mut articles = store();
    let mut editor = EditorState::default();
    editor.begin_edit(find(&articles, 2));
    editor.title = "edited".to_owned();

    let outcome = editor.submit(&mut articles, 1_000).unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated(2));
    assert_eq!(articles.len(), 3);
    assert_eq!(find(&articles, 2).title, "edited");
    assert_eq!(find(&articles, 2).body, "b2");
    assert_eq!(find(&articles, 1).title, "t1");
    assert_eq!(editor.mode, EditorMode::Create);
}

#[test]
fn cancel_discards_draft_without_touching_store() {
    let mut articles = store();
    let before = articles.items.clone();
    let mut editor = EditorState::default();
    editor.begin_edit(find(&articles, 1));
    editor.title = "never saved".to_owned();

    editor.cancel();

    assert_eq!(editor, EditorState::default());
    assert_eq!(articles.items, before);
    // The list is still writable afterwards.
    assert!(articles.delete(1));
}

#[test]
fn submit_after_target_deleted_is_discarded() {
    let mut articles = store();
    let mut editor = EditorState::default();
    editor.begin_edit(find(&articles, 2));

    assert!(articles.delete(2));
    let before = articles.items.clone();

    let outcome = editor.submit(&mut articles, 1_000).unwrap();

    assert_eq!(outcome, SubmitOutcome::Discarded(2));
    assert_eq!(articles.items, before);
    assert_eq!(editor.mode, EditorMode::Create);
}

#[test]
fn draft_error_messages_are_readable() {
    assert_eq!(DraftError::MissingTitle.to_string(), "title is required");
    assert_eq!(DraftError::MissingBody.to_string(), "content is required");
}
