//! Admin editor draft and mode state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin form toggles between publishing a new article and editing an
//! existing one. Submits are applied against `ArticlesState`; the editor never
//! holds a reference into the list, only the target id.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use super::articles::{Article, ArticlesState};

/// Which record, if any, the form is currently bound to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Create,
    Editing(i64),
}

/// Why a draft was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("content is required")]
    MissingBody,
}

/// Result of submitting the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(i64),
    Updated(i64),
    /// The edit target no longer exists; nothing was written.
    Discarded(i64),
}

/// Transient form state owned by the admin panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub title: String,
    pub body: String,
}

impl EditorState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    /// Bind the form to `article`, replacing whatever draft was in progress.
    pub fn begin_edit(&mut self, article: &Article) {
        self.mode = EditorMode::Editing(article.id);
        self.title.clone_from(&article.title);
        self.body.clone_from(&article.body);
    }

    /// Drop the draft and go back to create mode.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Check that both fields are filled in. Whitespace counts as content.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.body.is_empty() {
            return Err(DraftError::MissingBody);
        }
        Ok(())
    }

    /// Apply the draft to `articles` and reset to create mode.
    ///
    /// An edit whose target was deleted in the meantime is reported as
    /// `Discarded` and leaves the list untouched.
    ///
    /// # Errors
    ///
    /// Returns a `DraftError` and keeps the draft when a field is empty.
    pub fn submit(&mut self, articles: &mut ArticlesState, now_ms: i64) -> Result<SubmitOutcome, DraftError> {
        self.validate()?;
        let outcome = match self.mode {
            EditorMode::Create => SubmitOutcome::Created(articles.create(&self.title, &self.body, now_ms)),
            EditorMode::Editing(id) => {
                if articles.replace(id, &self.title, &self.body) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Discarded(id)
                }
            }
        };
        self.cancel();
        Ok(outcome)
    }
}
