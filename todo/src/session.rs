//! Transient per-view state.
//!
//! What a list view remembers between keystrokes: the text in the "new
//! todo" input and, while an item is being edited, which item and the
//! draft text. None of it belongs to the store. Dropping the session
//! (the view unmounting) discards it and leaves the collection untouched.

use crate::store::TodoStore;
use crate::types::TodoId;
use tasklist_runtime::StoreError;

/// An in-progress edit of one item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    /// Item being edited
    pub id: TodoId,
    /// Text as currently typed
    pub text: String,
}

/// View-local state for one to-do list view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoSession {
    input: String,
    editing: Option<EditDraft>,
}

impl TodoSession {
    /// A fresh session: empty input, nothing being edited
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of the "new todo" input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the "new todo" input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Adds the current input as a new item and clears the input
    ///
    /// The input is not validated; submitting an empty input adds an empty item.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store; the input is cleared either way.
    pub async fn submit(&mut self, store: &TodoStore) -> Result<(), StoreError> {
        let text = std::mem::take(&mut self.input);
        store.add(text).await
    }

    /// The edit in progress, if any
    #[must_use]
    pub const fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    /// Whether `id` is the item being edited
    #[must_use]
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|draft| draft.id == id)
    }

    /// Starts editing `id`, seeding the draft with its current text
    ///
    /// Replaces any edit already in progress. Returns `false` and leaves the
    /// session unchanged if the store has no such item.
    pub fn begin_edit(&mut self, store: &TodoStore, id: TodoId) -> bool {
        let Some(item) = store.get(id) else {
            tracing::debug!(%id, "Cannot edit unknown todo");
            return false;
        };

        self.editing = Some(EditDraft { id, text: item.text });
        true
    }

    /// Updates the draft text; ignored when nothing is being edited
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.text = text.into();
        }
    }

    /// Writes the draft to the store and stops editing
    ///
    /// Does nothing when nothing is being edited. If the item was deleted
    /// meanwhile, the store ignores the edit.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store; editing stops either way.
    pub async fn save_edit(&mut self, store: &TodoStore) -> Result<(), StoreError> {
        match self.editing.take() {
            Some(EditDraft { id, text }) => store.edit(id, text).await,
            None => Ok(()),
        }
    }

    /// Stops editing without touching the store
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}
