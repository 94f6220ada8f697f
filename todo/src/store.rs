//! `TodoStore`: the to-do list's public API.
//!
//! A thin facade over the generic runtime `Store`. Writes go only through
//! the four operations below; reads return owned snapshots.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use tasklist_runtime::{Store, StoreConfig, StoreError};
use tokio::sync::watch;

type Inner = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Holds the to-do collection and applies mutations atomically
///
/// Cloning yields another handle to the same collection.
///
/// The `Result`s only surface runtime errors; the todo reducer never
/// triggers any of them, so in practice every call returns `Ok(())`.
#[derive(Clone)]
pub struct TodoStore {
    inner: Inner,
}

impl TodoStore {
    /// Creates an empty store whose ids start at 0
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(TodoEnvironment::default())
    }

    /// Creates an empty store with injected dependencies
    #[must_use]
    pub fn with_environment(env: TodoEnvironment) -> Self {
        Self::with_config(env, StoreConfig::default())
    }

    /// Creates an empty store with injected dependencies and runtime config
    #[must_use]
    pub fn with_config(env: TodoEnvironment, config: StoreConfig) -> Self {
        Self {
            inner: Store::with_config(TodoState::new(), TodoReducer::new(), env, config),
        }
    }

    /// Appends a new, not completed item
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the runtime.
    pub async fn add(&self, text: impl Into<String>) -> Result<(), StoreError> {
        self.inner.send(TodoAction::Add { text: text.into() }).await
    }

    /// Flips the `completed` flag of the item with `id`, if any
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the runtime.
    pub async fn toggle_completed(&self, id: TodoId) -> Result<(), StoreError> {
        self.inner.send(TodoAction::ToggleCompleted { id }).await
    }

    /// Removes the item with `id`, if any
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the runtime.
    pub async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.inner.send(TodoAction::Delete { id }).await
    }

    /// Replaces the text of the item with `id`, if any
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the runtime.
    pub async fn edit(&self, id: TodoId, text: impl Into<String>) -> Result<(), StoreError> {
        self.inner
            .send(TodoAction::Edit {
                id,
                text: text.into(),
            })
            .await
    }

    /// Sends a raw action, for callers that already hold one
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the runtime.
    pub async fn send(&self, action: TodoAction) -> Result<(), StoreError> {
        self.inner.send(action).await
    }

    /// The current collection, in list order
    #[must_use]
    pub fn snapshot(&self) -> Vec<TodoItem> {
        self.inner.snapshot().items
    }

    /// Looks up one item in the current collection
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<TodoItem> {
        self.inner.snapshot().get(id).cloned()
    }

    /// Receives a new state every time the collection changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TodoState> {
        self.inner.subscribe()
    }

    /// Reads state under the store lock
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.inner.state(f).await
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("items", &self.inner.snapshot().items)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = TodoStore::new();
        assert!(store.snapshot().is_empty());
        assert!(store.state(TodoState::is_empty).await);
    }

    #[tokio::test]
    async fn test_operations_round_trip() {
        let store = TodoStore::new();

        tokio_test::assert_ok!(store.add("buy milk").await);
        tokio_test::assert_ok!(store.add(String::from("walk dog")).await);
        tokio_test::assert_ok!(store.toggle_completed(TodoId::new(1)).await);
        tokio_test::assert_ok!(store.edit(TodoId::new(0), "buy oat milk").await);

        let items = store.snapshot();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "buy oat milk");
        assert!(!items[0].completed);
        assert!(items[1].completed);

        tokio_test::assert_ok!(store.delete(TodoId::new(0)).await);
        assert_eq!(store.get(TodoId::new(1)).map(|t| t.text), Some("walk dog".to_string()));
        assert_eq!(store.get(TodoId::new(0)), None);
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let store = TodoStore::new();
        let view = store.clone();

        tokio_test::assert_ok!(store.send(TodoAction::Add { text: "a".into() }).await);
        assert_eq!(view.snapshot().len(), 1);
    }

    #[test]
    fn test_debug_lists_items() {
        let rendered = format!("{:?}", TodoStore::new());
        assert!(rendered.contains("items: []"));
    }
}
