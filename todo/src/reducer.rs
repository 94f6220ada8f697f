//! Reducer logic for the to-do list.
//!
//! Every action is total: an unknown id is logged and ignored. The whole
//! action runs under the store's write lock, so readers only ever see the
//! collection before or after it.

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use std::sync::Arc;
use tasklist_core::{
    effect::Effect,
    environment::{IdGenerator, SequentialIdGenerator},
    reducer::Reducer,
    SmallVec,
};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of ids for new items
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TodoEnvironment {
    /// Ids start at 0 and are never reused
    fn default() -> Self {
        Self::new(Arc::new(SequentialIdGenerator::new()))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the to-do list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Draws the next id not currently in use
    ///
    /// With a monotonic generator the first draw always wins; the loop only
    /// matters for generators that were seeded below ids already present.
    fn fresh_id(state: &TodoState, env: &TodoEnvironment) -> TodoId {
        loop {
            let id = TodoId::new(env.ids.next_id());
            if !state.contains(id) {
                return id;
            }
            tracing::warn!(%id, "Id generator returned an id already in use, drawing again");
        }
    }

    fn add(state: &mut TodoState, text: String, env: &TodoEnvironment) {
        let id = Self::fresh_id(state, env);
        tracing::debug!(%id, "Adding todo");
        state.items.push(TodoItem::new(id, text));
    }

    fn toggle_completed(state: &mut TodoState, id: TodoId) {
        let Some(pos) = state.position(id) else {
            tracing::debug!(%id, "No todo with this id, ignoring toggle");
            return;
        };
        let item = &mut state.items[pos];
        item.completed = !item.completed;
    }

    fn edit(state: &mut TodoState, id: TodoId, text: String) {
        let Some(pos) = state.position(id) else {
            tracing::debug!(%id, "No todo with this id, ignoring edit");
            return;
        };
        state.items[pos].text = text;
    }

    fn delete(state: &mut TodoState, id: TodoId) {
        let Some(pos) = state.position(id) else {
            tracing::debug!(%id, "No todo with this id, ignoring delete");
            return;
        };
        state.items.remove(pos);
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => Self::add(state, text, env),
            TodoAction::ToggleCompleted { id } => Self::toggle_completed(state, id),
            TodoAction::Edit { id, text } => Self::edit(state, id, text),
            TodoAction::Delete { id } => Self::delete(state, id),
        }

        SmallVec::new()
    }
}
