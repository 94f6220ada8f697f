//! # Tasklist Runtime
//!
//! Runtime implementation for the Tasklist reducer architecture.
//!
//! This crate provides the Store runtime that owns state, runs the reducer
//! and publishes immutable snapshots to whoever renders them.
//!
//! ## Core Components
//!
//! - **Store**: Manages state, runs the reducer, executes effects
//! - **Snapshot channel**: A `watch` channel carrying the latest state
//! - **Feedback loop**: `Effect::Send` actions are reduced before `send` returns
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//!
//! // Or render from the latest snapshot
//! let mut snapshots = store.subscribe();
//! snapshots.changed().await?;
//! render(&*snapshots.borrow_and_update());
//! ```

use std::sync::Arc;
use tasklist_core::{action::Action, reducer::Reducer};
use tokio::sync::RwLock;

/// Metrics recorded by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A reducer kept feeding actions back past the configured bound
        ///
        /// State changes made before the bound was hit are kept and published;
        /// the remaining queued actions are dropped.
        #[error("Effect feedback exceeded {0} actions")]
        FeedbackLimitExceeded(usize),
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_max_feedback_actions(8)
///     .with_notify_unchanged(true);
///
/// assert_eq!(config.max_feedback_actions, 8);
/// assert!(config.notify_unchanged);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions a single `send` may feed back via effects
    pub max_feedback_actions: usize,
    /// Publish a snapshot after every send, even when state did not change
    pub notify_unchanged: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize, notify_unchanged: bool) -> Self {
        Self {
            max_feedback_actions,
            notify_unchanged,
        }
    }

    /// Set the feedback bound
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, max: usize) -> Self {
        self.max_feedback_actions = max;
        self
    }

    /// Set whether unchanged state still wakes subscribers
    #[must_use]
    pub const fn with_notify_unchanged(mut self, notify: bool) -> Self {
        self.notify_unchanged = notify;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
            notify_unchanged: false,
        }
    }
}

/// The Store runtime
pub mod store {
    use super::metrics::StoreMetrics;
    use super::{Action, Arc, Reducer, RwLock, StoreConfig, StoreError};
    use std::collections::VecDeque;
    use std::time::Instant;
    use tokio::sync::watch;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; every `send` holds the write lock until done)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Snapshots (the last published state, observable via `subscribe`)
    ///
    /// Cloning a Store is cheap and yields a handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
        snapshots: Arc<watch::Sender<S>>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: self.config.clone(),
                snapshots: Arc::clone(&self.snapshots),
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Action + Send + 'static,
        S: Clone + PartialEq + Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (snapshots, _) = watch::channel(initial_state.clone());

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
                snapshots: Arc::new(snapshots),
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Reduces every action fed back by `Effect::Send`, in order
        /// 4. Publishes the resulting state to subscribers
        ///
        /// The lock is held throughout, so no intermediate state is ever
        /// observable and concurrent `send` calls serialize.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if the reducer fed
        /// back more than [`StoreConfig::max_feedback_actions`] actions.
        /// State changes made up to that point are still published.
        #[tracing::instrument(skip(self, action), fields(action = action.name()), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let mut queue = VecDeque::new();
            self.reduce_one(&mut state, action, &mut queue);

            let mut outcome = Ok(());
            let mut fed_back = 0usize;
            while let Some(next) = queue.pop_front() {
                if fed_back == self.config.max_feedback_actions {
                    tracing::warn!(
                        limit = self.config.max_feedback_actions,
                        dropped = queue.len() + 1,
                        "Effect feedback limit reached, dropping remaining actions"
                    );
                    StoreMetrics::record_feedback_limit();
                    outcome = Err(StoreError::FeedbackLimitExceeded(fed_back));
                    break;
                }
                fed_back += 1;
                StoreMetrics::record_feedback();
                self.reduce_one(&mut state, next, &mut queue);
            }

            self.publish(&state);
            outcome
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Clone of the last published snapshot
        ///
        /// Never waits on a running `send`; it sees the state as of the
        /// last completed one.
        #[must_use]
        pub fn snapshot(&self) -> S {
            self.snapshots.borrow().clone()
        }

        /// Subscribe to published snapshots
        ///
        /// The receiver starts with the current snapshot marked as seen.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.snapshots.subscribe()
        }

        fn reduce_one(&self, state: &mut S, action: A, queue: &mut VecDeque<A>) {
            let name = action.name();
            let span = tracing::debug_span!("reducer_execution", action = name);
            let _enter = span.enter();

            let start = Instant::now();
            let effects = self.reducer.reduce(state, action, &self.environment);
            StoreMetrics::record_action(name, start.elapsed());

            tracing::trace!("Reducer completed, returned {} effects", effects.len());
            for effect in effects {
                effect.collect_actions(queue);
            }
        }

        fn publish(&self, state: &S) {
            let notify_unchanged = self.config.notify_unchanged;
            let published = self.snapshots.send_if_modified(|snapshot| {
                if notify_unchanged || snapshot != state {
                    snapshot.clone_from(state);
                    true
                } else {
                    false
                }
            });

            if published {
                StoreMetrics::record_publish();
                tracing::debug!("Published new snapshot");
            } else {
                tracing::debug!("State unchanged, snapshot not published");
            }
        }
    }
}

pub use store::Store;
