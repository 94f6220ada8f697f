//! # Tasklist Core
//!
//! Core traits and types for the Tasklist reducer architecture.
//!
//! This crate provides the fundamental abstractions for building small,
//! fully in-memory state containers using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (owned, `Clone`-able)
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{action::Action, effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         "Increment"
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert!(effects.is_empty());
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Action module - Unified input type for reducers
///
/// Actions represent every state transition a feature supports. The store
/// only needs a stable name for each one (for logs and metrics), which
/// `#[derive(Action)]` from `tasklist-macros` generates from the variant name.
pub mod action {
    /// Common behaviour the runtime needs from every action type
    pub trait Action {
        /// Stable, human-readable name of this action's variant
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function (given its environment) that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions for the store to run
        ///
        /// Most reducers return no effects; the inline capacity of 4 keeps
        /// the common case allocation-free.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects describe what the store should do after a reducer returns.
/// They are values (not execution). Everything is synchronous: the store
/// runs them in order before the triggering `send` completes.
pub mod effect {
    use std::collections::VecDeque;

    /// Effect type - describes follow-up work for the store
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        Send(Box<Action>),

        /// Run effects one after another
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Feed `action` back into the reducer
        #[must_use]
        pub fn send(action: Action) -> Self {
            Effect::Send(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Self {
            Effect::Sequential(effects)
        }

        /// Returns true if running this effect would do nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Send(_) => false,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
            }
        }

        /// Flatten this effect into the actions it feeds back, in order
        pub fn collect_actions(self, queue: &mut VecDeque<Action>) {
            match self {
                Effect::None => {}
                Effect::Send(action) => queue.push_back(*action),
                Effect::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_actions(queue);
                    }
                }
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism a reducer needs are abstracted behind
/// traits and injected via the Environment parameter.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Identifier source for newly created entities
    ///
    /// Implementations must never hand out the same value twice.
    pub trait IdGenerator: Send + Sync {
        /// Returns the next unused identifier
        fn next_id(&self) -> u64;
    }

    /// Monotonic counter starting at a fixed value
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_core::environment::{IdGenerator, SequentialIdGenerator};
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), 0);
    /// assert_eq!(ids.next_id(), 1);
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Creates a generator whose first id is 0
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(0)
        }

        /// Creates a generator whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }

        /// Returns the id the next call to `next_id` will produce
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::Acquire)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::AcqRel)
        }
    }
}
