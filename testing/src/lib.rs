//! # Tasklist Testing
//!
//! Testing utilities and helpers for the Tasklist reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::default())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add { text: "buy milk".into() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use std::sync::Mutex;
use tasklist_core::environment::IdGenerator;

pub mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{IdGenerator, Mutex};
    use std::collections::VecDeque;

    /// Id generator that replays a fixed script, then keeps counting
    ///
    /// Handy for pinning the exact ids a reducer will assign, e.g. to start
    /// a test "mid-session" with ids that no longer match collection length.
    /// Once the script is exhausted it continues from one past the largest
    /// scripted id, so it never repeats a scripted value.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::ScriptedIdGenerator;
    /// use tasklist_core::environment::IdGenerator;
    ///
    /// let ids = ScriptedIdGenerator::new([7, 3]);
    /// assert_eq!(ids.next_id(), 7);
    /// assert_eq!(ids.next_id(), 3);
    /// assert_eq!(ids.next_id(), 8);
    /// ```
    #[derive(Debug)]
    pub struct ScriptedIdGenerator {
        inner: Mutex<Script>,
    }

    #[derive(Debug)]
    struct Script {
        pending: VecDeque<u64>,
        after: u64,
    }

    impl ScriptedIdGenerator {
        /// Create a generator that first yields `ids` in order
        #[must_use]
        pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
            let pending: VecDeque<u64> = ids.into_iter().collect();
            let after = pending.iter().max().map_or(0, |max| max + 1);

            Self {
                inner: Mutex::new(Script { pending, after }),
            }
        }
    }

    impl IdGenerator for ScriptedIdGenerator {
        fn next_id(&self) -> u64 {
            // A poisoned lock only means another test thread panicked mid-call;
            // the script itself is still consistent.
            let mut script = self
                .inner
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);

            script.pending.pop_front().unwrap_or_else(|| {
                let id = script.after;
                script.after += 1;
                id
            })
        }
    }
}

/// Install a `tracing` subscriber that writes through the test harness
///
/// Honours `RUST_LOG`; defaults to `debug` so reducer no-ops show up in
/// failing test output. Safe to call from every test.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    // Another test may already have installed one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::ScriptedIdGenerator;
