//! In-memory to-do list built on the Tasklist reducer architecture.
//!
//! Items are added, toggled, edited and deleted through [`TodoStore`];
//! every operation is applied atomically and then published as a new
//! snapshot for whatever renders the list. Ids come from a monotonic
//! counter and are never reused, even after deletes.
//!
//! Transient view state (the input box, the edit draft) lives in
//! [`TodoSession`], outside the store.
//!
//! # Quick Start
//!
//! ```
//! use todo::{TodoId, TodoStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TodoStore::new();
//!
//! store.add("buy milk").await?;
//! store.add("walk dog").await?;
//! store.toggle_completed(TodoId::new(0)).await?;
//! store.delete(TodoId::new(0)).await?;
//!
//! let items = store.snapshot();
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].id, TodoId::new(1));
//! # Ok(())
//! # }
//! # tokio_test::block_on(example()).unwrap();
//! ```

pub mod reducer;
pub mod session;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use session::{EditDraft, TodoSession};
pub use store::TodoStore;
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
