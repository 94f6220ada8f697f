//! Simple CLI demo for the to-do list.
//!
//! Drives a view session through a short script and prints the list after
//! every step. Set `RUST_LOG=debug` to watch the store at work.

use anyhow::Context;
use todo::{TodoId, TodoItem, TodoSession, TodoStore};
use tracing_subscriber::EnvFilter;

fn print_list(heading: &str, items: &[TodoItem]) {
    println!("\n{heading}");
    if items.is_empty() {
        println!("  (empty)");
    }
    for item in items {
        println!("  {item}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Todo Example ===");

    let store = TodoStore::new();
    let mut session = TodoSession::new();

    for text in ["buy milk", "walk dog"] {
        session.set_input(text);
        session.submit(&store).await?;
    }
    print_list("Added two todos:", &store.snapshot());

    store.toggle_completed(TodoId::new(0)).await?;
    print_list("Completed 'buy milk':", &store.snapshot());

    let dog = TodoId::new(1);
    if session.begin_edit(&store, dog) {
        session.set_edit_text("walk the dog");
        session.save_edit(&store).await?;
    }
    print_list("Edited 'walk dog':", &store.snapshot());

    store.delete(TodoId::new(0)).await?;
    print_list("Deleted 'buy milk':", &store.snapshot());

    session.set_input("water plants");
    session.submit(&store).await?;
    print_list("Added one more (ids are never reused):", &store.snapshot());

    let state = store.state(Clone::clone).await;
    println!(
        "\nCompleted: {}/{}",
        state.completed_count(),
        state.len()
    );

    let json = serde_json::to_string_pretty(&state.items).context("rendering snapshot as JSON")?;
    println!("\nSnapshot as JSON:\n{json}");

    println!("\n=== Demo Complete ===");
    Ok(())
}
