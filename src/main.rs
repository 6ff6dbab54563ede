//! min-heap-demo
//!
//! Inserts a handful of integers into a [`MinHeap`] and prints them back in
//! ascending order.

use clap::Parser;
use min_heap::MinHeap;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "min-heap-demo")]
#[command(version = "0.1.0")]
#[command(about = "Drain integers from a binary min-heap in ascending order")]
struct Cli {
    /// Values to insert, in order
    #[arg(default_values_t = [5, 3, 8, 1, 2], allow_negative_numbers = true)]
    values: Vec<i64>,
}

/// `RUST_LOG` when set, `warn` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the drained values.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();

    let mut heap = MinHeap::new();
    for value in cli.values {
        heap.insert(value);
    }
    info!(len = heap.len(), "heap populated");

    println!("Removing elements from the MinHeap in ascending order:");
    while !heap.is_empty() {
        println!("{}", heap.remove_min()?);
    }

    Ok(())
}
