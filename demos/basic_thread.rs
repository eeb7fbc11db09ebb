//! Basic Thread Splitting
//!
//! Turn a short essay into a numbered thread.
//!
//! ```bash
//! cargo run --example basic_thread
//! ```

use strands::{intent_url, transcript, Reservation, ThreadSplitter};

fn main() {
    let essay = "Ownership is Rust's most unique feature. It enables memory safety \
        guarantees without needing a garbage collector.\n\n\
        Each value has a single owner. When the owner goes out of scope, the \
        value is dropped. Borrowing lets code use a value without taking \
        ownership of it, and the compiler checks that every borrow is valid.\n\n\
        Together these rules remove whole classes of bugs at compile time.";

    let splitter = ThreadSplitter::new(140);
    let posts = splitter.split(essay);

    println!("Essay: {} chars", essay.chars().count());
    println!("Posts: {} (limit {})\n", posts.len(), splitter.budget().limit());

    for post in &posts {
        println!("[{}] {} chars: \"{}\"", post.index(), post.text.chars().count(), post.text);
    }

    // Exact reservation only sets aside what the markers actually need
    let exact = splitter.with_reservation(Reservation::Exact).split(essay);
    println!("\nWith exact reservation: {} posts", exact.len());

    println!("\nCopy-all text:\n{}", transcript(&posts));
    println!("\nOpen the first post: {}", intent_url(&posts[0].text));
}
