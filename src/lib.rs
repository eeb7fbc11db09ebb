//! # strands
//!
//! Split long text into a thread of bounded posts.
//!
//! ## The Problem
//!
//! Social platforms cap post length. A longer piece of writing has to go out
//! as a thread: a numbered run of posts, each under the cap. Doing that by
//! hand is tedious, and doing it naively is ugly:
//!
//! - A post cut mid-word reads as a typo
//! - A post that starts with a stray blank line looks broken
//! - The `" 3/12"` marker has to fit *inside* the cap, but its width depends
//!   on how many posts there are, which is not known until the split is done
//!
//! ## How It Works
//!
//! ```text
//! "Rust is a systems language.\n\nIt has no garbage collector." (limit 40)
//!
//!  normalize   "\r\n" -> "\n", blank input -> no posts
//!  budget      max(40, 30) - 12 reserved for the marker = 28 per body
//!  units       "Rust" " " "is" " " ... "language." "\n\n" "It" ...
//!  pack        ["Rust is a systems language.", "It has no garbage collector."]
//!  number      ["Rust is a systems language. 1/2",
//!               "It has no garbage collector. 2/2"]
//! ```
//!
//! Words are only split when a single word is longer than a whole post
//! (long URLs); whitespace inside a post, including blank lines between
//! paragraphs, is kept as written.
//!
//! ## Quick Start
//!
//! ```rust
//! use strands::{segment, Reservation, ThreadSplitter};
//!
//! // The one-call interface: strings ready to post
//! let posts = segment(Some("hello world"), 280);
//! assert_eq!(posts, ["hello world"]);
//!
//! // Configurable splitter with offsets back into the text
//! let splitter = ThreadSplitter::new(280).with_reservation(Reservation::Exact);
//! let thread = splitter.split("A long essay...");
//! for post in &thread {
//!     println!("{} ({} chars)", post.text, post.text.chars().count());
//! }
//! ```
//!
//! ## Around the Splitter
//!
//! | Item | Role |
//! |--------|------|
//! | [`read_text`] | Import a draft from a local text file |
//! | [`transcript`] | Join a thread into one block for a single copy |
//! | [`intent_url`] | Compose link with a post prefilled |
//! | [`TieredClipboard`] | Clipboard copy with fallbacks |
//!
//! None of these feed back into splitting.

mod budget;
mod clipboard;
mod compose;
mod error;
mod import;
mod measure;
mod normalize;
mod numberer;
mod segment;
mod segmenter;
mod splitter;
mod unit;

pub use budget::{marker_width, Budget, BudgetError, DEFAULT_LIMIT, MARKER_RESERVE, MIN_LIMIT};
pub use clipboard::{ClipboardTier, CommandTier, FileTier, ManualTier, TieredClipboard};
pub use compose::{intent_url, near_limit, transcript, INTENT_ENDPOINT, NEAR_LIMIT_MARGIN};
pub use error::{Error, Result};
pub use import::read_text;
pub use measure::Measure;
pub use normalize::normalize;
pub use numberer::{number, Marker, Post};
pub use segment::Segment;
pub use segmenter::Segmenter;
pub use splitter::{segment, Reservation, ThreadSplitter};
pub use unit::{units, Unit, UnitKind, Units};
