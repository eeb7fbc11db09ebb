//! Helpers for publishing a split thread.
//!
//! Splitting stops at a list of posts. Getting them onto a platform is
//! manual: copy the whole thread at once, or open a compose window with the
//! first post filled in and reply with the rest.

use std::fmt::Write;

use crate::{Measure, Post};

/// Compose endpoint used by [`intent_url`].
pub const INTENT_ENDPOINT: &str = "https://twitter.com/intent/tweet?text=";

/// Posts within this many characters of the limit are flagged by
/// [`near_limit`].
pub const NEAR_LIMIT_MARGIN: usize = 20;

/// Join a thread into one block of text for a single clipboard copy.
///
/// Every post after the first is preceded by a `--- Post N ---` separator
/// line, so the posts can be pasted one reply at a time.
///
/// ```rust
/// use strands::{transcript, ThreadSplitter};
///
/// let posts = ThreadSplitter::new(30).split("one two three four five six seven");
/// let text = transcript(&posts);
///
/// assert!(text.starts_with(&posts[0].text));
/// assert!(text.contains("\n\n--- Post 2 ---\n\n"));
/// ```
#[must_use]
pub fn transcript(posts: &[Post]) -> String {
    let mut out = String::new();
    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            // Writing to a String cannot fail
            let _ = write!(out, "\n\n--- Post {} ---\n\n", i + 1);
        }
        out.push_str(&post.text);
    }
    out
}

/// Build a compose link with `text` prefilled.
///
/// ```rust
/// use strands::intent_url;
///
/// assert_eq!(
///     intent_url("a b&c"),
///     "https://twitter.com/intent/tweet?text=a%20b%26c"
/// );
/// ```
#[must_use]
pub fn intent_url(text: &str) -> String {
    let mut url = String::with_capacity(INTENT_ENDPOINT.len() + text.len() * 3);
    url.push_str(INTENT_ENDPOINT);
    encode_component(text, &mut url);
    url
}

/// Percent-encode `text` as a URI component, leaving only
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` unescaped.
fn encode_component(text: &str, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    for &byte in text.as_bytes() {
        let unreserved = byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')');
        if unreserved {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
    }
}

/// Whether `post` is within [`NEAR_LIMIT_MARGIN`] characters of `limit`,
/// counted in the `measure` the thread was split with.
#[must_use]
pub fn near_limit(post: &Post, limit: usize, measure: Measure) -> bool {
    post.width(measure) + NEAR_LIMIT_MARGIN > limit
}
