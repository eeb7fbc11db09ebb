//! Copying posts to the clipboard, with fallbacks.
//!
//! Clipboard access is unreliable: the helper program may be missing, the
//! session may have no display, or a sandbox may block it. [`TieredClipboard`]
//! tries each [`ClipboardTier`] in order and stops at the first that takes
//! the text:
//!
//! ```text
//! system clipboard program (wl-copy, xclip, pbcopy, clip)
//!   │ fails
//!   ▼
//! manual: print the text so the user can copy it by hand
//! ```
//!
//! The splitter never depends on this module; a failed copy cannot change
//! how a thread is split.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, error, warn};

use crate::{Error, Result};

/// One way of getting text onto the clipboard.
pub trait ClipboardTier: Send {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Hand `text` over.
    ///
    /// # Errors
    ///
    /// [`Error::Clipboard`] when this tier cannot take the text.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Pipes text into an external clipboard program.
#[derive(Debug, Clone)]
pub struct CommandTier {
    name: &'static str,
    program: String,
    args: Vec<String>,
}

impl CommandTier {
    /// A tier that runs `program` with `args` and writes the text to its stdin.
    #[must_use]
    pub fn new(name: &'static str, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name,
            program: program.into(),
            args: args.iter().map(|&a| a.to_string()).collect(),
        }
    }

    /// Wayland's `wl-copy`.
    #[must_use]
    pub fn wl_copy() -> Self {
        Self::new("wl-copy", "wl-copy", &[])
    }

    /// X11's `xclip`, targeting the clipboard selection.
    #[must_use]
    pub fn xclip() -> Self {
        Self::new("xclip", "xclip", &["-selection", "clipboard"])
    }

    /// macOS `pbcopy`.
    #[must_use]
    pub fn pbcopy() -> Self {
        Self::new("pbcopy", "pbcopy", &[])
    }

    /// Windows `clip`.
    #[must_use]
    pub fn clip() -> Self {
        Self::new("clip", "clip", &[])
    }

    fn fail(&self, reason: impl ToString) -> Error {
        Error::Clipboard {
            tier: self.name,
            reason: reason.to_string(),
        }
    }
}

impl ClipboardTier for CommandTier {
    fn name(&self) -> &'static str {
        self.name
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.fail(e))?;

        // Dropping stdin closes the pipe before waiting
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));

        // Reap the child even when the pipe broke
        let status = child.wait().map_err(|e| self.fail(e))?;
        written.map_err(|e| self.fail(e))?;
        if status.success() {
            Ok(())
        } else {
            Err(self.fail(format!("exited with {status}")))
        }
    }
}

/// Writes text to a file, for environments where a file is the clipboard.
#[derive(Debug, Clone)]
pub struct FileTier {
    path: PathBuf,
}

impl FileTier {
    /// A tier that overwrites `path` with the copied text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClipboardTier for FileTier {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text).map_err(|e| Error::Clipboard {
            tier: "file",
            reason: format!("{}: {e}", self.path.display()),
        })
    }
}

/// Last resort: shows the text with instructions to copy it by hand.
#[derive(Debug)]
pub struct ManualTier<W> {
    out: W,
}

impl<W: Write + Send> ManualTier<W> {
    /// A tier that prints to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ClipboardTier for ManualTier<W> {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let shown = writeln!(
            self.out,
            "Automatic copying is unavailable. Copy the text below manually:\n\n{text}\n"
        )
        .and_then(|()| self.out.flush());

        shown.map_err(|e| Error::Clipboard {
            tier: "manual",
            reason: e.to_string(),
        })
    }
}

/// Clipboard that falls through a chain of tiers.
///
/// ```rust
/// use strands::{FileTier, TieredClipboard};
///
/// let dir = std::env::temp_dir().join("strands-doc-clipboard.txt");
/// let mut clipboard = TieredClipboard::new().with_tier(FileTier::new(&dir));
///
/// assert!(clipboard.copy("hello 1/2"));
/// assert_eq!(std::fs::read_to_string(&dir).unwrap(), "hello 1/2");
/// ```
#[derive(Default)]
pub struct TieredClipboard {
    tiers: Vec<Box<dyn ClipboardTier>>,
}

impl TieredClipboard {
    /// A clipboard with no tiers; every copy fails until tiers are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier to the end of the chain.
    #[must_use]
    pub fn with_tier(mut self, tier: impl ClipboardTier + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// The platform's clipboard programs, then manual copy on stderr.
    #[must_use]
    pub fn system() -> Self {
        let clipboard = Self::new();

        #[cfg(target_os = "macos")]
        let clipboard = clipboard.with_tier(CommandTier::pbcopy());

        #[cfg(target_os = "windows")]
        let clipboard = clipboard.with_tier(CommandTier::clip());

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let clipboard = clipboard
            .with_tier(CommandTier::wl_copy())
            .with_tier(CommandTier::xclip());

        clipboard.with_tier(ManualTier::new(std::io::stderr()))
    }

    /// Names of the tiers, in the order they are tried.
    pub fn tiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tiers.iter().map(|t| t.name())
    }

    /// Copy `text`, trying each tier until one succeeds.
    ///
    /// Returns `false` when every tier failed.
    pub fn copy(&mut self, text: &str) -> bool {
        for tier in &mut self.tiers {
            match tier.write(text) {
                Ok(()) => {
                    debug!(tier = tier.name(), bytes = text.len(), "copied to clipboard");
                    return true;
                }
                Err(e) => warn!(tier = tier.name(), error = %e, "clipboard tier failed, trying next"),
            }
        }
        error!("all clipboard tiers failed");
        false
    }
}

impl std::fmt::Debug for TieredClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tiers()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records writes, optionally failing.
    struct Fake {
        name: &'static str,
        fail: bool,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardTier for Fake {
        fn name(&self) -> &'static str {
            self.name
        }

        fn write(&mut self, text: &str) -> Result<()> {
            self.seen.lock().unwrap().push(format!("{}:{text}", self.name));
            if self.fail {
                Err(Error::Clipboard {
                    tier: self.name,
                    reason: "blocked".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn fake(name: &'static str, fail: bool, seen: &Arc<Mutex<Vec<String>>>) -> Fake {
        Fake {
            name,
            fail,
            seen: Arc::clone(seen),
        }
    }

    #[test]
    fn test_first_tier_wins() {
        let seen = Arc::default();
        let mut clipboard = TieredClipboard::new()
            .with_tier(fake("secure", false, &seen))
            .with_tier(fake("legacy", false, &seen));

        assert!(clipboard.copy("hi"));
        assert_eq!(*seen.lock().unwrap(), ["secure:hi"]);
    }

    #[test]
    fn test_falls_through() {
        let seen = Arc::default();
        let mut clipboard = TieredClipboard::new()
            .with_tier(fake("secure", true, &seen))
            .with_tier(fake("legacy", true, &seen))
            .with_tier(fake("prompt", false, &seen));

        assert!(clipboard.copy("hi"));
        assert_eq!(
            *seen.lock().unwrap(),
            ["secure:hi", "legacy:hi", "prompt:hi"]
        );
    }

    #[test]
    fn test_all_fail() {
        let seen = Arc::default();
        let mut clipboard = TieredClipboard::new()
            .with_tier(fake("secure", true, &seen))
            .with_tier(fake("legacy", true, &seen));

        assert!(!clipboard.copy("hi"));
        assert!(!TieredClipboard::new().copy("hi"));
    }

    #[test]
    fn test_missing_program_fails() {
        let mut tier = CommandTier::new("nope", "strands-no-such-clipboard-program", &[]);
        let err = tier.write("hi").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_tier_pipes_text() {
        let mut tier = CommandTier::new("cat", "cat", &[]);
        tier.write("hello 1/2").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_program_closing_pipe_early_fails() {
        // `true` exits without reading, so a large write hits a broken pipe
        let mut tier = CommandTier::new("early-exit", "true", &[]);
        let err = tier.write(&"x".repeat(1 << 20)).unwrap_err();
        assert!(matches!(err, Error::Clipboard { tier: "early-exit", .. }));
    }

    #[test]
    fn test_manual_tier_prints() {
        let mut tier = ManualTier::new(Vec::new());
        tier.write("copy me 1/2").unwrap();
        let shown = String::from_utf8(tier.into_inner()).unwrap();
        assert!(shown.contains("copy me 1/2"));
        assert!(shown.contains("manually"));
    }

    #[test]
    fn test_file_tier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.txt");
        let mut clipboard = TieredClipboard::new().with_tier(FileTier::new(&path));

        assert!(clipboard.copy("thread"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "thread");
    }

    #[test]
    fn test_system_ends_with_manual() {
        let clipboard = TieredClipboard::system();
        assert_eq!(clipboard.tiers().last(), Some("manual"));
    }
}
