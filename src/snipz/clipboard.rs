//! # Clipboard Bridge
//!
//! [`Clipboard`] is the seam to the system clipboard. [`SystemClipboard`] talks to
//! the real one; [`MemoryClipboard`] stands in for it in tests.
//!
//! Callers go through [`copy`] and [`paste`], which apply the one failure policy
//! used everywhere: a clipboard that refuses (no display, permission denied,
//! missing helper binary) is logged at `warn` and otherwise ignored. Copy reports
//! whether it worked; paste yields `None` so the input stays as it was.

use crate::error::{Result, SnipzError};
use tracing::{debug, warn};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
    fn read_text(&mut self) -> Result<String>;
}

/// Writes `text` to the clipboard. Failures are logged, never raised.
pub fn copy<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            debug!(bytes = text.len(), "copied to clipboard");
            true
        }
        Err(e) => {
            warn!(error = %e, "failed to copy to clipboard");
            false
        }
    }
}

/// Reads the clipboard text. Failures are logged and read as `None`.
pub fn paste<C: Clipboard + ?Sized>(clipboard: &mut C) -> Option<String> {
    match clipboard.read_text() {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "failed to read clipboard");
            None
        }
    }
}

/// The platform clipboard.
///
/// Reads go through `arboard` everywhere. On Linux, writes are handed to `xclip`
/// or `xsel` first: those keep serving the selection after this process exits,
/// which an in-process X11/Wayland owner cannot do for a short-lived CLI.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        #[cfg(target_os = "linux")]
        {
            if helper::copy_linux(text).is_ok() {
                return Ok(());
            }
        }

        arboard::Clipboard::new()
            .and_then(|mut cb| cb.set_text(text.to_string()))
            .map_err(|e| SnipzError::Clipboard(e.to_string()))
    }

    fn read_text(&mut self) -> Result<String> {
        arboard::Clipboard::new()
            .and_then(|mut cb| cb.get_text())
            .map_err(|e| SnipzError::Clipboard(e.to_string()))
    }
}

#[cfg(target_os = "linux")]
mod helper {
    use crate::error::{Result, SnipzError};
    use std::io::Write;
    use std::process::{Command, Stdio};

    /// Selection owners that outlive this process, in order of preference.
    const HELPERS: &[(&str, &[&str])] = &[
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    pub(super) fn copy_linux(text: &str) -> Result<()> {
        let mut last_err = None;
        for (program, args) in HELPERS {
            match pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err
            .unwrap_or_else(|| SnipzError::Clipboard("no clipboard helper".to_string())))
    }

    /// Feeds `text` to `program` on stdin and waits for it to exit.
    ///
    /// The helper's stdout and stderr are detached: xclip forks a process that
    /// keeps serving the selection, and it must not hold our pipes open.
    pub(super) fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SnipzError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(|e| {
            SnipzError::Clipboard(format!("Failed to wait for {}: {}", program, e))
        })?;
        written.map_err(|e| {
            SnipzError::Clipboard(format!("Failed to write to {}: {}", program, e))
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(SnipzError::Clipboard(format!("{} exited with {}", program, status)))
        }
    }

}

/// In-process clipboard for tests and headless use.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            denied: false,
        }
    }

    /// A clipboard that refuses every read and write.
    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.denied {
            return Err(SnipzError::Clipboard("permission denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn read_text(&mut self) -> Result<String> {
        if self.denied {
            return Err(SnipzError::Clipboard("permission denied".to_string()));
        }
        Ok(self.contents.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_then_paste() {
        let mut clipboard = MemoryClipboard::new();
        assert!(copy(&mut clipboard, "hello"));
        assert_eq!(paste(&mut clipboard).as_deref(), Some("hello"));
    }

    #[test]
    fn empty_clipboard_pastes_empty_string() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(paste(&mut clipboard).as_deref(), Some(""));
    }

    #[test]
    fn denied_copy_is_reported_not_raised() {
        let mut clipboard = MemoryClipboard::denied();
        assert!(!copy(&mut clipboard, "secret"));
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn denied_paste_is_none() {
        let mut clipboard = MemoryClipboard::denied();
        assert_eq!(paste(&mut clipboard), None);
    }

    #[test]
    fn works_through_trait_objects() {
        let mut clipboard: Box<dyn Clipboard> = Box::new(MemoryClipboard::with_text("x"));
        assert_eq!(paste(clipboard.as_mut()).as_deref(), Some("x"));
    }
}
