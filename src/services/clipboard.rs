use arboard::Clipboard;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use color_eyre::Result;
use std::io::{self, Write};

/// Which mechanism ended up holding the copied text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    System,
    /// OSC 52 selection request written to the terminal
    Terminal,
    Skipped,
    Failed,
}

/// Best-effort clipboard: the system clipboard first, then the terminal's
/// own selection via OSC 52. Never returns an error.
pub struct ClipboardService {
    clipboard: Option<Clipboard>,
    system_enabled: bool,
    fallback: Box<dyn Write>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self {
            clipboard: Clipboard::new().ok(),
            system_enabled: true,
            fallback: Box::new(io::stdout()),
        }
    }

    /// Skips the system clipboard and writes the fallback to `fallback`
    pub fn terminal_only(fallback: Box<dyn Write>) -> Self {
        Self {
            clipboard: None,
            system_enabled: false,
            fallback,
        }
    }

    pub fn copy_text(&mut self, text: &str) -> CopyMethod {
        if text.is_empty() {
            return CopyMethod::Skipped;
        }
        if self.system_enabled {
            match self.copy_system(text) {
                Ok(()) => return CopyMethod::System,
                Err(error) => tracing::debug!(%error, "system clipboard unavailable, using OSC 52"),
            }
        }
        match self.copy_terminal(text) {
            Ok(()) => CopyMethod::Terminal,
            Err(error) => {
                tracing::warn!(%error, "clipboard copy failed");
                CopyMethod::Failed
            }
        }
    }

    fn copy_system(&mut self, text: &str) -> Result<()> {
        let clipboard = self.get_clipboard()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }

    fn copy_terminal(&mut self, text: &str) -> Result<()> {
        self.fallback.write_all(osc52_sequence(text).as_bytes())?;
        self.fallback.flush()?;
        Ok(())
    }

    fn get_clipboard(&mut self) -> Result<&mut Clipboard> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new()?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| color_eyre::eyre::eyre!("Clipboard unavailable"))
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape sequence asking the terminal to put `text` on the clipboard
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_osc52_encodes_text() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_fallback_writes_escape_sequence() {
        let buffer = SharedBuffer::default();
        let mut service = ClipboardService::terminal_only(Box::new(buffer.clone()));
        assert_eq!(service.copy_text("hi"), CopyMethod::Terminal);
        assert_eq!(buffer.0.borrow().as_slice(), osc52_sequence("hi").as_bytes());
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let buffer = SharedBuffer::default();
        let mut service = ClipboardService::terminal_only(Box::new(buffer.clone()));
        assert_eq!(service.copy_text(""), CopyMethod::Skipped);
        assert!(buffer.0.borrow().is_empty());
    }

    #[test]
    fn test_failing_fallback_is_swallowed() {
        let mut service = ClipboardService::terminal_only(Box::new(BrokenPipe));
        assert_eq!(service.copy_text("prompt"), CopyMethod::Failed);
    }
}
