pub mod browser;
pub mod clipboard;

pub use browser::{SystemOpener, UrlOpener};
pub use clipboard::{ClipboardService, CopyMethod};
