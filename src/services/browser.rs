use color_eyre::Result;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;

/// Hands external links to something that can show them
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Delegates to the platform's default URL handler
#[derive(Debug, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        let (program, args) = opener_command(url);
        spawn_reaped(program, &args)?;
        tracing::info!(url, program, "opened link");
        Ok(())
    }
}

/// Starts the opener and waits on it in the background so it never lingers
/// as a zombie
fn spawn_reaped(program: &'static str, args: &[String]) -> Result<JoinHandle<()>> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::warn!(program, %status, "link opener exited with failure");
        }
        Ok(_) => {}
        Err(error) => tracing::warn!(program, %error, "failed to wait for link opener"),
    }))
}

fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        windows_opener_command(url)
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// cmd.exe splits an unquoted line at `&`, so the URL goes straight to the
/// protocol handler instead
fn windows_opener_command(url: &str) -> (&'static str, Vec<String>) {
    (
        "rundll32",
        vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
    )
}
