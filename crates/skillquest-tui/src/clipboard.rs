use std::io::Write;
use std::process::{Command, Stdio};

/// Best-effort whole-string clipboard write. A failed copy is a silent
/// no-op; callers only set the confirmation flag when `copy` returns true.
pub trait Clipboard: Send {
    fn copy(&mut self, text: &str) -> bool;
}

/// Pipes through the first available platform clipboard utility.
pub struct SystemClipboard;

const CLIPBOARD_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        CLIPBOARD_COMMANDS.iter().any(|cmd| pipe_to(cmd, text))
    }
}

fn pipe_to(cmd: &[&str], text: &str) -> bool {
    let child = Command::new(cmd[0])
        .args(&cmd[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    let Ok(mut child) = child else {
        return false;
    };

    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
        // dropping stdin closes the pipe so the utility sees EOF
    }

    matches!(child.wait(), Ok(status) if status.success())
}
