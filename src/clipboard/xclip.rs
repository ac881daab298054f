//! X11 clipboard through the `xclip` utility

use std::env;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use log::{debug, info};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};

use crate::clipboard::ClipboardSink;
use crate::config::ServerConfig;
use crate::error::ClipboardError;

const XCLIP: &str = "xclip";
const DEFAULT_DISPLAY: &str = ":0";

/// Clipboard backed by `xclip -selection clipboard`.
///
/// Every call spawns a fresh `xclip` process with `DISPLAY` and `XAUTHORITY`
/// set, so the server can run outside the desktop session.
#[derive(Debug, Clone)]
pub struct XclipClipboard {
    program: PathBuf,
    display: String,
    xauthority: PathBuf,
    image_path: PathBuf,
}

impl XclipClipboard {
    pub fn new(display: String, xauthority: PathBuf, image_path: PathBuf) -> Self {
        Self {
            program: PathBuf::from(XCLIP),
            display,
            xauthority,
            image_path,
        }
    }

    /// Use another xclip-compatible executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Resolves display settings from the configuration, then the environment
    pub fn from_config(config: &ServerConfig) -> Self {
        let display = config
            .display
            .clone()
            .or_else(|| env::var("DISPLAY").ok())
            .unwrap_or_else(|| DEFAULT_DISPLAY.to_string());

        let xauthority = config
            .xauthority
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".Xauthority")))
            .unwrap_or_else(|| PathBuf::from(".Xauthority"));

        Self::new(display, xauthority, config.image_temp_path_buf())
            .with_program(&config.xclip_program)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .env("DISPLAY", &self.display)
            .env("XAUTHORITY", &self.xauthority)
            .args(["-selection", "clipboard"])
            .kill_on_drop(true);
        command
    }

    fn spawn(&self, command: &mut Command) -> Result<Child, ClipboardError> {
        command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ClipboardError::UtilityMissing(self.program.display().to_string())
            }
            _ => ClipboardError::Io(e),
        })
    }

    /// Runs a command that takes ownership of the selection.
    ///
    /// xclip forks a selection owner that inherits stdout and stderr and
    /// lives until another client takes the clipboard, so only the exit
    /// status is awaited. stderr is drained on a side task and its output is
    /// used only after a failed exit, when no owner was forked.
    async fn set_selection(
        &self,
        mut command: Command,
        input: Option<&[u8]>,
        operation: &'static str,
    ) -> Result<(), ClipboardError> {
        command
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let mut child = self.spawn(&mut command)?;

        let stderr_reader = child.stderr.take().map(|mut pipe| {
            tokio::spawn(async move {
                let mut stderr = Vec::new();
                let _ = pipe.read_to_end(&mut stderr).await;
                stderr
            })
        });

        if let Some(bytes) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(bytes).await?;
                stdin.shutdown().await?;
            }
        }

        let status = child.wait().await?;
        if status.success() {
            if let Some(reader) = stderr_reader {
                reader.abort();
            }
            return Ok(());
        }

        let stderr = match stderr_reader {
            Some(reader) => reader.await.unwrap_or_default(),
            None => Vec::new(),
        };
        Err(ClipboardError::CommandFailed {
            operation,
            stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
        })
    }

    /// Runs a command that prints the selection and exits
    async fn read_selection(
        &self,
        mut command: Command,
        operation: &'static str,
    ) -> Result<Vec<u8>, ClipboardError> {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = self.spawn(&mut command)?.wait_with_output().await?;
        if !output.status.success() {
            return Err(ClipboardError::CommandFailed {
                operation,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ClipboardSink for XclipClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.set_selection(self.command(), Some(text.as_bytes()), "copy text to clipboard")
            .await?;
        debug!("Text copied to clipboard: {} characters", text.chars().count());
        Ok(())
    }

    async fn set_image(&self, png: &[u8]) -> Result<(), ClipboardError> {
        tokio::fs::write(&self.image_path, png).await?;

        let mut command = self.command();
        command.args(["-t", "image/png", "-i"]).arg(&self.image_path);
        self.set_selection(command, None, "copy image to clipboard")
            .await?;

        info!(
            "Image copied to clipboard from {} ({} bytes)",
            self.image_path.display(),
            png.len()
        );
        Ok(())
    }

    async fn get_text(&self) -> Result<String, ClipboardError> {
        let mut command = self.command();
        command.arg("-o");
        let stdout = self.read_selection(command, "read clipboard").await?;
        Ok(String::from_utf8(stdout)?)
    }
}
