// src/system/executor.rs

use std::io::Read;
use std::process::{Command as StdCommand, Stdio};
use std::sync::atomic::Ordering;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::{
    CancellationToken,
    core::{arg_builder::render_command_line, invocation::CommandRunner},
    models::ExecutorSettings,
};

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("No program configured to run. Set the 'rac_path' variable.")]
    EmptyProgram,
    #[error("Could not start '{program}': {source}")]
    NotStarted {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Lost track of '{program}' while waiting for it: {source}")]
    WaitFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command failed ({status}): {stderr}")]
    NonZeroExit { status: String, stderr: String },
    #[error("Command did not finish within {secs} seconds.")]
    TimedOut { secs: u64 },
    #[error("Command '{command}' produced output that was not valid UTF-8")]
    InvalidUtf8Output {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("Operation was cancelled by the user.")]
    Cancelled,
}

/// Runs `rac` with piped output, a hard timeout and cooperative cancellation.
#[derive(Debug, Clone)]
pub struct RacExecutor {
    timeout: Duration,
    cancellation_token: CancellationToken,
}

impl RacExecutor {
    pub fn new(timeout: Duration, cancellation_token: CancellationToken) -> Self {
        Self {
            timeout,
            cancellation_token,
        }
    }

    pub fn from_settings(settings: &ExecutorSettings, cancellation_token: CancellationToken) -> Self {
        Self::new(Duration::from_secs(settings.timeout_secs), cancellation_token)
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation_token.load(Ordering::SeqCst)
    }
}

impl CommandRunner for RacExecutor {
    /// Blocks until the process exits, the timeout elapses or the token is
    /// set. Stdout is returned on success; stderr becomes the error text.
    fn execute(&self, program: &str, args: &[String]) -> Result<String, ExecutionError> {
        if program.trim().is_empty() {
            return Err(ExecutionError::EmptyProgram);
        }
        if self.is_cancelled() {
            return Err(ExecutionError::Cancelled);
        }

        let mut child = StdCommand::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecutionError::NotStarted {
                program: program.to_string(),
                source,
            })?;

        // Pipes are drained on their own threads while the child is polled.
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    let cancelled = self.is_cancelled();
                    if cancelled || started.elapsed() >= self.timeout {
                        log::debug!(
                            "Stopping child process (PID: {}), cancelled: {}.",
                            child.id(),
                            cancelled
                        );
                        if let Err(e) = child.kill() {
                            log::warn!("Failed to kill child process {}: {}", child.id(), e);
                        }
                        child.wait().ok();
                        return Err(if cancelled {
                            ExecutionError::Cancelled
                        } else {
                            ExecutionError::TimedOut {
                                secs: self.timeout.as_secs(),
                            }
                        });
                    }
                    thread::sleep(Duration::from_millis(50));
                }
                Err(source) => {
                    return Err(ExecutionError::WaitFailed {
                        program: program.to_string(),
                        source,
                    });
                }
            }
        };

        let stdout = join_reader(stdout_reader);
        let stderr = join_reader(stderr_reader);

        if !status.success() {
            return Err(ExecutionError::NonZeroExit {
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        String::from_utf8(stdout).map_err(|source| ExecutionError::InvalidUtf8Output {
            command: render_command_line(program, args),
            source,
        })
    }
}

/// Sets `cancellation_token` when the user presses `Ctrl+C`, so a running
/// `rac` is killed and the CLI exits with 130. Can only be installed once.
pub fn install_interrupt_handler(cancellation_token: &CancellationToken) -> Result<(), ctrlc::Error> {
    let token = cancellation_token.clone();
    ctrlc::set_handler(move || {
        token.store(true, Ordering::SeqCst);
    })
}

fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Some(mut pipe) = source
            && let Err(e) = pipe.read_to_end(&mut buffer)
        {
            log::warn!("Failed to read child output: {}", e);
        }
        buffer
    })
}

fn join_reader(handle: JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_else(|_| {
        log::warn!("Output reader thread panicked; output is lost.");
        Vec::new()
    })
}
