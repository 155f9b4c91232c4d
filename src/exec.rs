//! Bounded subprocess execution with combined output capture.
//!
//! The output-driven rule engine needs to actually run a command to read
//! its error text. That execution is strictly bounded:
//!
//! - The root is spawned directly with its arguments; no shell is involved,
//!   so no expansions, pipes, or redirections happen.
//! - stdout and stderr are drained on dedicated reader threads (a full pipe
//!   must never deadlock the child).
//! - A deadline is polled while the child runs; on expiry the child is
//!   killed and reaped, and the run reports [`ExecError::Timeout`]. Partial
//!   output from a killed child is never trusted.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Default wall-clock budget for a diagnostic run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Poll interval while waiting on the child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A wall-clock deadline for a single execution.
#[derive(Debug, Clone, Copy)]
struct Deadline {
    end: Instant,
}

impl Deadline {
    fn after(timeout: Duration) -> Self {
        Self {
            end: Instant::now() + timeout,
        }
    }

    fn expired(&self) -> bool {
        Instant::now() >= self.end
    }
}

/// Errors from the execution layer.
///
/// These are "cannot diagnose" conditions, not diagnoses: the caller
/// surfaces them as the absence of a result, never as a proposed fix.
#[derive(Debug)]
pub enum ExecError {
    /// The command line was empty.
    Empty,
    /// The executable does not exist. The caller should defer to the typo
    /// corrector; this engine only handles executable-but-wrong commands.
    NotFound,
    /// The deadline elapsed; the child was killed and reaped.
    Timeout,
    /// Spawning or waiting failed for another reason.
    Io(std::io::Error),
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::NotFound => write!(f, "executable not found"),
            Self::Timeout => write!(f, "execution timed out"),
            Self::Io(e) => write!(f, "execution failed: {e}"),
        }
    }
}

impl std::error::Error for ExecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExecError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Captured result of a bounded run.
#[derive(Debug)]
pub struct CapturedOutput {
    /// The child's exit status.
    pub status: ExitStatus,
    /// Combined stdout followed by stderr, lossily decoded.
    pub output: String,
}

impl CapturedOutput {
    /// True when the child exited successfully.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `command` under `timeout`, capturing combined stdout and stderr.
///
/// The command is whitespace-tokenized and the first token spawned
/// directly; shell syntax is not interpreted.
pub fn run_captured(command: &str, timeout: Duration) -> Result<CapturedOutput, ExecError> {
    let mut tokens = command.split_whitespace();
    let program = tokens.next().ok_or(ExecError::Empty)?;

    let mut child = Command::new(program)
        .args(tokens)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExecError::NotFound
            } else {
                ExecError::Io(e)
            }
        })?;

    // Drain both pipes off-thread so a chatty child cannot block on a full
    // pipe while we wait for it.
    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    let status = wait_with_deadline(&mut child, Deadline::after(timeout))?;

    let mut output = join_reader(stdout);
    output.push_str(&join_reader(stderr));
    Ok(CapturedOutput { status, output })
}

fn spawn_reader<R: Read + Send + 'static>(mut source: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = source.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: Option<thread::JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}

/// Poll the child until it exits or the deadline expires. On expiry the
/// child is killed and reaped before the error is returned; a killed
/// child's output is discarded by the caller.
fn wait_with_deadline(child: &mut Child, deadline: Deadline) -> Result<ExitStatus, ExecError> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if deadline.expired() {
            tracing::warn!("diagnostic run exceeded its deadline; killing child");
            let _ = child.kill();
            let _ = child.wait(); // reap
            return Err(ExecError::Timeout);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            run_captured("   ", DEFAULT_TIMEOUT),
            Err(ExecError::Empty)
        ));
    }

    #[test]
    fn missing_executable_maps_to_not_found() {
        assert!(matches!(
            run_captured("definitely-not-a-real-binary-1b2c", DEFAULT_TIMEOUT),
            Err(ExecError::NotFound)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn captures_combined_output() {
        let out = run_captured("echo hello", DEFAULT_TIMEOUT).unwrap();
        assert!(out.success());
        assert!(out.output.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn success_with_no_output_is_empty() {
        let out = run_captured("true", DEFAULT_TIMEOUT).unwrap();
        assert!(out.success());
        assert!(out.output.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn deadline_kills_the_child() {
        let start = Instant::now();
        let result = run_captured("sleep 5", Duration::from_millis(100));
        assert!(matches!(result, Err(ExecError::Timeout)));
        // Well under the child's own runtime: the kill was real.
        assert!(start.elapsed() < Duration::from_secs(2));
    }
}
