// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The worker process bridge.
//!
//! [`ProcessWorkerRunner`] implements [`WorkerRunner`] by spawning one
//! worker process per invocation, writing the minimal payload to its stdin,
//! draining stdout and stderr concurrently, and racing natural exit against
//! the configured deadline and the caller's cancellation token. Termination
//! on timeout or cancellation takes down the worker's whole process group,
//! since the worker may fork helpers of its own.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::consts::{
    DEFAULT_WORKER_MODULE, DEFAULT_WORKER_PROGRAM, DEFAULT_WORKER_TIMEOUT_SECS,
    STDOUT_PREFIX_LIMIT,
};
use crate::errors::{WorkerError, WorkerResult};
use crate::observability::messages::worker::{WorkerExited, WorkerKilled, WorkerSpawned};
use crate::traits::WorkerRunner;
use crate::worker::payload::WorkerPayload;
use crate::worker::workdir::discover_worker_root;

/// Tracing target for bridge operations.
const WORKER_TARGET: &str = "findcodes::worker";

/// Configuration for the worker process bridge.
///
/// Replaces the embedded literals of earlier iterations so tests can inject
/// fake workers and short timeouts.
///
/// # Defaults
/// * `program` - `python`
/// * `args` - `["-m", "aiparser.entrypoints.find_codes_entrypoint"]`
/// * `timeout` - 600 seconds
/// * `working_dir` - none; resolved by [`discover_worker_root`] at
///   construction
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
    pub working_dir: Option<PathBuf>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_WORKER_PROGRAM.to_string(),
            args: vec!["-m".to_string(), DEFAULT_WORKER_MODULE.to_string()],
            timeout: Duration::from_secs(DEFAULT_WORKER_TIMEOUT_SECS),
            working_dir: None,
        }
    }
}

/// Executes worker invocations as supervised child processes.
pub struct ProcessWorkerRunner {
    config: WorkerConfig,
    working_dir: PathBuf,
}

impl ProcessWorkerRunner {
    /// Creates a runner, resolving the working directory up front.
    ///
    /// An explicitly configured `working_dir` wins; otherwise the checkout
    /// root is discovered by a bounded upward walk. Fails with
    /// [`WorkerError::EnvironmentNotFound`] when neither yields a directory.
    pub fn new(config: WorkerConfig) -> WorkerResult<Self> {
        let working_dir = match &config.working_dir {
            Some(dir) => dir.clone(),
            None => discover_worker_root()?,
        };
        Ok(Self {
            config,
            working_dir,
        })
    }

    /// The directory worker processes are spawned in.
    pub fn working_dir(&self) -> &PathBuf {
        &self.working_dir
    }

    fn spawn_worker(&self) -> WorkerResult<Child> {
        let mut command = Command::new(&self.config.program);
        command
            .args(&self.config.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // The worker leads its own process group so a timeout/cancel kill
        // reaches any helpers it forks.
        command.process_group(0);

        command.spawn().map_err(|source| WorkerError::LaunchFailed {
            program: self.config.program.clone(),
            source,
        })
    }
}

#[async_trait]
impl WorkerRunner for ProcessWorkerRunner {
    async fn run(
        &self,
        use_case_id: &str,
        payload: &WorkerPayload,
        cancel: &CancellationToken,
    ) -> WorkerResult<String> {
        if cancel.is_cancelled() {
            return Err(WorkerError::Cancelled);
        }

        let wire = payload.to_wire();
        let started = Instant::now();

        let mut child = self.spawn_worker()?;
        tracing::debug!(
            target: WORKER_TARGET,
            "{}",
            WorkerSpawned {
                use_case_id,
                program: &self.config.program,
            }
        );

        write_payload(&mut child, &wire).await?;

        // Both drains start before the exit wait; reading one stream to
        // completion first can deadlock once the worker fills the other
        // pipe's buffer.
        let stdout_task = drain_stdout(&mut child)?;
        let stderr_task = drain_stderr(&mut child)?;

        let status = tokio::select! {
            status = child.wait() => status.map_err(|source| WorkerError::Io {
                context: "waiting for worker exit",
                source,
            })?,
            _ = tokio::time::sleep(self.config.timeout) => {
                tracing::warn!(
                    target: WORKER_TARGET,
                    "{}",
                    WorkerKilled { use_case_id, reason: "deadline exceeded" }
                );
                kill_worker_tree(&mut child).await;
                return Err(WorkerError::Timeout { timeout: self.config.timeout });
            }
            _ = cancel.cancelled() => {
                tracing::debug!(
                    target: WORKER_TARGET,
                    "{}",
                    WorkerKilled { use_case_id, reason: "cancelled by caller" }
                );
                kill_worker_tree(&mut child).await;
                return Err(WorkerError::Cancelled);
            }
        };

        let stdout = join_drain(stdout_task, "draining stdout").await?;
        let stderr = join_drain(stderr_task, "draining stderr").await?;
        let stdout = String::from_utf8_lossy(&stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&stderr).trim().to_string();

        let exit_code = status.code().unwrap_or(-1);
        tracing::debug!(
            target: WORKER_TARGET,
            "{}",
            WorkerExited {
                use_case_id,
                exit_code,
                duration: started.elapsed(),
            }
        );

        if !status.success() {
            return Err(WorkerError::ExecutionFailed { exit_code, stderr });
        }

        if stdout.is_empty() {
            return Err(WorkerError::EmptyOutput { stderr });
        }

        if serde_json::from_str::<serde_json::Value>(&stdout).is_err() {
            return Err(WorkerError::MalformedOutput {
                prefix: stdout.chars().take(STDOUT_PREFIX_LIMIT).collect(),
            });
        }

        Ok(stdout)
    }
}

/// Writes the wire payload to the worker's stdin and closes the pipe so the
/// worker sees end-of-input.
async fn write_payload(child: &mut Child, wire: &str) -> WorkerResult<()> {
    let mut stdin = child.stdin.take().ok_or(WorkerError::Io {
        context: "capturing worker stdin",
        source: std::io::Error::new(ErrorKind::BrokenPipe, "stdin not captured"),
    })?;

    let result = async {
        stdin.write_all(wire.as_bytes()).await?;
        stdin.shutdown().await
    }
    .await;

    // A worker that exits before reading its input breaks the pipe; the
    // exit status carries the real story, so don't fail here.
    if let Err(source) = result {
        if source.kind() != ErrorKind::BrokenPipe {
            kill_worker_tree(child).await;
            return Err(WorkerError::Io {
                context: "writing payload to worker stdin",
                source,
            });
        }
    }

    // Dropping stdin closes the pipe.
    Ok(())
}

fn drain_stdout(child: &mut Child) -> WorkerResult<JoinHandle<std::io::Result<Vec<u8>>>> {
    let mut stdout: ChildStdout = child.stdout.take().ok_or(WorkerError::Io {
        context: "capturing worker stdout",
        source: std::io::Error::new(ErrorKind::BrokenPipe, "stdout not captured"),
    })?;
    Ok(tokio::spawn(async move {
        let mut buffer = Vec::new();
        stdout.read_to_end(&mut buffer).await?;
        Ok(buffer)
    }))
}

fn drain_stderr(child: &mut Child) -> WorkerResult<JoinHandle<std::io::Result<Vec<u8>>>> {
    let mut stderr: ChildStderr = child.stderr.take().ok_or(WorkerError::Io {
        context: "capturing worker stderr",
        source: std::io::Error::new(ErrorKind::BrokenPipe, "stderr not captured"),
    })?;
    Ok(tokio::spawn(async move {
        let mut buffer = Vec::new();
        stderr.read_to_end(&mut buffer).await?;
        Ok(buffer)
    }))
}

async fn join_drain(
    task: JoinHandle<std::io::Result<Vec<u8>>>,
    context: &'static str,
) -> WorkerResult<Vec<u8>> {
    task.await
        .map_err(|join_error| WorkerError::Io {
            context,
            source: std::io::Error::other(join_error),
        })?
        .map_err(|source| WorkerError::Io { context, source })
}

/// Forcibly terminates the worker and its entire process group, then reaps
/// the child so no zombie lingers.
async fn kill_worker_tree(child: &mut Child) {
    if let Some(pid) = child.id() {
        // The child leads its own group (see spawn), so killing the group
        // takes down every descendant too.
        unsafe {
            libc::killpg(pid as libc::pid_t, libc::SIGKILL);
        }
    }
    // Reaps the direct child.
    let _ = child.kill().await;
}
