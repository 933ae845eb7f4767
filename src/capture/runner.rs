use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;
use crate::errors::A11yError;
use crate::models::captured_run::CapturedRun;
use super::command::CommandSpec;
use tracing::{debug, info, warn};

/// Run `spec` to completion and capture stdout followed by stderr.
///
/// The wait is bounded by `timeout` and aborted when `cancel` fires; in both
/// cases the child and everything it spawned are killed before returning.
pub async fn capture_output(
    spec: &CommandSpec,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<CapturedRun, A11yError> {
    let command_line = spec.display();
    info!(command = %command_line, "Running test command");

    let mut command = Command::new(&spec.program);
    command
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = &spec.working_dir {
        command.current_dir(dir);
    }
    // Own process group, so npm/jest workers can be signalled with the shell
    #[cfg(unix)]
    command.process_group(0);

    let mut child = command
        .spawn()
        .map_err(|e| A11yError::Launch(format!("{}: {}", command_line, e)))?;
    let pid = child.id();

    let started = Instant::now();
    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(A11yError::Cancelled(format!(
            "test command cancelled: {}",
            command_line
        ))),
        collected = tokio::time::timeout(timeout, collect_output(&mut child)) => match collected {
            Ok(result) => result.map_err(A11yError::from),
            Err(_) => Err(A11yError::Timeout(format!(
                "test command did not exit after {:?}: {}",
                timeout,
                command_line
            ))),
        },
    };

    let (text, exit_code) = match outcome {
        Ok(output) => output,
        Err(e) => {
            warn!(command = %command_line, error = %e, "Killing test command");
            kill_process_group(pid);
            if let Err(kill_err) = child.kill().await {
                debug!(error = %kill_err, "Test command already exited");
            }
            return Err(e);
        }
    };

    info!(
        exit_code,
        bytes = text.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Test command finished"
    );

    Ok(CapturedRun::new(text, exit_code))
}

/// SIGKILL the group led by `pid`. The group id equals the leader's pid.
#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Some(pid) = pid.and_then(|p| i32::try_from(p).ok()) else {
        return;
    };
    if let Err(errno) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
        debug!(pid, error = %errno, "Process group already gone");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

/// Drain both pipes concurrently, then reap the child.
async fn collect_output(child: &mut Child) -> Result<(String, i32), std::io::Error> {
    let mut stdout = child.stdout.take().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout not captured")
    })?;
    let mut stderr = child.stderr.take().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stderr not captured")
    })?;

    let mut out = Vec::new();
    let mut err = Vec::new();
    let (out_read, err_read) = tokio::join!(stdout.read_to_end(&mut out), stderr.read_to_end(&mut err));
    out_read?;
    err_read?;

    let status = child.wait().await?;

    let mut text = String::from_utf8_lossy(&out).into_owned();
    text.push_str(&String::from_utf8_lossy(&err));
    Ok((text, status.code().unwrap_or(-1)))
}
