//! Plain-process runner for development and tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{SandboxOutcome, SandboxRunner, SandboxStatus};

/// Runs commands as ordinary child processes, without isolation.
///
/// Limit enforcement belongs to the real sandbox the service deploys; this
/// runner only mirrors its capture contract (combined output, structured
/// status, guaranteed return) so the task layer can be exercised locally.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    workdir: PathBuf,
}

impl ProcessRunner {
    /// Runner executing commands through `/bin/sh -c` inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        ProcessRunner {
            workdir: workdir.into(),
        }
    }
}

impl SandboxRunner for ProcessRunner {
    fn run_in_sandbox(&self, command: &str, stdin: Option<&str>) -> SandboxOutcome {
        let mut child = match Command::new("/bin/sh")
            .arg("-c")
            .arg(command)
            .current_dir(&self.workdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                log::warn!("failed to launch {:?}: {}", command, e);
                return SandboxOutcome {
                    output: format!("failed to launch command: {}", e),
                    status: SandboxStatus::default(),
                };
            }
        };

        if let (Some(data), Some(mut pipe)) = (stdin, child.stdin.take()) {
            // The child may exit before draining the pipe; that is its choice.
            let _ = pipe.write_all(data.as_bytes());
        }

        match child.wait_with_output() {
            Ok(output) => output.into(),
            Err(e) => SandboxOutcome {
                output: format!("failed to collect output: {}", e),
                status: SandboxStatus::default(),
            },
        }
    }
}
