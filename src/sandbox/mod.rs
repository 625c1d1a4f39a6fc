//! Sandbox runner contract.
//!
//! The task layer never executes a subprocess directly. Every toolchain
//! invocation goes through [`SandboxRunner`], the external primitive that
//! enforces time, memory, and privilege limits. The contract is a guaranteed
//! return: launch problems are encoded in the outcome, never raised into the
//! task layer.

pub mod process;

pub use process::ProcessRunner;

use serde::{Deserialize, Serialize};

/// Structured completion status of one sandboxed command.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SandboxStatus {
    /// Exit code, if the process ran to completion. `None` when the command
    /// could not be launched or was killed by a signal.
    pub exit_code: Option<i32>,
    /// Wall or CPU time limit was hit.
    pub timed_out: bool,
    /// Memory limit was hit.
    pub memory_exceeded: bool,
}

impl SandboxStatus {
    /// Clean completion: exit code zero with no limit violations.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0) && !self.timed_out && !self.memory_exceeded
    }

    /// Status for a process that exited with `exit_code`.
    pub fn completed(exit_code: i32) -> Self {
        SandboxStatus {
            exit_code: Some(exit_code),
            timed_out: false,
            memory_exceeded: false,
        }
    }
}

/// Captured output plus status from one sandboxed command.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SandboxOutcome {
    /// Combined stdout and stderr.
    pub output: String,
    pub status: SandboxStatus,
}

impl From<std::process::Output> for SandboxOutcome {
    fn from(output: std::process::Output) -> Self {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        SandboxOutcome {
            output: combined,
            status: SandboxStatus {
                exit_code: output.status.code(),
                timed_out: false,
                memory_exceeded: false,
            },
        }
    }
}

/// External execution primitive.
///
/// Implementations run `command` under enforced resource and privilege
/// limits, feeding `stdin` to the process when given. The call blocks until
/// the command finishes or a limit fires, and always returns an outcome; no
/// failure of the runner itself escapes into the task layer.
pub trait SandboxRunner: Send + Sync {
    fn run_in_sandbox(&self, command: &str, stdin: Option<&str>) -> SandboxOutcome;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{SandboxOutcome, SandboxRunner, SandboxStatus};

    /// Runner returning a canned outcome, recording every command it sees.
    pub struct ScriptedRunner {
        outcome: SandboxOutcome,
        commands: Mutex<Vec<(String, Option<String>)>>,
    }

    impl ScriptedRunner {
        pub fn returning(output: &str, exit_code: i32) -> Self {
            ScriptedRunner {
                outcome: SandboxOutcome {
                    output: output.to_string(),
                    status: SandboxStatus::completed(exit_code),
                },
                commands: Mutex::new(Vec::new()),
            }
        }

        pub fn last_command(&self) -> Option<String> {
            self.commands
                .lock()
                .unwrap()
                .last()
                .map(|(cmd, _)| cmd.clone())
        }

        pub fn command_count(&self) -> usize {
            self.commands.lock().unwrap().len()
        }
    }

    impl SandboxRunner for ScriptedRunner {
        fn run_in_sandbox(&self, command: &str, stdin: Option<&str>) -> SandboxOutcome {
            self.commands
                .lock()
                .unwrap()
                .push((command.to_string(), stdin.map(str::to_string)));
            self.outcome.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success() {
        assert!(SandboxStatus::completed(0).success());
        assert!(!SandboxStatus::completed(1).success());
        assert!(!SandboxStatus::default().success());
    }

    #[test]
    fn test_status_limit_violations_are_not_success() {
        let timed_out = SandboxStatus {
            exit_code: Some(0),
            timed_out: true,
            memory_exceeded: false,
        };
        assert!(!timed_out.success());

        let oom = SandboxStatus {
            exit_code: Some(0),
            timed_out: false,
            memory_exceeded: true,
        };
        assert!(!oom.success());
    }
}
