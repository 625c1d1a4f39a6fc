//! The language task contract.

use crate::sandbox::{SandboxOutcome, SandboxRunner};
use crate::tasks::params::TaskParams;
use crate::types::{CompileInfo, Result, TaskError};

/// How to ask a toolchain for its version: a shell command plus a pattern
/// whose single capture group extracts the version string from its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionCommand {
    pub command: &'static str,
    pub pattern: &'static str,
}

/// Per-submission state shared by every language variant.
///
/// One instance serves exactly one compile/execute cycle and is then
/// discarded; nothing here is shared across requests.
#[derive(Clone, Debug)]
pub struct TaskState {
    /// Correlation id carried through log lines for this submission.
    pub instance_id: String,
    pub(crate) source_file_name: String,
    pub(crate) input: Option<String>,
    pub(crate) params: TaskParams,
    pub(crate) executable_file_name: Option<String>,
    pub(crate) cmpinfo: Option<CompileInfo>,
}

impl TaskState {
    /// State for one submission, with caller params overlaid on the
    /// variant's defaults (caller value wins on collision).
    pub(crate) fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
        defaults: &TaskParams,
    ) -> Self {
        TaskState {
            instance_id: uuid::Uuid::new_v4().to_string(),
            source_file_name: source_file_name.into(),
            input,
            params: params.overlay(defaults),
            executable_file_name: None,
            cmpinfo: None,
        }
    }

    /// Record a compile-phase outcome. Toolchain failure (non-zero exit,
    /// timeout, or memory limit) becomes `TaskError::Compile` carrying the
    /// same diagnostics kept in `cmpinfo`.
    pub(crate) fn record_compile(&mut self, outcome: SandboxOutcome) -> Result<()> {
        let info = CompileInfo {
            output: outcome.output,
            status: outcome.status,
        };
        let succeeded = info.status.success();
        self.cmpinfo = Some(info.clone());
        if succeeded {
            log::debug!("[{}] compiled {}", self.instance_id, self.source_file_name);
            Ok(())
        } else {
            log::info!(
                "[{}] compile failed for {}",
                self.instance_id,
                self.source_file_name
            );
            Err(TaskError::Compile(info))
        }
    }

    /// Basename of the source file. Compile commands name files relative to
    /// the staging directory the sandbox runs in.
    pub(crate) fn source_basename(&self) -> String {
        std::path::Path::new(&self.source_file_name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_file_name.clone())
    }
}

/// Contract every language variant implements.
///
/// One protocol covers every toolchain shape: native compilers produce a
/// binary during [`compile`](LanguageTask::compile), interpreted variants
/// stage or adopt the source file instead, and the caller then builds the run
/// invocation from [`executable_path`](LanguageTask::executable_path) and
/// [`target_file`](LanguageTask::target_file) without knowing which kind it
/// holds.
pub trait LanguageTask: Send {
    /// Canonical language identifier.
    fn language(&self) -> &'static str;

    /// Side-effect-free description of the toolchain version probe.
    fn version_command(&self) -> VersionCommand;

    /// Filename to stage the submission under when the caller supplied none.
    /// Pure function of the source text and the variant.
    fn default_file_name(&self, source_text: &str) -> String;

    /// Compile or stage the submission. Sets the executable file name
    /// exactly once; compiled variants also record `cmpinfo`. Invoked at
    /// most once per task.
    fn compile(&mut self, sandbox: &dyn SandboxRunner) -> Result<()>;

    /// Command or path launching the run phase: the built binary for
    /// compiled variants, the interpreter binary otherwise.
    fn executable_path(&self) -> String;

    /// File argument appended to the run command, or `""` when the
    /// executable path alone is sufficient.
    fn target_file(&self) -> String;

    fn state(&self) -> &TaskState;

    fn state_mut(&mut self) -> &mut TaskState;

    fn source_file_name(&self) -> &str {
        &self.state().source_file_name
    }

    fn input(&self) -> Option<&str> {
        self.state().input.as_deref()
    }

    /// Artifact named by `compile()`; `None` before it runs.
    fn executable_file_name(&self) -> Option<&str> {
        self.state().executable_file_name.as_deref()
    }

    /// Compile diagnostics, present once a compiled variant has run (or
    /// refused to run) its toolchain.
    fn compile_info(&self) -> Option<&CompileInfo> {
        self.state().cmpinfo.as_ref()
    }

    /// Full run command: executable path, then interpreter flags, then the
    /// target file when one is needed.
    fn run_command(&self) -> String {
        let mut parts: Vec<String> = vec![self.executable_path()];
        parts.extend(self.state().params.interpreterargs().iter().cloned());
        let target = self.target_file();
        if !target.is_empty() {
            parts.push(target);
        }
        parts.join(" ")
    }

    /// Run the compiled/staged submission, feeding the task's stdin payload.
    fn execute(&self, sandbox: &dyn SandboxRunner) -> SandboxOutcome {
        sandbox.run_in_sandbox(&self.run_command(), self.input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::SandboxStatus;

    #[test]
    fn test_state_overlays_defaults() {
        let caller = TaskParams {
            compileargs: Some(vec!["-O2".to_string()]),
            ..Default::default()
        };
        let defaults = TaskParams {
            compileargs: Some(vec!["-Wall".to_string()]),
            interpreterargs: Some(vec!["-B".to_string()]),
            ..Default::default()
        };

        let state = TaskState::new("prog.c", None, &caller, &defaults);
        assert_eq!(state.params.compileargs(), ["-O2".to_string()].as_slice());
        assert_eq!(
            state.params.interpreterargs(),
            ["-B".to_string()].as_slice()
        );
        assert!(state.executable_file_name.is_none());
        assert!(state.cmpinfo.is_none());
    }

    #[test]
    fn test_record_compile_success_keeps_diagnostics() {
        let mut state =
            TaskState::new("prog.c", None, &TaskParams::default(), &TaskParams::default());
        let outcome = SandboxOutcome {
            output: String::new(),
            status: SandboxStatus::completed(0),
        };
        assert!(state.record_compile(outcome).is_ok());
        assert!(state.cmpinfo.is_some());
    }

    #[test]
    fn test_record_compile_timeout_is_a_compile_error() {
        let mut state =
            TaskState::new("prog.c", None, &TaskParams::default(), &TaskParams::default());
        let outcome = SandboxOutcome {
            output: "compiler ran out of time".to_string(),
            status: SandboxStatus {
                exit_code: None,
                timed_out: true,
                memory_exceeded: false,
            },
        };
        match state.record_compile(outcome) {
            Err(TaskError::Compile(info)) => assert!(info.status.timed_out),
            other => panic!("expected compile error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_source_basename_strips_directories() {
        let state = TaskState::new(
            "/var/spool/jobs/42/prog.c",
            None,
            &TaskParams::default(),
            &TaskParams::default(),
        );
        assert_eq!(state.source_basename(), "prog.c");
    }
}
