use crate::sandbox::SandboxRunner;
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::Result;

/// Python 3, interpreted directly from the staged source.
#[derive(Debug)]
pub struct Python3Task {
    state: TaskState,
}

impl Python3Task {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(Vec::new()),
            linkargs: Some(Vec::new()),
            // No bytecode files, no site module.
            interpreterargs: Some(vec!["-B".to_string(), "-S".to_string()]),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        Python3Task {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for Python3Task {
    fn language(&self) -> &'static str {
        "python3"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "python3 --version",
            pattern: r"Python ([0-9.]+)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.py".to_string()
    }

    // No compile stage; adopting the source keeps the protocol uniform.
    fn compile(&mut self, _sandbox: &dyn SandboxRunner) -> Result<()> {
        self.state.executable_file_name = Some(self.state.source_file_name.clone());
        Ok(())
    }

    fn executable_path(&self) -> String {
        "/usr/bin/python3".to_string()
    }

    fn target_file(&self) -> String {
        self.state.source_file_name.clone()
    }

    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::testing::ScriptedRunner;

    #[test]
    fn test_compile_invokes_no_toolchain() {
        let mut task = Python3Task::new("prog.py", None, &TaskParams::default());
        let runner = ScriptedRunner::returning("", 0);

        task.compile(&runner).unwrap();

        assert_eq!(runner.command_count(), 0);
        assert_eq!(task.executable_file_name(), Some("prog.py"));
        assert!(task.compile_info().is_none());
    }

    #[test]
    fn test_run_command_passes_source_to_interpreter() {
        let mut task = Python3Task::new("prog.py", None, &TaskParams::default());
        let runner = ScriptedRunner::returning("", 0);
        task.compile(&runner).unwrap();

        assert_eq!(task.run_command(), "/usr/bin/python3 -B -S prog.py");
    }

    #[test]
    fn test_caller_interpreter_flags_replace_defaults() {
        let params = TaskParams {
            interpreterargs: Some(vec!["-u".to_string()]),
            ..Default::default()
        };
        let task = Python3Task::new("prog.py", None, &params);
        assert_eq!(task.run_command(), "/usr/bin/python3 -u prog.py");
    }
}
