use crate::sandbox::SandboxRunner;
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::Result;

/// PHP, interpreted directly from the staged source.
#[derive(Debug)]
pub struct PhpTask {
    state: TaskState,
}

impl PhpTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(Vec::new()),
            linkargs: Some(Vec::new()),
            interpreterargs: Some(Vec::new()),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        PhpTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for PhpTask {
    fn language(&self) -> &'static str {
        "php"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "php --version",
            pattern: r"PHP ([0-9.]+)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.php".to_string()
    }

    fn compile(&mut self, _sandbox: &dyn SandboxRunner) -> Result<()> {
        self.state.executable_file_name = Some(self.state.source_file_name.clone());
        Ok(())
    }

    fn executable_path(&self) -> String {
        "/usr/bin/php".to_string()
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
    fn test_run_command_has_no_default_flags() {
        let mut task = PhpTask::new("prog.php", None, &TaskParams::default());
        let runner = ScriptedRunner::returning("", 0);
        task.compile(&runner).unwrap();

        assert_eq!(task.run_command(), "/usr/bin/php prog.php");
    }
}
