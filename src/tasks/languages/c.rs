use crate::sandbox::SandboxRunner;
use crate::tasks::languages::{built_binary_path, compile_native};
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::Result;

/// C, compiled with gcc.
#[derive(Debug)]
pub struct CTask {
    state: TaskState,
}

impl CTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(vec![
                "-Wall".to_string(),
                "-Werror".to_string(),
                "-std=c2x".to_string(),
                "-x".to_string(),
                "c".to_string(),
            ]),
            linkargs: Some(Vec::new()),
            interpreterargs: Some(Vec::new()),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        CTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for CTask {
    fn language(&self) -> &'static str {
        "c"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "gcc --version",
            pattern: r"gcc \(.*\) ([0-9.]*)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.c".to_string()
    }

    fn compile(&mut self, sandbox: &dyn SandboxRunner) -> Result<()> {
        compile_native(&mut self.state, "gcc", sandbox)
    }

    // The executable is the output of the compile step.
    fn executable_path(&self) -> String {
        built_binary_path(&self.state)
    }

    fn target_file(&self) -> String {
        String::new()
    }

    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }
}
