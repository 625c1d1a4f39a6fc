use crate::sandbox::SandboxRunner;
use crate::tasks::languages::{built_binary_path, compile_native};
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::Result;

/// C++, compiled with g++.
#[derive(Debug)]
pub struct CppTask {
    state: TaskState,
}

impl CppTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(vec![
                "-Wall".to_string(),
                "-Werror".to_string(),
                "-std=c++17".to_string(),
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
        CppTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for CppTask {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "g++ --version",
            pattern: r"g\+\+ \(.*\) ([0-9.]*)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.cpp".to_string()
    }

    fn compile(&mut self, sandbox: &dyn SandboxRunner) -> Result<()> {
        compile_native(&mut self.state, "g++", sandbox)
    }

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
